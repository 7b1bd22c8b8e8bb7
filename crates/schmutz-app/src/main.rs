// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Schmutz — Print/Scan Degradation Emulator
//
// Entry point. Initialises logging, loads the source image and range
// configuration, and writes the requested degraded copies.

mod cli;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use schmutz_core::DegradeConfig;
use schmutz_core::error::Result;
use schmutz_degrade::{DegradePipeline, load_rgb};

use cli::AppArgs;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = AppArgs::parse();

    if let Err(err) = run(&args) {
        tracing::error!(error = %err, "degradation run failed");
        eprintln!("schmutz: {err}");
        std::process::exit(1);
    }
}

fn run(args: &AppArgs) -> Result<()> {
    tracing::info!(input = %args.input.display(), copies = args.nb_copy, "Schmutz starting");

    let config = match &args.config {
        Some(path) => DegradeConfig::from_json_path(path)?,
        None => DegradeConfig::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let img = load_rgb(&args.input)?;
    let plan = args.plan();
    tracing::debug!(?plan, "Degradation plan assembled");

    let pipeline = DegradePipeline::new(config)?;
    pipeline.write_copies(&img, &plan, &args.output_dir, args.nb_copy, &mut rng)?;

    println!("Modified images saved in: {}", args.output_dir.display());
    Ok(())
}
