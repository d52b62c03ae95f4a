// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Phonebook printer
//
// Entry point. Initialises logging, builds the run configuration, and drives
// load → sort → render. Every failure propagates here and ends the process
// with a diagnostic and exit status 1.

mod args;

use clap::Parser;
use phonebook_core::error::Result;
use phonebook_core::{load_directory, sort_directory};
use phonebook_document::Renderer;

use args::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        tracing::error!(error = %err, "phonebook failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let (file, config) = Cli::parse().into_config()?;

    let mut directory = load_directory(&file)?;
    sort_directory(&mut directory, &config.sort_by);
    directory.apply_label_override(config.label_override.as_deref());

    let renderer = Renderer::from_config(&config);
    let path = renderer.render(&directory, &config)?;

    tracing::info!(path = %path.display(), entries = directory.len(), "Phonebook written");
    Ok(())
}
