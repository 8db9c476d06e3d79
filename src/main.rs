// certradar - TLS certificate expiry radar
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use anyhow::Result;
use certradar::Args;
use certradar::commands::{CommandRouter, resolve_settings};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    // Parse command line arguments
    let args = Args::parse();

    if args.output.no_color {
        colored::control::set_override(false);
    }

    // Handle --save-config (write resolved settings and exit)
    if let Some(path) = &args.alerts.save_config {
        let settings = resolve_settings(&args)?;
        settings.save_to_file(path)?;
        println!("✓ Alert settings saved to: {}", path.display());
        return Ok(());
    }

    let command = CommandRouter::route(args);
    info!("Executing {}", command.name());
    command.execute().await
}
