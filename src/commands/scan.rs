// ScanCommand - simulated scan followed by reporting
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0

use super::{Command, emit_reports, load_inventory, resolve_settings};
use crate::Result;
use crate::certificates::aggregate;
use crate::cli::Args;
use crate::scanner::ScanSimulator;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// ScanCommand runs a simulated scan pass over the inventory, swaps the
/// fresh sequence in whole, and emits the requested reports.
pub struct ScanCommand {
    args: Args,
}

impl ScanCommand {
    /// Create a new ScanCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ScanCommand {
    async fn execute(&self) -> Result<()> {
        let settings = resolve_settings(&self.args)?;
        let mut inventory = load_inventory(&self.args)?;

        let mut simulator = match self.args.scan.seed {
            Some(seed) => ScanSimulator::with_seed(settings.thresholds(), seed),
            None => ScanSimulator::new(settings.thresholds()),
        };

        let spinner = if self.args.output.quiet {
            None
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.set_message("Scanning certificate fleet...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            Some(spinner)
        };

        let scanned = simulator.scan(inventory.certificates()).await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        // Replace-on-complete: the old sequence stays observable until
        // the scan has produced the whole new one
        inventory.replace(scanned);
        let classification = aggregate(inventory.certificates());

        info!(
            total = classification.counts.total,
            critical = classification.counts.critical,
            "Scan simulation complete"
        );

        emit_reports(&self.args, inventory.certificates(), &classification)
    }

    fn name(&self) -> &'static str {
        "ScanCommand"
    }
}
