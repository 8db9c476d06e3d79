// ReportCommand - classify and report the certificate fleet
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0

use super::{Command, emit_reports, load_inventory, resolve_settings};
use crate::Result;
use crate::certificates::aggregate;
use crate::cli::Args;
use async_trait::async_trait;
use tracing::info;

/// ReportCommand handles the default mode: load the inventory, classify
/// it against the resolved thresholds, and emit the requested reports.
pub struct ReportCommand {
    args: Args,
}

impl ReportCommand {
    /// Create a new ReportCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ReportCommand {
    async fn execute(&self) -> Result<()> {
        let settings = resolve_settings(&self.args)?;
        let mut inventory = load_inventory(&self.args)?;

        // Statuses in the file may predate the thresholds in force
        inventory.recompute(&settings.thresholds());
        let classification = aggregate(inventory.certificates());

        info!(
            total = classification.counts.total,
            critical = classification.counts.critical,
            "Classified certificate fleet"
        );

        emit_reports(&self.args, inventory.certificates(), &classification)
    }

    fn name(&self) -> &'static str {
        "ReportCommand"
    }
}
