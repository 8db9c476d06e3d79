// Commands module - operational modes behind a common Command trait
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0

mod command;
mod report;
mod router;
mod scan;

pub use command::Command;
pub use report::ReportCommand;
pub use router::CommandRouter;
pub use scan::ScanCommand;

use crate::Result;
use crate::certificates::{Certificate, CertificateInventory, ClassificationResult};
use crate::cli::Args;
use crate::output::{self, OutputFormat};
use crate::settings::AlertSettings;

/// Resolve alert settings from the settings file and CLI overrides
///
/// CLI thresholds win over file values; the merged result is validated
/// before any classification can see it.
pub fn resolve_settings(args: &Args) -> Result<AlertSettings> {
    let mut settings = match &args.alerts.config {
        Some(path) => AlertSettings::from_file(path)?,
        None => AlertSettings::default(),
    };

    if let Some(warning_days) = args.alerts.warning_days {
        settings.warning_days = warning_days;
    }
    if let Some(critical_days) = args.alerts.critical_days {
        settings.critical_days = critical_days;
    }
    settings.validate()?;

    Ok(settings)
}

/// Load the certificate inventory from file, or fall back to the
/// built-in demo fleet
pub fn load_inventory(args: &Args) -> Result<CertificateInventory> {
    match &args.inventory {
        Some(path) => CertificateInventory::load_from_json(path),
        None => Ok(CertificateInventory::demo()),
    }
}

/// Emit the requested reports for a classified fleet
pub fn emit_reports(
    args: &Args,
    certificates: &[Certificate],
    classification: &ClassificationResult,
) -> Result<()> {
    if !args.output.quiet {
        output::terminal::print_report(certificates, classification);
    }

    for (format, path) in args.output.file_outputs() {
        match format {
            OutputFormat::CSV => output::csv::write_csv_file(certificates, &path)?,
            OutputFormat::JSON => {
                output::json::write_json_file(certificates, classification, &path, false)?
            }
            OutputFormat::JSONPretty => {
                output::json::write_json_file(certificates, classification, &path, true)?
            }
            OutputFormat::Terminal => {}
        }
        tracing::info!("Report written to {}", path.display());
    }

    Ok(())
}
