// CLI module - command line interface and argument parsing
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0

use clap::Parser;
use std::path::PathBuf;

// Sub-modules for organized CLI arguments
mod alert_args;
mod output_args;
mod scan_args;

// Re-export sub-structs
pub use alert_args::AlertArgs;
pub use output_args::OutputArgs;
pub use scan_args::ScanArgs;

/// certradar - TLS certificate expiry radar
///
/// Composes the domain-specific argument groups with clap's
/// #[command(flatten)] attribute:
/// - Alert thresholds and settings files (AlertArgs)
/// - Simulated scan options (ScanArgs)
/// - Output formats and display (OutputArgs)
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "certradar")]
#[command(about = "TLS certificate expiry radar", long_about = None)]
pub struct Args {
    /// Inventory file with certificate records (JSON); uses the
    /// built-in demo fleet when omitted
    #[arg(short = 'f', long = "inventory", value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    // ============ Alert Thresholds ============
    #[command(flatten)]
    pub alerts: AlertArgs,

    // ============ Simulated Scan ============
    #[command(flatten)]
    pub scan: ScanArgs,

    // ============ Output Formats and Display ============
    #[command(flatten)]
    pub output: OutputArgs,
}
