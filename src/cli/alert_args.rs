// Alert threshold configuration arguments
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Alert threshold and settings file options
///
/// Thresholds given on the command line override values from the
/// settings file; the merged result is validated before use.
#[derive(Args, Debug, Clone, Default)]
pub struct AlertArgs {
    /// Days of remaining validity at or below which a certificate is a
    /// warning
    #[arg(long = "warning-days", value_name = "DAYS")]
    pub warning_days: Option<i64>,

    /// Days of remaining validity at or below which a certificate is
    /// critical
    #[arg(long = "critical-days", value_name = "DAYS")]
    pub critical_days: Option<i64>,

    /// Alert settings file (TOML)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the resolved alert settings to a TOML file and exit
    #[arg(long = "save-config", value_name = "FILE")]
    pub save_config: Option<PathBuf>,
}
