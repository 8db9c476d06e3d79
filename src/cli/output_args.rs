// Output format configuration arguments
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0

use crate::output::OutputFormat;
use clap::Args;
use std::path::PathBuf;

/// Output format and display options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output to CSV file
    #[arg(long = "csv", value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Output to JSON file
    #[arg(long = "json", value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long = "json-pretty")]
    pub json_pretty: bool,

    /// Quiet mode (no terminal report)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl OutputArgs {
    /// The file outputs requested on the command line
    pub fn file_outputs(&self) -> Vec<(OutputFormat, PathBuf)> {
        let mut outputs = Vec::new();

        if let Some(path) = &self.csv {
            outputs.push((OutputFormat::CSV, path.clone()));
        }
        if let Some(path) = &self.json {
            let format = if self.json_pretty {
                OutputFormat::JSONPretty
            } else {
                OutputFormat::JSON
            };
            outputs.push((format, path.clone()));
        }

        outputs
    }
}
