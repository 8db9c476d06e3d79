// certradar - TLS certificate expiry radar
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0

//! certradar tracks a fleet of TLS certificates and classifies each by
//! urgency against configurable expiry thresholds. It produces terminal
//! reports plus CSV and JSON exports, with a simulated scan mode for
//! exercising the pipeline on demo data.

pub mod certificates;
pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod scanner;
pub mod settings;

// Re-export commonly used types
pub use crate::certificates::{
    AlertThresholds, Certificate, ClassificationResult, GeoLocation, Status, aggregate, classify,
    recompute_all,
};
pub use crate::cli::Args;
pub use crate::error::RadarError;
pub use crate::output::OutputFormat;
pub use crate::settings::AlertSettings;

/// Result type for certradar operations
pub type Result<T> = anyhow::Result<T>;

/// Error type for certradar operations
pub use anyhow::Error;
