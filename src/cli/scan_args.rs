// Simulated scan arguments
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0

use clap::Args;

/// Simulated scan options
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Run a simulated scan before reporting (randomly perturbs expiry
    /// day counts)
    #[arg(long = "scan")]
    pub enable: bool,

    /// Seed for the scan simulation (reproducible runs)
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,
}
