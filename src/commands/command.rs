// Command trait - interface for certradar's operational modes
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0

use crate::Result;
use async_trait::async_trait;

/// Interface for the operational modes of certradar
///
/// Each command validates its own preconditions, runs one mode end to
/// end, and reports failure through the crate Result.
#[async_trait]
pub trait Command: Send + Sync {
    /// Execute the command asynchronously
    async fn execute(&self) -> Result<()>;

    /// Get a human-readable name for this command (for logging/debugging)
    fn name(&self) -> &'static str;
}
