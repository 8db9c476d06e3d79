// Command router - selects the operational mode from parsed arguments
// Copyright (C) 2025 certradar contributors
// Licensed under GPL-3.0

use super::{Command, ReportCommand, ScanCommand};
use crate::cli::Args;

/// Routes parsed arguments to the command implementing the requested
/// mode
pub struct CommandRouter;

impl CommandRouter {
    /// Select the command for the given arguments
    pub fn route(args: Args) -> Box<dyn Command> {
        if args.scan.enable {
            Box::new(ScanCommand::new(args))
        } else {
            Box::new(ReportCommand::new(args))
        }
    }
}
