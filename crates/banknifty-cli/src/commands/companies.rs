use banknifty_core::DashboardConfig;

use super::{CommandOutput, CommandResult};

pub fn run(config: &DashboardConfig) -> CommandResult {
    CommandResult::ok(CommandOutput::Companies(config.directory.clone()))
}
