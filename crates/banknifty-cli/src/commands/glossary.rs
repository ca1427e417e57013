use super::{CommandOutput, CommandResult};

pub fn run() -> CommandResult {
    CommandResult::ok(CommandOutput::Glossary(banknifty_core::glossary()))
}
