mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::{CliError, SOURCE_UNREACHABLE_EXIT};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    let offset = output::local_offset();

    let result = commands::run(&cli).await?;
    output::render(&result, cli.format, cli.pretty, offset)?;

    if result.source_unreachable {
        return Ok(ExitCode::from(SOURCE_UNREACHABLE_EXIT));
    }

    Ok(ExitCode::SUCCESS)
}
