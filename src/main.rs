mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Command};
use crate::error::{ErrorKind, Result};
use bkconv_config::Config;
use clap::Parser;
use exn::ResultExt;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    logging::init(&config.log_level, cli.verbose)?;
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        Command::MihonToKotatsu(args) => commands::convert::mihon_to_kotatsu(&config, &args),
        Command::KotatsuToMihon(args) => commands::convert::kotatsu_to_mihon(&config, &args),
        Command::Inspect(args) => commands::inspect::run(&args),
        Command::Sources(args) => commands::sources::list(&config, &args),
        Command::SourceId(args) => commands::sources::source_id(&config, &args),
    }
}
