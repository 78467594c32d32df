mod cli;
mod dataset;
mod error;
mod output;
mod random;
mod ratio;
mod runner;
mod splitter;

use crate::cli::Cli;
use crate::error::SplitError;
use crate::runner::run_command;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    // Usage errors exit with 1 like every other failure; --help and --version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            err.print().ok();
            std::process::exit(1);
        }
    };

    if let Err(err) = real_main(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn real_main(cli: &Cli) -> Result<(), SplitError> {
    output::validate_format(&cli.output)?;
    let result = run_command(cli)?;
    output::print_result(&cli.output, &result)
}
