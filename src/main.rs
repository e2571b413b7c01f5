//! ament-index
//!
//! Command-line front end for the ament resource index.

use ament_index::cli::{self, Cli};
use ament_index::format::format_error;
use ament_index::logging::{self, LogTarget};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format.unwrap_or_default();

    // Initialize logging based on --log option
    if let Err(err) = logging::init(&LogTarget::parse(&cli.log), cli.verbose) {
        eprint!("{}", format_error(&err, format));
        return ExitCode::FAILURE;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = cli::run(&cli, &mut out).and_then(|()| Ok(out.flush()?));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", format_error(&err, format));
            ExitCode::FAILURE
        }
    }
}
