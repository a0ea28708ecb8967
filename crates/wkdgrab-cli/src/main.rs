use wkdgrab_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // File logging first; fall back to stderr if the state dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI, dispatch, and perform the single process exit.
    match CliCommand::run_from_args() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("wkdgrab error: {:#}", err);
            std::process::exit(2);
        }
    }
}
