//! Equilibrium Search Binary
//!
//! Reads a square payoff matrix (file, stdin, or --random) and prints the first
//! symmetric Nash equilibrium found by support enumeration, or all of them with --all.
//!
//! Set SEARCH_DURATION (e.g. "30s", "5m") to bound the search in wall-clock time.

use nashsearch::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::CLI::new();
    if let Err(e) = log(cli.args().level()) {
        eprintln!("logging disabled: {:#}", e);
    }
    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
