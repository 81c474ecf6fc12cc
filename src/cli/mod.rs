//! Command-line front end: read or generate a payoff matrix, run the
//! search, and print what it finds.

mod args;
mod report;

pub use args::*;
pub use report::*;
