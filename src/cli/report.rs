use super::Args;
use crate::Equilibrium;
use crate::Search;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

/// Exit status when the search completes without an equilibrium.
pub const EXIT_NOT_FOUND: u8 = 2;

pub struct CLI(Args);

impl CLI {
    pub fn new() -> Self {
        Self(Args::parse())
    }

    pub fn args(&self) -> &Args {
        &self.0
    }

    pub fn run(&self) -> anyhow::Result<ExitCode> {
        let payoffs = self.0.payoffs()?;
        log::info!("searching {} strategies", payoffs.n());
        log::debug!("payoffs\n{}", payoffs);
        let ref mut search = Search::from(&payoffs)
            .with_tolerance(self.0.tolerance())
            .with_deadline(crate::deadline());
        let found = match self.0.all {
            true => search.by_ref().collect::<Vec<_>>(),
            false => search.next().into_iter().collect::<Vec<_>>(),
        };
        log::info!("{}", search.stats());
        if search.expired() {
            log::warn!("search stopped early, results are partial");
        }
        match self.0.json {
            true => println!("{}", self.json(&found)?),
            false => println!("{}", self.text(&found)),
        }
        match found.is_empty() {
            true => Ok(ExitCode::from(EXIT_NOT_FOUND)),
            false => Ok(ExitCode::SUCCESS),
        }
    }

    fn json(&self, found: &[Equilibrium]) -> anyhow::Result<String> {
        Ok(match self.0.all {
            true => serde_json::to_string_pretty(found)?,
            false => serde_json::to_string_pretty(&found.first())?,
        })
    }

    fn text(&self, found: &[Equilibrium]) -> String {
        match found.is_empty() {
            true => format!("{}", "no equilibrium found".yellow()),
            false => found
                .iter()
                .enumerate()
                .map(|(i, eq)| Self::describe(i + 1, eq))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn describe(rank: usize, equilibrium: &Equilibrium) -> String {
        let kind = match equilibrium.is_pure() {
            true => "pure",
            false => "mixed",
        };
        format!(
            "{} {} ({})\n  support {}\n  mixture {}\n  value   {:.4}",
            "equilibrium".bold(),
            rank,
            kind,
            equilibrium.support().to_string().green(),
            equilibrium.mixture(),
            equilibrium.value()
        )
    }
}
