use crate::Payoffs;
use crate::Probability;
use crate::Tolerance;
use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find a symmetric Nash equilibrium of a square payoff matrix by support enumeration",
    long_about = None
)]
pub struct Args {
    #[arg(help = "Payoff matrix file, one whitespace-separated row per line (stdin if absent or -)")]
    pub file: Option<PathBuf>,
    #[arg(long, help = "Read the matrix as a JSON array of rows and print results as JSON")]
    pub json: bool,
    #[arg(
        long,
        value_name = "N",
        conflicts_with = "file",
        value_parser = clap::value_parser!(u64).range(1..=30),
        help = "Search a random N x N game instead of reading one"
    )]
    pub random: Option<u64>,
    #[arg(long, requires = "random", help = "Seed for --random")]
    pub seed: Option<u64>,
    #[arg(long, help = "Print every equilibrium found, not just the first")]
    pub all: bool,
    #[arg(long, default_value_t = crate::RELATIVE_TOLERANCE, help = "Relative tolerance")]
    pub rtol: Probability,
    #[arg(long, default_value_t = crate::ABSOLUTE_TOLERANCE, help = "Absolute tolerance")]
    pub atol: Probability,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more (-v debug, -vv trace)")]
    pub verbose: u8,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn tolerance(&self) -> Tolerance {
        Tolerance {
            relative: self.rtol,
            absolute: self.atol,
        }
    }

    /// the game to search, from --random, a file, or stdin
    pub fn payoffs(&self) -> anyhow::Result<Payoffs> {
        match self.random {
            Some(n) => Ok(self.sample(n as usize)),
            None => self.parse(&self.read()?),
        }
    }

    fn sample(&self, n: usize) -> Payoffs {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("sampling {}x{} game with seed {}", n, n, seed);
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
        Payoffs::sample(n, rng)
    }

    fn read(&self) -> anyhow::Result<String> {
        match self.file.as_deref() {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
            _ => std::io::read_to_string(std::io::stdin()).context("reading stdin"),
        }
    }

    fn parse(&self, text: &str) -> anyhow::Result<Payoffs> {
        match self.json {
            true => serde_json::from_str(text).context("parsing JSON payoff matrix"),
            false => Payoffs::try_from(text).context("parsing payoff matrix"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("nashsearch").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let args = args(&[]);
        assert!(args.file.is_none());
        assert!(!args.all);
        assert_eq!(args.tolerance(), Tolerance::default());
        assert_eq!(args.level(), log::LevelFilter::Info);
    }

    #[test]
    fn verbosity() {
        assert_eq!(args(&["-v"]).level(), log::LevelFilter::Debug);
        assert_eq!(args(&["-vvv"]).level(), log::LevelFilter::Trace);
    }

    #[test]
    fn tolerances() {
        let args = args(&["--rtol", "0.01", "--atol", "0"]);
        assert_eq!(args.tolerance().relative, 0.01);
        assert_eq!(args.tolerance().absolute, 0.);
    }

    #[test]
    fn seeded_games_repeat() {
        let a = args(&["--random", "4", "--seed", "7"]).payoffs().unwrap();
        let b = args(&["--random", "4", "--seed", "7"]).payoffs().unwrap();
        assert_eq!(a.n(), 4);
        assert_eq!(a, b);
    }

    #[test]
    fn conflicting_sources() {
        let argv = ["nashsearch", "game.txt", "--random", "3"];
        assert!(Args::try_parse_from(argv).is_err());
        assert!(Args::try_parse_from(["nashsearch", "--seed", "3"]).is_err());
        assert!(Args::try_parse_from(["nashsearch", "--random", "0"]).is_err());
    }

    #[test]
    fn parses_either_format() {
        let text = args(&[]).parse("1 0\n0 1\n").unwrap();
        let json = args(&["--json"]).parse("[[1, 0], [0, 1]]").unwrap();
        assert_eq!(text, json);
        assert!(args(&["--json"]).parse("1 0\n0 1\n").is_err());
    }

    #[test]
    fn missing_file() {
        let args = args(&["/nonexistent/payoffs.txt"]);
        assert!(args.payoffs().is_err());
    }
}
