//! Symmetric Nash equilibria by exhaustive support enumeration.
//!
//! A symmetric two-player game is given by a square payoff matrix `A`, where
//! `A[i][j]` is the payoff for playing `i` against an opponent playing `j`.
//! The search walks every support (non-empty subset of strategies) in order of
//! increasing size, solves the equalizing system on that support, and checks the
//! resulting mixture against every strategy in the game.
//!
//! ```
//! use nashsearch::*;
//! let game = Payoffs::try_from(vec![vec![1., 0.], vec![0., 1.]]).unwrap();
//! let mixture = brute_force_nash_equilibrium(&game).unwrap();
//! assert_eq!(mixture.weights().to_vec(), vec![1., 0.]);
//! ```
#![allow(dead_code)]

pub mod game;
pub mod search;

#[cfg(feature = "cli")]
pub mod cli;

pub use game::*;
pub use search::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs, expected values, and equilibrium values.
pub type Utility = f64;
/// Mixture weights and comparison tolerances.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// NUMERICAL TOLERANCES
// Approximate comparisons follow |a - b| <= atol + rtol * |b|.
// ============================================================================
/// Relative tolerance (rtol) for approximate equality.
pub const RELATIVE_TOLERANCE: Probability = 1e-5;
/// Absolute tolerance (atol) for approximate equality.
pub const ABSOLUTE_TOLERANCE: Probability = 1e-8;
/// Pivots smaller than this multiple of the matrix scale mark a system as singular.
pub const SINGULAR_EPSILON: Utility = Utility::EPSILON;

// ============================================================================
// RANDOM GAMES
// ============================================================================
/// Largest strategy count drawn by `Payoffs::random()`.
pub const ARBITRARY_STRATEGIES: usize = 6;
/// Upper bound (exclusive) of uniformly drawn payoff entries.
pub const ARBITRARY_PAYOFF: Utility = 1.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// When `NASHSEARCH_LOG_DIR` is set, a DEBUG-level file log is written there as well.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(term);
    if let Ok(dir) = std::env::var("NASHSEARCH_LOG_DIR") {
        std::fs::create_dir_all(&dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let file = std::fs::File::create(std::path::Path::new(&dir).join(format!("{}.log", time)))?;
        loggers.push(simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

/// Optional search deadline from the SEARCH_DURATION env var (e.g. "30s", "5m").
#[cfg(feature = "cli")]
pub fn deadline() -> Option<std::time::Instant> {
    let duration = std::env::var("SEARCH_DURATION").ok()?;
    match parse_duration(&duration) {
        Some(limit) => match std::time::Instant::now().checked_add(limit) {
            Some(deadline) => {
                log::info!("search will stop after {}", duration);
                Some(deadline)
            }
            None => {
                log::warn!("SEARCH_DURATION {:?} is too long, searching without a deadline", duration);
                None
            }
        },
        None => {
            log::warn!("ignoring unparseable SEARCH_DURATION {:?}", duration);
            None
        }
    }
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
#[cfg(feature = "cli")]
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (split, unit) = s.char_indices().last()?;
    let value: u64 = s[..split].parse().ok()?;
    let scale = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}
