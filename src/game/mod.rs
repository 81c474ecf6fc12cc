//! Domain values of a symmetric two-player game: the payoff matrix,
//! subsets of strategies, and probability mixtures over strategies.

mod mixture;
mod payoffs;
mod support;

pub use mixture::*;
pub use payoffs::*;
pub use support::*;
