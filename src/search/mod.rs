//! Brute-force support enumeration for symmetric Nash equilibria.
//!
//! For every support `S`, in order of increasing size and then lexicographic
//! order, the search:
//!
//! 1. solves `A[S, S] · x = 1` and skips `S` when the minor is singular,
//! 2. keeps `x` only if every entry is positive and the entries sum to one,
//! 3. embeds `x` into the full strategy space,
//! 4. accepts the mixture if every supported strategy attains the maximal
//!    payoff against it and no other strategy exceeds that payoff.
//!
//! The first accepted mixture is the result. `Search` exposes the same
//! walk as a lazy iterator over every accepted mixture.

mod equilibrium;
mod linear;
mod search;
mod tolerance;
mod validator;


pub use equilibrium::*;
pub use linear::*;
pub use search::*;
pub use tolerance::*;
pub use validator::*;
