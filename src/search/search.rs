use super::Equilibrium;
use super::Singular;
use super::Tolerance;
use crate::Mixture;
use crate::Payoffs;
use crate::Probability;
use crate::Support;
use ndarray::Array1;
use std::time::Instant;

/// First symmetric equilibrium in support-enumeration order,
/// or `None` when no support yields one.
///
/// `None` is a regular outcome, not a failure: the literal sum-to-one
/// check on the raw solve rejects many supports that do carry an
/// equilibrium after normalization.
pub fn brute_force_nash_equilibrium(payoffs: &Payoffs) -> Option<Mixture> {
    Search::from(payoffs).next().map(Mixture::from)
}

/// Counters for one pass over the supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// supports whose minor was solved or found singular
    pub visited: usize,
    /// minors with no unique solution
    pub singular: usize,
    /// solutions with a non-positive entry or a sum away from one
    pub infeasible: usize,
    /// candidate mixtures that failed validation
    pub unstable: usize,
    /// equilibria yielded so far
    pub found: usize,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "visited {} singular {} infeasible {} unstable {} found {}",
            self.visited, self.singular, self.infeasible, self.unstable, self.found
        )
    }
}

/// Lazy walk over every support of a game, yielding each confirmed equilibrium.
///
/// Supports come from [`Support::enumerate`], so the order is fixed and two
/// searches over the same matrix yield the same sequence. The walk holds no
/// state beyond its position and counters; dropping it early is always safe.
pub struct Search<'a> {
    payoffs: &'a Payoffs,
    tolerance: Tolerance,
    deadline: Option<Instant>,
    supports: Box<dyn Iterator<Item = Support> + 'a>,
    stats: Stats,
    expired: bool,
}

impl<'a> Search<'a> {
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
    /// Stop walking once `deadline` passes. Checked between supports.
    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
    /// whether the walk ended because the deadline passed
    pub fn expired(&self) -> bool {
        self.expired
    }

    fn feasible(&self, x: &Array1<Probability>) -> bool {
        x.iter().all(|&p| p > 0.) && self.tolerance.close(x.sum(), 1.)
    }

    fn candidate(&mut self, support: Support) -> Option<Equilibrium> {
        self.stats.visited += 1;
        let minor = self.payoffs.minor(&support);
        let ones = Array1::ones(support.len());
        match super::solve(minor, ones) {
            Err(Singular) => {
                self.stats.singular += 1;
                log::trace!("{} singular", support);
                None
            }
            Ok(x) if !self.feasible(&x) => {
                self.stats.infeasible += 1;
                log::trace!("{} infeasible {}", support, x);
                None
            }
            Ok(x) => {
                let mixture = Mixture::from((&support, &x));
                if super::validate(self.payoffs, &support, &mixture, &self.tolerance) {
                    self.stats.found += 1;
                    log::debug!("{} equilibrium {}", support, mixture);
                    Some(Equilibrium::from((self.payoffs, support, mixture)))
                } else {
                    self.stats.unstable += 1;
                    log::trace!("{} unstable {}", support, mixture);
                    None
                }
            }
        }
    }

    fn overdue(&self) -> bool {
        self.deadline.map_or(false, |d| Instant::now() >= d)
    }
}

impl<'a> From<&'a Payoffs> for Search<'a> {
    fn from(payoffs: &'a Payoffs) -> Self {
        Self {
            payoffs,
            tolerance: Tolerance::default(),
            deadline: None,
            supports: Box::new(Support::enumerate(payoffs.n())),
            stats: Stats::default(),
            expired: false,
        }
    }
}

impl<'a> Iterator for Search<'a> {
    type Item = Equilibrium;
    fn next(&mut self) -> Option<Self::Item> {
        while !self.expired {
            if self.overdue() {
                self.expired = true;
                log::warn!("search deadline passed after {} supports", self.stats.visited);
                break;
            }
            match self.supports.next() {
                Some(support) => match self.candidate(support) {
                    Some(equilibrium) => return Some(equilibrium),
                    None => continue,
                },
                None => break,
            }
        }
        log::debug!("search finished: {}", self.stats);
        None
    }
}
