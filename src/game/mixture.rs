use super::Support;
use crate::Probability;
use ndarray::Array1;

/// A probability vector over all `n` strategies of a game.
///
/// Mixtures built by the search carry zero weight outside their support
/// and strictly positive weight inside it. Mixtures built from a raw
/// vector are taken as given; nothing here re-normalizes or clamps.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(into = "Vec<Probability>")]
pub struct Mixture(Array1<Probability>);

impl Mixture {
    pub fn weights(&self) -> &Array1<Probability> {
        &self.0
    }
    /// probability of strategy `i`, zero when out of range
    pub fn density(&self, i: usize) -> Probability {
        self.0.get(i).copied().unwrap_or(0.)
    }
    /// number of strategies in the game
    pub fn n(&self) -> usize {
        self.0.len()
    }
    pub fn sum(&self) -> Probability {
        self.0.sum()
    }
    /// indices carrying strictly positive weight
    pub fn support(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, p)| **p > 0.)
            .map(|(i, _)| i)
    }
}

/// embed weights solved on a support into the full strategy space.
/// `x[k]` lands on the k-th smallest index of the support.
impl From<(&Support, &Array1<Probability>)> for Mixture {
    fn from((support, x): (&Support, &Array1<Probability>)) -> Self {
        debug_assert_eq!(support.len(), x.len());
        let mut full = Array1::zeros(support.n());
        support
            .iter()
            .zip(x.iter())
            .for_each(|(i, &p)| full[i] = p);
        Self(full)
    }
}

impl From<Vec<Probability>> for Mixture {
    fn from(weights: Vec<Probability>) -> Self {
        Self(Array1::from(weights))
    }
}

impl From<Mixture> for Vec<Probability> {
    fn from(mixture: Mixture) -> Self {
        mixture.0.to_vec()
    }
}

impl std::fmt::Display for Mixture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|p| format!("{:.4}", p))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
