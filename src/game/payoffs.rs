use super::Mixture;
use super::Support;
use crate::Arbitrary;
use crate::Utility;
use anyhow::Context;
use ndarray::Array1;
use ndarray::Array2;
use ndarray::Axis;

/// Square payoff matrix of a symmetric two-player game.
///
/// Entry `(i, j)` is the payoff to a player choosing strategy `i`
/// against an opponent choosing strategy `j`. Both players draw from
/// the same strategy set, so one matrix describes the whole game.
///
/// Construction goes through `TryFrom`, which rejects empty, non-square,
/// and non-finite input. Everything downstream may assume a square
/// matrix of finite entries with at least one strategy.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Vec<Utility>>", into = "Vec<Vec<Utility>>")]
pub struct Payoffs(Array2<Utility>);

impl Payoffs {
    /// number of strategies
    pub fn n(&self) -> usize {
        self.0.nrows()
    }
    pub fn inner(&self) -> &Array2<Utility> {
        &self.0
    }
    /// expected payoff of every pure strategy against the mixture, `A · p`
    pub fn payoff(&self, mixture: &Mixture) -> Array1<Utility> {
        self.0.dot(mixture.weights())
    }
    /// the principal sub-matrix `A[S, S]`
    pub fn minor(&self, support: &Support) -> Array2<Utility> {
        self.0
            .select(Axis(0), support.indices())
            .select(Axis(1), support.indices())
    }
    /// uniform payoffs in [0, ARBITRARY_PAYOFF) drawn from the given rng
    pub fn sample<R: rand::Rng>(n: usize, rng: &mut R) -> Self {
        Self(Array2::from_shape_fn((n, n), |_| {
            rng.random_range(0.0..crate::ARBITRARY_PAYOFF)
        }))
    }
}

impl Arbitrary for Payoffs {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(1..=crate::ARBITRARY_STRATEGIES);
        Self::sample(n, rng)
    }
}

impl TryFrom<Vec<Vec<Utility>>> for Payoffs {
    type Error = anyhow::Error;
    fn try_from(rows: Vec<Vec<Utility>>) -> Result<Self, Self::Error> {
        let n = rows.len();
        anyhow::ensure!(n > 0, "payoff matrix has no strategies");
        for (i, row) in rows.iter().enumerate() {
            anyhow::ensure!(
                row.len() == n,
                "payoff matrix is not square: row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            );
            if let Some(j) = row.iter().position(|x| !x.is_finite()) {
                anyhow::bail!("payoff ({}, {}) is not finite: {}", i, j, row[j]);
            }
        }
        let flat = rows.into_iter().flatten().collect::<Vec<_>>();
        Ok(Self(Array2::from_shape_vec((n, n), flat)?))
    }
}

/// whitespace-separated rows, one per line.
/// blank lines and anything after a `#` are ignored.
impl TryFrom<&str> for Payoffs {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.lines()
            .enumerate()
            .map(|(i, line)| (i, line.split('#').next().unwrap_or_default()))
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                line.split_whitespace()
                    .map(|x| {
                        x.parse::<Utility>()
                            .with_context(|| format!("line {}: invalid payoff {:?}", i + 1, x))
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .and_then(|rows| Self::try_from(rows))
    }
}

impl From<Payoffs> for Vec<Vec<Utility>> {
    fn from(payoffs: Payoffs) -> Self {
        payoffs.0.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl std::fmt::Display for Payoffs {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.0.rows() {
            for x in row {
                write!(f, "{:>10.4}", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
