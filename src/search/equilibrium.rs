use crate::Mixture;
use crate::Payoffs;
use crate::Support;
use crate::Utility;

/// A confirmed symmetric equilibrium: the support it was found on,
/// the mixture itself, and the payoff every supported strategy earns.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Equilibrium {
    support: Support,
    mixture: Mixture,
    value: Utility,
}

impl Equilibrium {
    pub fn support(&self) -> &Support {
        &self.support
    }
    pub fn mixture(&self) -> &Mixture {
        &self.mixture
    }
    /// expected payoff of the equilibrium against itself
    pub fn value(&self) -> Utility {
        self.value
    }
    pub fn is_pure(&self) -> bool {
        self.support.len() == 1
    }
}

impl From<Equilibrium> for Mixture {
    fn from(equilibrium: Equilibrium) -> Self {
        equilibrium.mixture
    }
}

/// `p' A p`, computed once the mixture has been validated.
impl From<(&Payoffs, Support, Mixture)> for Equilibrium {
    fn from((payoffs, support, mixture): (&Payoffs, Support, Mixture)) -> Self {
        let value = payoffs.payoff(&mixture).dot(mixture.weights());
        Self {
            support,
            mixture,
            value,
        }
    }
}

impl std::fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "support {} mixture {} value {:.4}",
            self.support, self.mixture, self.value
        )
    }
}
