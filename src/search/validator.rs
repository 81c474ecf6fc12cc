use super::Tolerance;
use crate::Mixture;
use crate::Payoffs;
use crate::Support;
use crate::Utility;

/// Whether `mixture` is a symmetric Nash equilibrium with the given support,
/// under the default tolerance.
///
/// See [`validate`].
pub fn is_valid_mixed_strategy(payoffs: &Payoffs, support: &Support, mixture: &Mixture) -> bool {
    validate(payoffs, support, mixture, &Tolerance::default())
}

/// Check the equilibrium conditions of `mixture` against every strategy.
///
/// With `best` the largest entry of `A · p` over all strategies:
/// - each strategy in the support must earn approximately `best`,
/// - each strategy outside the support must not strictly exceed `best`.
///
/// The two sides are deliberately asymmetric: the in-support comparison is
/// tolerant, the out-of-support comparison is exact. Positivity of the
/// mixture on its support is not checked here.
pub fn validate(payoffs: &Payoffs, support: &Support, mixture: &Mixture, tolerance: &Tolerance) -> bool {
    let payoff = payoffs.payoff(mixture);
    let best = payoff.iter().copied().fold(Utility::NEG_INFINITY, Utility::max);
    payoff
        .iter()
        .enumerate()
        .all(|(i, &value)| match support.contains(i) {
            true => tolerance.close(value, best),
            false => value <= best,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payoffs(rows: Vec<Vec<Utility>>) -> Payoffs {
        Payoffs::try_from(rows).unwrap()
    }

    #[test]
    fn pure_coordination() {
        let game = payoffs(vec![vec![1., 0.], vec![0., 1.]]);
        let support = Support::new(2, [0]).unwrap();
        assert!(is_valid_mixed_strategy(&game, &support, &Mixture::from(vec![1., 0.])));
    }

    #[test]
    fn mixed_coordination() {
        let game = payoffs(vec![vec![1., 0.], vec![0., 1.]]);
        let support = Support::new(2, [0, 1]).unwrap();
        assert!(is_valid_mixed_strategy(&game, &support, &Mixture::from(vec![0.5, 0.5])));
    }

    #[test]
    fn unequal_support_payoffs() {
        let game = payoffs(vec![vec![1., 0.], vec![0., 1.]]);
        let support = Support::new(2, [0, 1]).unwrap();
        assert!(!is_valid_mixed_strategy(&game, &support, &Mixture::from(vec![0.7, 0.3])));
    }

    #[test]
    fn profitable_deviation() {
        // prisoner's dilemma: cooperating is beaten by defecting
        let game = payoffs(vec![vec![3., 0.], vec![5., 1.]]);
        let cooperate = Support::new(2, [0]).unwrap();
        let defect = Support::new(2, [1]).unwrap();
        assert!(!is_valid_mixed_strategy(&game, &cooperate, &Mixture::from(vec![1., 0.])));
        assert!(is_valid_mixed_strategy(&game, &defect, &Mixture::from(vec![0., 1.])));
    }

    #[test]
    fn rock_paper_scissors() {
        let game = payoffs(vec![
            vec![0., -1., 1.], //
            vec![1., 0., -1.],
            vec![-1., 1., 0.],
        ]);
        let full = Support::new(3, [0, 1, 2]).unwrap();
        let third = 1. / 3.;
        assert!(is_valid_mixed_strategy(&game, &full, &Mixture::from(vec![third; 3])));
        let rock = Support::new(3, [0]).unwrap();
        assert!(!is_valid_mixed_strategy(&game, &rock, &Mixture::from(vec![1., 0., 0.])));
    }

    #[test]
    fn tolerant_inside_support() {
        let game = payoffs(vec![vec![1., 0.], vec![0., 1.]]);
        let support = Support::new(2, [0, 1]).unwrap();
        let mixture = Mixture::from(vec![0.5 + 1e-10, 0.5 - 1e-10]);
        assert!(is_valid_mixed_strategy(&game, &support, &mixture));
    }

    #[test]
    fn outside_ties_allowed() {
        // strategy 1 earns exactly the equilibrium payoff without being played
        let game = payoffs(vec![vec![1., 0.], vec![1., 0.]]);
        let support = Support::new(2, [0]).unwrap();
        assert!(is_valid_mixed_strategy(&game, &support, &Mixture::from(vec![1., 0.])));
    }

    #[test]
    fn tighter_tolerance() {
        let game = payoffs(vec![vec![1., 0.], vec![0., 1.]]);
        let support = Support::new(2, [0, 1]).unwrap();
        let mixture = Mixture::from(vec![0.5 + 1e-4, 0.5 - 1e-4]);
        let strict = Tolerance::default();
        let loose = Tolerance {
            relative: 1e-3,
            absolute: 1e-3,
        };
        assert!(!validate(&game, &support, &mixture, &strict));
        assert!(validate(&game, &support, &mixture, &loose));
    }
}
