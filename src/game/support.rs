use itertools::Itertools;

/// A non-empty set of strategy indices, i.e. the strategies a mixture
/// plays with strictly positive probability.
///
/// Indices are kept sorted, which fixes the row/column order of the
/// sub-matrix a support selects. A membership mask over all `n`
/// strategies makes `contains` constant time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Support {
    indices: Vec<usize>,
    mask: Vec<bool>,
}

impl Support {
    /// Build a support over `n` strategies from any collection of indices.
    pub fn new(n: usize, indices: impl IntoIterator<Item = usize>) -> anyhow::Result<Self> {
        let indices = indices.into_iter().sorted().dedup().collect::<Vec<_>>();
        anyhow::ensure!(!indices.is_empty(), "support must contain a strategy");
        if let Some(i) = indices.iter().find(|&&i| i >= n) {
            anyhow::bail!("strategy {} out of range for a {}-strategy game", i, n);
        }
        Ok(Self::from_sorted(n, indices))
    }
    /// caller guarantees `indices` is strictly increasing, non-empty, and below `n`
    pub(crate) fn from_sorted(n: usize, indices: Vec<usize>) -> Self {
        debug_assert!(!indices.is_empty());
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(indices.iter().all(|&i| i < n));
        let mut mask = vec![false; n];
        indices.iter().for_each(|&i| mask[i] = true);
        Self { indices, mask }
    }

    /// Every support over `n` strategies: sizes 1 through `n` in increasing
    /// order, and within each size the index tuples in lexicographic order.
    /// Yields `2^n - 1` supports in total.
    pub fn enumerate(n: usize) -> impl Iterator<Item = Self> {
        (1..=n)
            .flat_map(move |k| (0..n).combinations(k))
            .map(move |indices| Self::from_sorted(n, indices))
    }

    pub fn contains(&self, i: usize) -> bool {
        self.mask.get(i).copied().unwrap_or(false)
    }
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
    /// number of strategies in the support
    pub fn len(&self) -> usize {
        self.indices.len()
    }
    /// number of strategies in the game
    pub fn n(&self) -> usize {
        self.mask.len()
    }
    pub fn is_full(&self) -> bool {
        self.len() == self.n()
    }
}

impl From<Support> for Vec<usize> {
    fn from(support: Support) -> Self {
        support.indices
    }
}

impl serde::Serialize for Support {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl std::fmt::Display for Support {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let support = Support::new(4, [2, 0]).unwrap();
        assert!(support.contains(0));
        assert!(!support.contains(1));
        assert!(support.contains(2));
        assert!(!support.contains(3));
        assert!(!support.contains(9));
        assert_eq!(support.indices(), &[0, 2]);
    }

    #[test]
    fn normalizes() {
        let support = Support::new(3, [2, 2, 1]).unwrap();
        assert_eq!(support.indices(), &[1, 2]);
        assert_eq!(support.len(), 2);
        assert_eq!(support.n(), 3);
    }

    #[test]
    fn rejects_malformed() {
        assert!(Support::new(3, []).is_err());
        assert!(Support::new(3, [0, 3]).is_err());
    }

    #[test]
    fn enumeration_order() {
        let supports = Support::enumerate(3)
            .map(Vec::<usize>::from)
            .collect::<Vec<_>>();
        assert_eq!(
            supports,
            vec![
                vec![0],
                vec![1],
                vec![2],
                vec![0, 1],
                vec![0, 2],
                vec![1, 2],
                vec![0, 1, 2],
            ]
        );
    }

    #[test]
    fn enumeration_count() {
        for n in 1..=10 {
            assert_eq!(Support::enumerate(n).count(), (1 << n) - 1);
        }
    }

    #[test]
    fn enumeration_restarts() {
        let a = Support::enumerate(5).collect::<Vec<_>>();
        let b = Support::enumerate(5).collect::<Vec<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn fullness() {
        assert!(Support::new(2, [0, 1]).unwrap().is_full());
        assert!(!Support::new(2, [1]).unwrap().is_full());
    }

    #[test]
    fn display() {
        assert_eq!(Support::new(5, [4, 1]).unwrap().to_string(), "{1, 4}");
    }
}
