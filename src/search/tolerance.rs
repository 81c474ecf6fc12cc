use crate::Probability;
use crate::Utility;

/// Approximate equality, `|a - b| <= absolute + relative * |b|`.
///
/// Asymmetric in its arguments: `b` is the reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub relative: Probability,
    pub absolute: Probability,
}

impl Tolerance {
    pub fn close(&self, a: Utility, b: Utility) -> bool {
        (a - b).abs() <= self.absolute + self.relative * b.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: crate::RELATIVE_TOLERANCE,
            absolute: crate::ABSOLUTE_TOLERANCE,
        }
    }
}
