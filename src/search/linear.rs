use crate::Utility;
use ndarray::Array1;
use ndarray::Array2;

/// The system has no unique solution.
///
/// Raised when elimination meets a pivot that is zero relative to the
/// scale of the matrix. Recoverable: the search skips the support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Singular;

impl std::fmt::Display for Singular {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "singular matrix")
    }
}

impl std::error::Error for Singular {}

/// Solve `a · x = b` by Gaussian elimination with partial pivoting.
///
/// Takes ownership of both operands and eliminates in place.
/// A pivot no larger than `SINGULAR_EPSILON · n · max|a|` is treated as zero,
/// so systems that are singular up to rounding are reported as `Singular`
/// instead of producing huge, meaningless solutions.
/// This is stricter than rejecting only an exactly zero pivot.
pub fn solve(mut a: Array2<Utility>, mut b: Array1<Utility>) -> Result<Array1<Utility>, Singular> {
    let n = b.len();
    debug_assert_eq!(a.dim(), (n, n));
    let scale = a.iter().fold(0., |max: Utility, x| max.max(x.abs()));
    let floor = crate::SINGULAR_EPSILON * scale * n as Utility;
    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        if a[[pivot, col]].abs() <= floor {
            return Err(Singular);
        }
        if pivot != col {
            for k in col..n {
                a.swap([col, k], [pivot, k]);
            }
            b.swap(col, pivot);
        }
        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0. {
                continue;
            }
            for k in col..n {
                let delta = factor * a[[col, k]];
                a[[row, k]] -= delta;
            }
            let delta = factor * b[col];
            b[row] -= delta;
        }
    }
    let mut x = Array1::<Utility>::zeros(n);
    for row in (0..n).rev() {
        let tail = (row + 1..n).map(|k| a[[row, k]] * x[k]).sum::<Utility>();
        x[row] = (b[row] - tail) / a[[row, row]];
    }
    Ok(x)
}
