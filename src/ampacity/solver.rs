use tracing::{debug, warn};

use crate::error::{AmpacityError, Result};

/// Interval-halving search over `[lower, upper]`.
///
/// `past_root(x)` reports whether `x` lies above the root, in which case the
/// upper bound moves to `x`; otherwise the lower bound does. Stops once the
/// interval is no wider than `tolerance` and returns the last midpoint.
pub(crate) fn bisect<F>(
    solver: &'static str,
    mut lower: f64,
    mut upper: f64,
    tolerance: f64,
    max_iterations: usize,
    mut past_root: F,
) -> Result<f64>
where
    F: FnMut(f64) -> Result<bool>,
{
    let mut mid = 0.5 * (lower + upper);
    let mut iterations = 0usize;

    while upper - lower > tolerance {
        mid = 0.5 * (lower + upper);
        if past_root(mid)? {
            upper = mid;
        } else {
            lower = mid;
        }

        iterations += 1;
        if iterations > max_iterations {
            warn!(solver, iterations, lower, upper, "bisection did not converge");
            return Err(AmpacityError::IterationLimitExceeded {
                solver,
                max_iterations,
            });
        }
    }

    debug!(solver, iterations, result = mid, "bisection converged");
    Ok(mid)
}
