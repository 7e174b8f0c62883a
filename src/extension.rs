use num::Float;
use tracing::debug;

use crate::error::{FuzzyError, Result};

/// Index of the grid point closest to `y`. Ties go to the lowest index and a
/// NaN `y` has no nearest point.
fn nearest<F: Float>(grid: &[F], y: F) -> Option<usize> {
    grid.iter()
        .enumerate()
        .map(|(i, &g)| (i, F::abs(g - y)))
        .filter(|(_, dist)| !dist.is_nan())
        .fold(None, |best, (i, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((i, dist)),
        })
        .map(|(i, _)| i)
}

/// Maps a fuzzy set on `input` through `func` onto the `output` grid.
///
/// Each input sample `x` lands on the grid point nearest to `func(x)`, and
/// that grid point keeps the largest `membership(x)` it receives. Points
/// nobody lands on stay at 0. This discretizes the continuous extension
/// principle `μB(y) = sup { μA(x) | f(x) = y }`, so its resolution is bounded
/// by both sample spacings.
pub fn extension_principle<F: Float>(
    input: &[F],
    output: &[F],
    func: impl Fn(F) -> F,
    membership: impl Fn(F) -> F,
) -> Result<Vec<F>> {
    if output.is_empty() {
        return Err(FuzzyError::EmptyDomain);
    }

    let mut mapped = vec![F::zero(); output.len()];
    let mut hits = 0;

    for &x in input {
        let Some(k) = nearest(output, func(x)) else {
            continue;
        };

        mapped[k] = F::max(mapped[k], membership(x));
        hits += 1;
    }

    debug!(inputs = input.len(), outputs = output.len(), hits, "applied extension principle");

    Ok(mapped)
}
