//! Implementations for factorization algorithms.
//!
//! Only trial division is provided, which is sufficient for 64 bit targets
//! as long as speed is not a concern.

use num_integer::{Integer, Roots};
use std::collections::BTreeMap;

/// Find factors by trial division, returns a tuple of the found factors and the residual.
///
/// Each candidate is divided out completely before moving to the next one, and the
/// candidates are expected to be increasing. Candidates less than 2 are skipped. The
/// division stops once a candidate exceeds the square root of the current residual. The
/// residual will be `Ok(1)` or `Ok(p)` with a prime `p` if fully factored, or `Err(r)` if
/// the candidates are exhausted before reaching the bound.
///
/// A negative target is returned untouched as `Err(target)`.
pub fn trial_division<I: Iterator<Item = T>, T: Integer + Roots + Clone>(
    candidates: I,
    target: T,
) -> (BTreeMap<T, usize>, Result<T, T>) {
    let mut result = BTreeMap::new();
    if target < T::zero() {
        return (result, Err(target));
    }

    let mut residual = target;
    let mut bound = Roots::sqrt(&residual);

    for p in candidates {
        if p <= T::one() {
            continue;
        }
        if p > bound {
            return (result, Ok(residual));
        }

        let mut exp = 0usize;
        while residual.is_multiple_of(&p) {
            residual = residual / p.clone();
            exp += 1;
        }
        if exp > 0 {
            result.insert(p, exp);
            bound = Roots::sqrt(&residual);
        }
    }

    (result, Err(residual))
}
