//! Standalone number theoretic functions on 64 bit signed integers

use crate::error::Error;
use crate::factor::trial_division;
use log::{debug, trace};
use num_integer::Roots;
use std::collections::BTreeMap;

/// This function tests whether a 64 bit integer is a prime number by trial division.
///
/// Numbers less than 2 (including all negative numbers) are not prime. Only divisors of
/// the form `6k ± 1` are tried after excluding multiples of 2 and 3, so about a third of
/// the candidates of a naive trial division are tested.
pub fn is_prime(target: i64) -> bool {
    // shortcuts
    if target <= 1 {
        return false;
    }
    if target <= 3 {
        return true;
    }
    if target % 2 == 0 || target % 3 == 0 {
        return false;
    }

    // isqrt never overflows, unlike squaring the candidate near i64::MAX
    let bound = Roots::sqrt(&target);
    let mut i = 5i64;
    while i <= bound {
        if target % i == 0 || target % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Factorize a positive 64 bit integer into a mapping from prime factors to their multiplicities.
///
/// The factors are found by trial division with 2 and odd numbers, and the result iterates
/// in ascending order of the factors. Factorizing 1 gives an empty mapping, while zero and
/// negative numbers are rejected with [Error::InvalidArgument].
pub fn factorize(target: i64) -> Result<BTreeMap<i64, usize>, Error> {
    if target <= 0 {
        debug!("refuse to factorize non-positive integer {}", target);
        return Err(Error::invalid_argument(
            "n",
            format!("expected a positive integer, got {}", target),
        ));
    }

    let candidates = std::iter::once(2).chain((3..).step_by(2));
    let (mut result, residual) = trial_division(candidates, target);

    // the candidate sequence is unbounded, so the division always reaches the square root
    let residual = match residual {
        Ok(r) | Err(r) => r,
    };
    if residual > 1 {
        *result.entry(residual).or_insert(0) += 1;
    }

    trace!("factorized {} into {:?}", target, result);
    Ok(result)
}
