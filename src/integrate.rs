//! Numerical integration of real functions over a bounded interval

use crate::error::Error;
use crate::traits::IntegrationConfig;
use log::{debug, trace};

/// Integrate a real function over `[a, b]` with the trapezoidal rule.
///
/// The interval is split into `steps` sub-intervals of width `h = (b - a) / steps` (see
/// [IntegrationConfig], `None` means 1000 steps), and the function is sampled `steps + 1`
/// times from `a` to `b`. Reversed bounds give exactly the negated integral. Equal bounds
/// give zero even if the function returns an infinite or NaN value there, although the
/// function is still evaluated.
///
/// Zero steps is rejected with [Error::InvalidArgument].
pub fn integrate<F: FnMut(f64) -> f64>(
    mut func: F,
    a: f64,
    b: f64,
    config: Option<IntegrationConfig>,
) -> Result<f64, Error> {
    try_integrate(|x| Ok::<f64, Error>(func(x)), a, b, config)
}

/// Same as [integrate()], but the function being integrated is allowed to fail.
///
/// The first error returned by `func` aborts the summation and is passed back to the caller
/// unchanged, no partial sum is returned. Invalid configurations are converted into the
/// caller's error type through its `From<Error>` implementation.
pub fn try_integrate<F, E>(
    mut func: F,
    a: f64,
    b: f64,
    config: Option<IntegrationConfig>,
) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<Error>,
{
    let steps = config.unwrap_or_default().steps;
    if steps == 0 {
        debug!("refuse to integrate over [{}, {}] with zero steps", a, b);
        return Err(Error::invalid_argument("steps", "expected a positive number of steps").into());
    }
    trace!("integrating over [{}, {}] with {} steps", a, b, steps);

    let n = steps as f64;
    let h = (b - a) / n;
    let mut values = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let x = if i == 0 {
            a
        } else if i == steps {
            b
        } else {
            let i = i as f64;
            (a * (n - i) + b * i) / n
        };
        values.push(func(x)?);
    }
    if h == 0. {
        return Ok(0.);
    }

    // sum in ascending order of x, so that swapping the bounds only flips the sign of h
    if a > b {
        values.reverse();
    }
    let interior: f64 = values[1..steps].iter().sum();
    let sum = interior + 0.5 * (values[0] + values[steps]);
    Ok(sum * h)
}
