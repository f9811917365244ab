//! Elementary numeric routines: primality test and prime factorization by trial division
//! on 64 bit integers, and numerical integration with the trapezoidal rule.

mod error;
mod factor;
mod integrate;
mod nt_funcs;
mod traits;

pub use error::Error;
pub use integrate::{integrate, try_integrate};
pub use nt_funcs::{factorize, is_prime};
pub use traits::{IntegrationConfig, DEFAULT_STEPS};

pub mod detail {
    pub use super::factor::trial_division;
}

/// Version of the numeric engine
pub const VERSION: &str = "0.0.1";
