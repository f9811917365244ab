//! Error type shared by the routines in this crate

/// Failures raised by the routines themselves. Errors produced by a caller supplied
/// integrand are not wrapped in this type, see [crate::try_integrate()].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument is outside of the domain accepted by the routine
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_test() {
        let err = Error::invalid_argument("steps", "must be positive");
        assert_eq!(err.to_string(), "invalid argument `steps`: must be positive");
    }
}
