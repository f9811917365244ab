/// Default number of sub-intervals used by the trapezoidal rule
pub const DEFAULT_STEPS: usize = 1000;

/// Represents a configuration for numerical integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct IntegrationConfig {
    /// Number of equal sub-intervals the integration range is split into.
    /// Must be positive, a zero value is rejected when integrating.
    pub steps: usize,
}

impl IntegrationConfig {
    /// Create a configuration with the given number of sub-intervals
    pub fn with_steps(steps: usize) -> Self {
        IntegrationConfig { steps }
    }
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        IntegrationConfig {
            steps: DEFAULT_STEPS,
        }
    }
}
