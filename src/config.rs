//! Planner configuration.

use crate::math::TOLERANCE;
use crate::operations::offset::CornerPolicy;

/// Configuration shared by every phase of a planning query.
///
/// # Example
///
/// ```
/// use vispath::config::PlannerConfig;
/// use vispath::operations::offset::CornerPolicy;
///
/// let config = PlannerConfig::default()
///     .with_tolerance(1e-8)
///     .with_corner_policy(CornerPolicy::TranslatedEndpoint);
/// assert_eq!(config.tolerance, 1e-8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannerConfig {
    /// Absolute epsilon for orientation, containment and parallel tests.
    /// Default: 1e-10
    pub tolerance: f64,

    /// How inflated corners are reconnected.
    /// Default: [`CornerPolicy::Miter`]
    pub corner_policy: CornerPolicy,

    /// Validate obstacles and query parameters before planning.
    /// Default: true
    pub validate: bool,

    /// Also block segments joining two vertices of the same obstacle whose
    /// midpoint lies inside that obstacle.
    /// Default: false
    pub block_interior_diagonals: bool,

    /// Compute visibility rows on the rayon pool. Ignored unless the
    /// `parallel` feature is enabled.
    /// Default: false
    pub parallel: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            corner_policy: CornerPolicy::Miter,
            validate: true,
            block_interior_diagonals: false,
            parallel: false,
        }
    }
}

impl PlannerConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the geometric tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder-style setter for the inflation corner policy.
    #[must_use]
    pub fn with_corner_policy(mut self, policy: CornerPolicy) -> Self {
        self.corner_policy = policy;
        self
    }

    /// Builder-style setter for input validation.
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Builder-style setter for the interior-diagonal check.
    #[must_use]
    pub fn with_interior_diagonal_check(mut self, enabled: bool) -> Self {
        self.block_interior_diagonals = enabled;
        self
    }

    /// Builder-style setter for parallel graph construction.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
