//! Price estimates shared by the analytical and Monte Carlo engines.

/// Two-sided confidence interval around an estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Coverage level in (0, 1), e.g. 0.95.
    pub level: f64,
}

impl ConfidenceInterval {
    /// Symmetric interval `estimate ± z·std_error`.
    #[inline]
    pub fn symmetric(estimate: f64, std_error: f64, z: f64, level: f64) -> Self {
        let half_width = z * std_error;
        Self {
            lower: estimate - half_width,
            upper: estimate + half_width,
            level,
        }
    }

    /// Half of the interval width.
    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * (self.upper - self.lower)
    }

    /// Returns `true` if `value` lies inside the closed interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Price estimate with its sampling uncertainty.
///
/// Closed-form prices carry a zero standard error and a degenerate interval.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ConfidenceInterval, PricingResult};
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
///     confidence_interval: ConfidenceInterval::symmetric(10.5, 0.05, 1.96, 0.95),
///     n_paths: 10_000,
/// };
/// assert!(result.confidence_interval.contains(10.55));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingResult {
    /// Present value of the option (≥ 0).
    pub price: f64,
    /// Standard error of the price estimate (≥ 0).
    pub std_error: f64,
    /// Confidence interval around `price`.
    pub confidence_interval: ConfidenceInterval,
    /// Number of simulated paths (0 for closed-form prices).
    pub n_paths: usize,
}

impl PricingResult {
    /// Wraps an exact price.
    #[inline]
    pub fn exact(price: f64) -> Self {
        Self {
            price,
            std_error: 0.0,
            confidence_interval: ConfidenceInterval {
                lower: price,
                upper: price,
                level: 1.0,
            },
            n_paths: 0,
        }
    }
}
