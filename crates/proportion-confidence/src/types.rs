//! Common types for confidence intervals

use proportion_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate the interval is built around
    pub estimate: f64,
    /// Confidence level of the interval
    pub confidence_level: ConfidenceLevel,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: ConfidenceLevel) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// The same interval seen from the other group's side: every value is
    /// negated and the bounds trade places
    pub fn reflected(&self) -> Self {
        Self {
            lower: -self.upper,
            upper: -self.lower,
            estimate: -self.estimate,
            confidence_level: self.confidence_level,
        }
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} CI: [{}, {}], estimate: {}",
            self.confidence_level, self.lower, self.upper, self.estimate
        )
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Two-sided critical value reported for the 95% level
    pub const Z_95: f64 = 1.960;

    /// Create a new confidence level, which must lie in (0, 1)
    pub fn new(level: f64) -> Result<Self> {
        if level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(Error::InvalidParameter(format!(
                "Confidence level {level} must be in (0, 1)"
            )))
        }
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Two-sided standard normal critical value for this level.
    ///
    /// The 95% level uses the conventional three-digit `1.960`.
    pub fn critical_value(&self) -> Result<f64> {
        if *self == Self::NINETY_FIVE {
            return Ok(Self::Z_95);
        }
        let normal = Normal::new(0.0, 1.0).map_err(|e| {
            Error::InvalidParameter(format!("Failed to create normal distribution: {e}"))
        })?;
        Ok(normal.inverse_cdf(1.0 - self.alpha() / 2.0))
    }

    /// Level as a whole-number percentage, e.g. `95`
    pub fn percent(&self) -> f64 {
        (self.0 * 1000.0).round() / 10.0
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
