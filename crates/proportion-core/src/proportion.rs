//! Proportions and the arcsine-square-root transform

use num_traits::Float;
use std::fmt;

/// Variance-stabilising transform underlying Cohen's h: `arcsin(sqrt(p))`
pub fn arcsine_sqrt<F: Float>(p: F) -> F {
    p.sqrt().asin()
}

/// A proportion known to lie in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Proportion(f64);

impl Proportion {
    /// Create a proportion, returning `None` outside `[0, 1]` or for NaN
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Self(value))
    }

    /// Get the raw value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Arcsine-square-root transformed value
    pub fn transformed(&self) -> f64 {
        arcsine_sqrt(self.0)
    }

    /// Bernoulli variance `p(1 - p)`
    pub fn variance(&self) -> f64 {
        self.0 * (1.0 - self.0)
    }
}

impl TryFrom<f64> for Proportion {
    type Error = crate::Error;

    fn try_from(value: f64) -> crate::Result<Self> {
        Self::new(value).ok_or_else(|| {
            crate::Error::InvalidParameter(format!("Proportion {value} must be in [0, 1]"))
        })
    }
}

impl fmt::Display for Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
