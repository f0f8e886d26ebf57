//! Confidence intervals for differences between proportions
//!
//! Provides [`ConfidenceLevel`] and [`ConfidenceInterval`] together with the
//! normal-approximation [`AsymptoticCI`] estimator used for Cohen's h.
//!
//! ```rust
//! use proportion_confidence::{AsymptoticCI, ConfidenceLevel, ProportionSample};
//! use proportion_core::Proportion;
//!
//! let a = ProportionSample::new(Proportion::new(0.4).unwrap(), 120.0).unwrap();
//! let b = ProportionSample::new(Proportion::new(0.2).unwrap(), 90.0).unwrap();
//! let ci = AsymptoticCI::normal(ConfidenceLevel::NINETY_FIVE);
//! let interval = ci.interval(0.2, 1.0, &a, &b).unwrap();
//! assert!(interval.contains(0.2));
//! ```

mod asymptotic;
mod types;

pub use asymptotic::{AsymptoticCI, ProportionSample};
pub use types::{ConfidenceInterval, ConfidenceLevel};
