//! Asymptotic confidence intervals based on the normal approximation

use crate::{ConfidenceInterval, ConfidenceLevel};
use proportion_core::{Error, Proportion, Result};
use tracing::debug;

/// One group's observed proportion together with its sample size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionSample {
    pub proportion: Proportion,
    pub sample_size: f64,
}

impl ProportionSample {
    /// Create a sample, rejecting non-positive or non-finite sizes
    pub fn new(proportion: Proportion, sample_size: f64) -> Result<Self> {
        if !(sample_size.is_finite() && sample_size > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Sample size {sample_size} must be a positive number"
            )));
        }
        Ok(Self {
            proportion,
            sample_size,
        })
    }

    /// Sampling variance of the proportion, `p(1 - p) / n`
    pub fn sampling_variance(&self) -> f64 {
        self.proportion.variance() / self.sample_size
    }
}

/// Normal-approximation interval estimator for a difference between two
/// proportions
///
/// The margin is `z * sqrt(p1(1-p1)/n1 + p2(1-p2)/n2)`. Callers decide on
/// which scale the margin is applied; Cohen's h applies it to the
/// arcsine-transformed difference before doubling.
#[derive(Debug, Clone, Copy)]
pub struct AsymptoticCI {
    confidence_level: ConfidenceLevel,
}

impl AsymptoticCI {
    /// Create a new estimator at the given level
    pub fn normal(confidence_level: ConfidenceLevel) -> Self {
        Self { confidence_level }
    }

    /// Confidence level of intervals produced by this estimator
    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    /// Scaled standard error of the difference between two proportions
    pub fn margin(&self, first: &ProportionSample, second: &ProportionSample) -> Result<f64> {
        let z = self.confidence_level.critical_value()?;
        let std_error = (first.sampling_variance() + second.sampling_variance()).sqrt();
        debug!(z, std_error, "two-proportion margin");
        Ok(z * std_error)
    }

    /// Interval `scale * (difference ∓ margin)` around `scale * difference`
    pub fn interval(
        &self,
        difference: f64,
        scale: f64,
        first: &ProportionSample,
        second: &ProportionSample,
    ) -> Result<ConfidenceInterval> {
        let margin = self.margin(first, second)?;
        Ok(ConfidenceInterval::new(
            scale * (difference - margin),
            scale * (difference + margin),
            scale * difference,
            self.confidence_level,
        ))
    }
}

impl Default for AsymptoticCI {
    fn default() -> Self {
        Self::normal(ConfidenceLevel::NINETY_FIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample(p: f64, n: f64) -> ProportionSample {
        ProportionSample::new(Proportion::new(p).unwrap(), n).unwrap()
    }

    #[test]
    fn test_margin_matches_formula() {
        let ci = AsymptoticCI::default();
        let a = sample(0.3, 100.0);
        let b = sample(0.7, 100.0);
        let expected = 1.960 * (0.21_f64 / 100.0 + 0.21 / 100.0).sqrt();
        assert_abs_diff_eq!(ci.margin(&a, &b).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_interval_is_symmetric_around_estimate() {
        let ci = AsymptoticCI::default();
        let a = sample(0.3, 50.0);
        let b = sample(0.6, 80.0);
        let interval = ci.interval(-0.3, 2.0, &a, &b).unwrap();
        assert_abs_diff_eq!(interval.estimate, -0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(
            interval.estimate - interval.lower,
            interval.upper - interval.estimate,
            epsilon = 1e-12
        );
        assert!(interval.contains(interval.estimate));
    }

    #[test]
    fn test_degenerate_proportions_have_zero_margin() {
        let ci = AsymptoticCI::default();
        let a = sample(0.0, 10.0);
        let b = sample(1.0, 10.0);
        assert_eq!(ci.margin(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_sample_size() {
        let p = Proportion::new(0.5).unwrap();
        assert!(ProportionSample::new(p, 0.0).is_err());
        assert!(ProportionSample::new(p, -3.0).is_err());
        assert!(ProportionSample::new(p, f64::NAN).is_err());
    }
}
