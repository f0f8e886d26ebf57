//! Core traits for effect size estimation

use crate::types::EffectSize;
use proportion_confidence::{AsymptoticCI, ConfidenceInterval, ProportionSample};
use proportion_core::{Proportion, Result};

/// Effect size estimators comparing two proportions
pub trait ProportionEffectSize {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Signed effect of `first` relative to `second`
    fn compute(&self, first: Proportion, second: Proportion) -> EffectSize;

    /// Check if the estimator is antisymmetric (effect(A,B) = -effect(B,A))
    fn is_symmetric(&self) -> bool {
        true
    }
}

/// Effect size estimators that can also bound their estimate
pub trait IntervalEffectSize: ProportionEffectSize {
    /// Interval around the signed effect of `first` relative to `second`
    fn confidence_interval(
        &self,
        first: &ProportionSample,
        second: &ProportionSample,
        estimator: &AsymptoticCI,
    ) -> Result<ConfidenceInterval>;
}
