//! Cohen's h effect size for two proportions
//!
//! Cohen's h compares proportions on the arcsine-square-root scale, where the
//! sampling variance no longer depends on the proportion itself:
//!
//! h = 2 · (arcsin √p₁ − arcsin √p₂)
//!
//! The interval applies the normal-approximation margin of the raw
//! proportions to the transformed difference and doubles both ends.

use crate::{EffectSize, IntervalEffectSize, ProportionEffectSize};
use proportion_confidence::{AsymptoticCI, ConfidenceInterval, ProportionSample};
use proportion_core::{Proportion, Result};

/// Cohen's h effect size estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenH;

impl CohenH {
    /// Conventional scaling of the transformed difference
    pub const SCALE: f64 = 2.0;

    /// Create a new Cohen's h estimator
    pub fn new() -> Self {
        Self
    }

    /// Difference of the arcsine-square-root transforms, before scaling
    pub fn transformed_difference(first: Proportion, second: Proportion) -> f64 {
        first.transformed() - second.transformed()
    }
}

impl ProportionEffectSize for CohenH {
    fn name(&self) -> &'static str {
        "Cohen's h"
    }

    fn compute(&self, first: Proportion, second: Proportion) -> EffectSize {
        EffectSize::new(Self::SCALE * Self::transformed_difference(first, second))
    }
}

impl IntervalEffectSize for CohenH {
    fn confidence_interval(
        &self,
        first: &ProportionSample,
        second: &ProportionSample,
        estimator: &AsymptoticCI,
    ) -> Result<ConfidenceInterval> {
        let difference = Self::transformed_difference(first.proportion, second.proportion);
        estimator.interval(difference, Self::SCALE, first, second)
    }
}
