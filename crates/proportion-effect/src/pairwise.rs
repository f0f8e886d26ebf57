//! Pairwise comparisons across named groups
//!
//! Every unordered pair of groups is compared once, in column order. Each
//! comparison is oriented so the reported group A is the higher one, which
//! keeps the reported effect size non-negative.

use crate::{CohenH, EffectSize, EffectStrength, IntervalEffectSize, ProportionEffectSize};
use proportion_confidence::{AsymptoticCI, ConfidenceInterval, ProportionSample};
use proportion_core::{format, Error, Proportion, Result};
use tracing::{debug, instrument};

/// One named group as seen by the calculator
#[derive(Debug, Clone, PartialEq)]
pub struct GroupObservation {
    /// Column name of the group
    pub name: String,
    /// Observed proportion
    pub proportion: Proportion,
    /// Number of observations, if known
    pub sample_size: Option<f64>,
}

impl GroupObservation {
    pub fn new(name: impl Into<String>, proportion: Proportion, sample_size: Option<f64>) -> Self {
        Self {
            name: name.into(),
            proportion,
            sample_size,
        }
    }

    fn sample(&self) -> Result<ProportionSample> {
        let sample_size = self.sample_size.ok_or_else(|| Error::MissingSampleSize {
            group: self.name.clone(),
        })?;
        ProportionSample::new(self.proportion, sample_size)
    }
}

/// One side of an oriented comparison
#[derive(Debug, Clone, PartialEq)]
pub struct PairSide {
    /// Position of the group in the input
    pub index: usize,
    pub name: String,
    pub proportion: Proportion,
    pub sample_size: Option<f64>,
}

impl PairSide {
    fn from_observation(index: usize, group: &GroupObservation) -> Self {
        Self {
            index,
            name: group.name.clone(),
            proportion: group.proportion,
            sample_size: group.sample_size,
        }
    }
}

/// Rendered confidence bounds of an oriented comparison
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalReport {
    /// Interval around the oriented (non-negative) effect
    pub interval: ConfidenceInterval,
    pub lower: String,
    pub upper: String,
}

/// Result of comparing one pair of groups
#[derive(Debug, Clone, PartialEq)]
pub struct PairResult {
    /// The higher group
    pub first: PairSide,
    /// The lower group
    pub second: PairSide,
    /// Effect of `first` relative to `second`; never negative
    pub effect: EffectSize,
    /// Whether the input order was reversed to make the effect non-negative
    pub swapped: bool,
    /// Effect size as written to the report
    pub effect_text: String,
    pub interval: Option<IntervalReport>,
    pub summary: String,
}

impl PairResult {
    pub fn strength(&self) -> EffectStrength {
        self.effect.strength
    }
}

/// Options for a pairwise run
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseOptions {
    /// Interval estimator; `None` skips confidence intervals entirely
    pub confidence: Option<AsymptoticCI>,
}

impl PairwiseOptions {
    /// Options that also compute confidence intervals with `estimator`
    pub fn with_confidence(estimator: AsymptoticCI) -> Self {
        Self {
            confidence: Some(estimator),
        }
    }

    pub fn includes_intervals(&self) -> bool {
        self.confidence.is_some()
    }
}

/// Compare one pair of groups. `first_index` and `second_index` are the
/// positions of the groups in the input.
pub fn compare_pair(
    first_index: usize,
    first: &GroupObservation,
    second_index: usize,
    second: &GroupObservation,
    options: &PairwiseOptions,
) -> Result<PairResult> {
    let estimator = CohenH::new();
    let raw = estimator.compute(first.proportion, second.proportion);
    let rounded = format::round_to(raw.magnitude, format::DECIMALS);

    // Bounds are taken on the input orientation, then reflected with the pair.
    let interval = match &options.confidence {
        Some(ci) => {
            let first_sample = first.sample()?;
            let second_sample = second.sample()?;
            Some(estimator.confidence_interval(&first_sample, &second_sample, ci)?)
        }
        None => None,
    };

    let swapped = raw.magnitude < 0.0;
    let (mut a, mut b) = (
        PairSide::from_observation(first_index, first),
        PairSide::from_observation(second_index, second),
    );
    if swapped {
        std::mem::swap(&mut a, &mut b);
    }

    let interval = interval.map(|ci| orient_interval(ci, swapped));
    let effect = EffectSize::new(raw.magnitude.abs());
    let effect_text = format::render_rounded(rounded.abs());
    let summary = summarize(&a.name, &b.name, effect.strength, &effect_text, interval.as_ref());

    debug!(
        first = %a.name,
        second = %b.name,
        h = raw.magnitude,
        strength = %effect.strength,
        swapped,
        "compared pair"
    );

    Ok(PairResult {
        first: a,
        second: b,
        effect,
        swapped,
        effect_text,
        interval,
        summary,
    })
}

/// Compare every unordered pair of `groups`, in column order
#[instrument(level = "info", skip(groups), fields(groups = groups.len()))]
pub fn compare_all(
    groups: &[GroupObservation],
    options: &PairwiseOptions,
) -> Result<Vec<PairResult>> {
    let mut results = Vec::with_capacity(pair_count(groups.len()));
    for (i, first) in groups.iter().enumerate() {
        for (offset, second) in groups[i + 1..].iter().enumerate() {
            results.push(compare_pair(i, first, i + 1 + offset, second, options)?);
        }
    }
    debug!(pairs = results.len(), "pairwise comparison finished");
    Ok(results)
}

/// Number of unordered pairs among `n` groups
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

fn orient_interval(interval: ConfidenceInterval, swapped: bool) -> IntervalReport {
    let lower = format::round_to(interval.lower, format::DECIMALS);
    let upper = format::round_to(interval.upper, format::DECIMALS);
    if swapped {
        IntervalReport {
            interval: interval.reflected(),
            lower: format::render_rounded(-upper),
            upper: format::render_rounded(-lower),
        }
    } else {
        IntervalReport {
            interval,
            lower: format::render_rounded(lower),
            upper: format::render_rounded(upper),
        }
    }
}

fn summarize(
    higher: &str,
    lower: &str,
    strength: EffectStrength,
    effect_text: &str,
    interval: Option<&IntervalReport>,
) -> String {
    if !strength.is_meaningful() {
        return format!("There was no meaningful difference in score between {higher} and {lower}.");
    }
    match interval {
        Some(ci) => format!(
            "{higher} had a meaningfully higher score than {lower} [Cohen's h = {effect_text}, {} Confidence Interval ({}, {})].",
            ci.interval.confidence_level, ci.lower, ci.upper
        ),
        None => format!("{higher} had a meaningfully higher score than {lower} (Cohen's h = {effect_text})."),
    }
}
