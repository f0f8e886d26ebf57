//! Cohen's h effect sizes for proportions
//!
//! This crate measures how far apart two proportions are on the
//! arcsine-square-root scale and classifies the result using Cohen's
//! conventions. The [`pairwise`] module runs the comparison for every
//! unordered pair of named groups and orients each result so the higher group
//! comes first.
//!
//! # Supported Effect Sizes
//!
//! - **Cohen's h**: `2 · (arcsin √p₁ − arcsin √p₂)`, optionally with a
//!   normal-approximation confidence interval
//!
//! # Examples
//!
//! ## A single comparison
//!
//! ```rust
//! use proportion_core::Proportion;
//! use proportion_effect::{CohenH, EffectStrength, ProportionEffectSize};
//!
//! let h = CohenH::new().compute(Proportion::new(0.7).unwrap(), Proportion::new(0.3).unwrap());
//! assert_eq!(h.strength, EffectStrength::Large);
//! ```
//!
//! ## Every pair of groups
//!
//! ```rust
//! use proportion_core::Proportion;
//! use proportion_effect::pairwise::{compare_all, GroupObservation, PairwiseOptions};
//!
//! let groups = vec![
//!     GroupObservation::new("X", Proportion::new(0.30).unwrap(), None),
//!     GroupObservation::new("Y", Proportion::new(0.70).unwrap(), None),
//! ];
//! let results = compare_all(&groups, &PairwiseOptions::default()).unwrap();
//! assert_eq!(results[0].first.name, "Y");
//! assert_eq!(results[0].effect_text, "0.82");
//! ```

mod cohen_h;
pub mod pairwise;
mod traits;
mod types;

// Re-exports
pub use cohen_h::CohenH;
pub use pairwise::{compare_all, GroupObservation, PairResult, PairwiseOptions};
pub use traits::{IntervalEffectSize, ProportionEffectSize};
pub use types::{EffectSize, EffectStrength};

// Convenience constructors
pub fn cohen_h() -> CohenH {
    CohenH::new()
}
