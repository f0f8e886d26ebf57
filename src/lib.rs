//! Pairwise Cohen's h effect sizes for proportions
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`proportion`]: errors, proportions and report number formatting
//! - [`confidence`]: normal-approximation confidence intervals
//! - [`effect`]: Cohen's h and the pairwise calculator
//! - [`table`]: CSV loading, validation and reporting
//!
//! The `cohens-h` binary wraps [`table::run`].

pub use proportion_confidence as confidence;
pub use proportion_core as proportion;
pub use proportion_effect as effect;
pub use proportion_table as table;

pub use proportion_core::{Error, Result};
pub use proportion_effect::{CohenH, EffectStrength, PairResult};
pub use proportion_table::{run, AnalysisConfig, Dataset, OutputTarget, ReportTable};
