//! Configuration types for an analysis run

use proportion_confidence::{AsymptoticCI, ConfidenceLevel};
use proportion_effect::PairwiseOptions;
use std::fmt;
use std::path::{Path, PathBuf};

/// File name the report is written to when no other target is given
pub const DEFAULT_OUTPUT: &str = "effect_size.csv";

/// Where the finished report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write a CSV file, replacing any existing file
    File(PathBuf),
    /// Print the CSV to standard output
    Stdout,
}

impl OutputTarget {
    /// Path of the output file, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdout => None,
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_OUTPUT))
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => f.write_str("<stdout>"),
        }
    }
}

/// Settings for one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Also compute confidence intervals (requires sample sizes)
    pub include_confidence_intervals: bool,
    /// Level of the confidence intervals
    pub confidence_level: ConfidenceLevel,
    /// Destination of the report
    pub output: OutputTarget,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confidence_intervals(mut self, include: bool) -> Self {
        self.include_confidence_intervals = include;
        self
    }

    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Self {
        self.confidence_level = level;
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Options for the pairwise calculator implied by this configuration
    pub fn pairwise_options(&self) -> PairwiseOptions {
        if self.include_confidence_intervals {
            PairwiseOptions::with_confidence(AsymptoticCI::normal(self.confidence_level))
        } else {
            PairwiseOptions::default()
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_confidence_intervals: false,
            confidence_level: ConfidenceLevel::NINETY_FIVE,
            output: OutputTarget::default(),
        }
    }
}
