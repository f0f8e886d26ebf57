//! Error types for pairwise proportion analysis
//!
//! Provides a unified error type for all proportion-* crates. The first four
//! user-facing variants carry the numbered guidance messages printed by the
//! command-line tool.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for loading, computing and reporting effect sizes
#[derive(Error, Debug)]
pub enum Error {
    /// The dataset could not be opened or parsed as CSV
    #[error(
        "Error #1: Your dataset at {} could not be loaded ({reason}). Please re-run this application and try again.",
        path.display()
    )]
    Load { path: PathBuf, reason: String },

    /// Row 0 has at least one blank proportion
    #[error(
        "Error #2: Please ensure there are no missing proportions in your dataset (missing: {}). Afterwards, re-run this application.",
        groups.join(", ")
    )]
    MissingProportion { groups: Vec<String> },

    /// More data rows than the proportions/sample sizes template allows
    #[error(
        "Error #3: Please ensure your dataset is formatted using the provided template (expected at most 2 data rows, found {rows}). Afterwards, re-run this application."
    )]
    Shape { rows: usize },

    /// Confidence intervals were requested but a group has no sample size
    #[error(
        "Error #4: Please ensure sample sizes were provided for all groups (missing for {group}). Afterwards, re-run this application."
    )]
    MissingSampleSize { group: String },

    /// A proportion is not a number in [0, 1]
    #[error(
        "Error #5: The proportion for {group} must be a number between 0 and 1, got {value:?}. Afterwards, re-run this application."
    )]
    InvalidProportion { group: String, value: String },

    /// A sample size is present but not a positive number
    #[error(
        "Error #6: The sample size for {group} must be a positive number, got {value:?}. Afterwards, re-run this application."
    )]
    InvalidSampleSize { group: String, value: String },

    /// Two columns share a group name
    #[error("Error #7: Group names must be unique, but {0} appears more than once. Afterwards, re-run this application.")]
    DuplicateGroup(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a load error for `path` from any displayable cause
    pub fn load(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error stems from the contents of the user's dataset
    /// rather than from the environment
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::MissingProportion { .. }
                | Self::Shape { .. }
                | Self::MissingSampleSize { .. }
                | Self::InvalidProportion { .. }
                | Self::InvalidSampleSize { .. }
                | Self::DuplicateGroup(_)
        )
    }
}
