//! Tabular input and output for pairwise Cohen's h analysis
//!
//! This crate reads the two-row proportions dataset from CSV, validates it,
//! runs the pairwise calculator from `proportion-effect` and writes the
//! sorted report.
//!
//! # Example
//!
//! ```rust
//! use proportion_table::{analyze, AnalysisConfig, Dataset};
//!
//! let csv = ",Control,Treatment\nProportion,0.30,0.70\nSample Size,120,115\n";
//! let dataset = Dataset::from_reader(csv.as_bytes(), "inline.csv").unwrap();
//!
//! let config = AnalysisConfig::new().with_confidence_intervals(true);
//! let table = analyze(&dataset, &config).unwrap();
//! assert_eq!(table.rows()[0][0], "Treatment");
//! ```

mod analysis;
pub mod config;
pub mod dataset;
pub mod report;

pub use analysis::{analyze, run, RunSummary};
pub use config::{AnalysisConfig, OutputTarget, DEFAULT_OUTPUT};
pub use dataset::{Dataset, Group};
pub use proportion_core::{Error, Result};
pub use report::ReportTable;
