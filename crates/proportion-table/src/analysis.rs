//! End-to-end run: load, compare every pair, write the report

use crate::config::{AnalysisConfig, OutputTarget};
use crate::dataset::Dataset;
use crate::report::ReportTable;
use proportion_core::Result;
use proportion_effect::compare_all;
use std::path::Path;
use tracing::info;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub groups: usize,
    pub pairs: usize,
    pub output: OutputTarget,
}

/// Compute the report for an already-loaded dataset without writing it
pub fn analyze(dataset: &Dataset, config: &AnalysisConfig) -> Result<ReportTable> {
    let results = compare_all(&dataset.observations(), &config.pairwise_options())?;
    Ok(ReportTable::build(
        dataset,
        results,
        config.include_confidence_intervals,
    ))
}

/// Load `input`, compute every pairwise effect and write the report.
///
/// Nothing is written unless every step before it succeeded.
pub fn run(input: impl AsRef<Path>, config: &AnalysisConfig) -> Result<RunSummary> {
    let dataset = Dataset::load(input)?;
    let table = analyze(&dataset, config)?;

    match &config.output {
        OutputTarget::File(path) => table.write_file(path)?,
        OutputTarget::Stdout => table.write_to(std::io::stdout().lock())?,
    }

    info!(
        groups = dataset.len(),
        pairs = table.len(),
        output = %config.output,
        "analysis complete"
    );
    Ok(RunSummary {
        groups: dataset.len(),
        pairs: table.len(),
        output: config.output.clone(),
    })
}
