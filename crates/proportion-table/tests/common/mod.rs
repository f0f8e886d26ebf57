//! Common test utilities for proportion-table tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding one input dataset
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl Workspace {
    /// Write `csv` to `input.csv` inside a fresh temporary directory
    pub fn with_input(csv: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        std::fs::write(&input, csv).unwrap();
        Self { dir, input }
    }

    /// Path for the report inside the workspace
    pub fn output(&self) -> PathBuf {
        self.dir.path().join("effect_size.csv")
    }
}

/// Read a written report back as rows of cells, header first
pub fn read_report(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

/// Three groups with proportions and sample sizes
pub const THREE_GROUPS: &str = "\
,Control,Treatment A,Treatment B
Proportion,0.30,0.45,0.70
Sample Size,120,115,98
";
