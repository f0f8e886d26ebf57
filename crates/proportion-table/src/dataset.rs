//! Loading and validating the two-row proportions dataset
//!
//! The expected layout is a header row of group names, a row of proportions
//! and an optional row of sample sizes. The first column labels the rows and
//! is discarded:
//!
//! ```text
//! ,Control,Treatment A,Treatment B
//! Proportion,0.30,0.45,0.70
//! Sample Size,120,115,98
//! ```

use proportion_core::{Error, Proportion, Result};
use proportion_effect::GroupObservation;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Maximum number of data rows: proportions and sample sizes
pub const MAX_ROWS: usize = 2;

/// One group column of the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Column header
    pub name: String,
    pub proportion: Proportion,
    /// Proportion cell as written in the input
    pub proportion_text: String,
    pub sample_size: Option<f64>,
    /// Sample size cell as written in the input
    pub sample_size_text: Option<String>,
}

impl Group {
    /// The calculator's view of this group
    pub fn observation(&self) -> GroupObservation {
        GroupObservation::new(self.name.clone(), self.proportion, self.sample_size)
    }
}

/// A validated dataset, immutable once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    source: PathBuf,
    rows: usize,
    groups: Vec<Group>,
}

impl Dataset {
    /// Load and validate the CSV file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::load(path, e))?;
        Self::from_reader(file, path)
    }

    /// Load and validate CSV data from any reader. `source` names the data in
    /// error messages.
    pub fn from_reader<R: Read>(reader: R, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let table = RawTable::read(reader).map_err(|e| Error::load(&source, e))?;
        info!(
            source = %source.display(),
            rows = table.rows.len(),
            groups = table.names.len(),
            "dataset parsed"
        );
        let groups = table.validate()?;
        Ok(Self {
            source,
            rows: table.rows.len(),
            groups,
        })
    }

    /// Where the data was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Number of data rows in the input
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Whether every group has a sample size
    pub fn has_sample_sizes(&self) -> bool {
        self.groups.iter().all(|g| g.sample_size.is_some())
    }

    /// Observations in column order, ready for the pairwise calculator
    pub fn observations(&self) -> Vec<GroupObservation> {
        self.groups.iter().map(Group::observation).collect()
    }
}

/// Parsed CSV cells with the label column already removed
struct RawTable {
    names: Vec<String>,
    /// Cells per data row; `None` marks a blank cell
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    fn read<R: Read>(reader: R) -> std::result::Result<Self, String> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(|e| e.to_string())?.clone();
        if headers.is_empty() {
            return Err("the file is empty".to_string());
        }
        let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| e.to_string())?;
            let cells = (1..=names.len())
                .map(|i| {
                    record
                        .get(i)
                        .map(str::trim)
                        .filter(|cell| !cell.is_empty())
                        .map(str::to_string)
                })
                .collect();
            rows.push(cells);
        }

        Ok(Self { names, rows })
    }

    fn validate(&self) -> Result<Vec<Group>> {
        let proportions = self.row(0);
        let missing: Vec<String> = self
            .names
            .iter()
            .zip(&proportions)
            .filter(|(_, cell)| cell.is_none())
            .map(|(name, _)| name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingProportion { groups: missing });
        }

        if self.rows.len() > MAX_ROWS {
            return Err(Error::Shape {
                rows: self.rows.len(),
            });
        }

        let sample_sizes = self.row(1);
        let mut groups = Vec::with_capacity(self.names.len());
        for ((name, proportion_cell), sample_cell) in self.names.iter().zip(proportions).zip(sample_sizes) {
            // Present by the missing-proportion check above
            let proportion_text = proportion_cell.unwrap_or_default();
            let proportion = parse_proportion(name, &proportion_text)?;
            let sample_size = sample_cell
                .as_deref()
                .map(|text| parse_sample_size(name, text))
                .transpose()?;

            groups.push(Group {
                name: name.clone(),
                proportion,
                proportion_text,
                sample_size,
                sample_size_text: sample_cell,
            });
        }

        let mut seen = HashSet::new();
        for group in &groups {
            if !seen.insert(group.name.as_str()) {
                return Err(Error::DuplicateGroup(group.name.clone()));
            }
        }

        debug!(groups = groups.len(), "dataset validated");
        Ok(groups)
    }

    /// Cells of data row `index`, padded with blanks to the header width
    fn row(&self, index: usize) -> Vec<Option<String>> {
        match self.rows.get(index) {
            Some(cells) => cells.clone(),
            None => vec![None; self.names.len()],
        }
    }
}

fn parse_proportion(group: &str, text: &str) -> Result<Proportion> {
    text.parse::<f64>()
        .ok()
        .and_then(Proportion::new)
        .ok_or_else(|| Error::InvalidProportion {
            group: group.to_string(),
            value: text.to_string(),
        })
}

fn parse_sample_size(group: &str, text: &str) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(Error::InvalidSampleSize {
            group: group.to_string(),
            value: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn load(csv: &str) -> Result<Dataset> {
        Dataset::from_reader(csv.as_bytes(), "test.csv")
    }

    #[test]
    fn test_two_row_dataset() {
        let dataset = load(",A,B,C\nProportion,0.3,0.5,0.7\nN,10,20,30\n").unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows(), 2);
        assert!(dataset.has_sample_sizes());

        let b = dataset.group(1).unwrap();
        assert_eq!(b.name, "B");
        assert_abs_diff_eq!(b.proportion.value(), 0.5);
        assert_eq!(b.proportion_text, "0.5");
        assert_eq!(b.sample_size, Some(20.0));
        assert_eq!(b.sample_size_text.as_deref(), Some("20"));
    }

    #[test]
    fn test_label_column_is_dropped() {
        let dataset = load("label,X,Y\np,0.1,0.2\n").unwrap();
        let names: Vec<_> = dataset.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["X", "Y"]);
        assert!(!dataset.has_sample_sizes());
    }

    #[test]
    fn test_whitespace_cells_are_missing() {
        let dataset = load(",A,B\np,0.1, 0.2 \nn,  ,15\n").unwrap();
        assert_eq!(dataset.group(0).unwrap().sample_size, None);
        assert_eq!(dataset.group(0).unwrap().sample_size_text, None);
        assert_eq!(dataset.group(1).unwrap().proportion_text, "0.2");
        assert_eq!(dataset.group(1).unwrap().sample_size, Some(15.0));
    }

    #[test]
    fn test_missing_proportion() {
        match load(",A,B,C\np,0.1,,0.3\n") {
            Err(Error::MissingProportion { groups }) => assert_eq!(groups, vec!["B"]),
            other => panic!("expected MissingProportion, got {other:?}"),
        }
        match load(",A,B\np, ,\n") {
            Err(Error::MissingProportion { groups }) => assert_eq!(groups, vec!["A", "B"]),
            other => panic!("expected MissingProportion, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_row_counts_as_missing() {
        match load(",A,B,C\np,0.1,0.2\n") {
            Err(Error::MissingProportion { groups }) => assert_eq!(groups, vec!["C"]),
            other => panic!("expected MissingProportion, got {other:?}"),
        }
    }

    #[test]
    fn test_no_data_rows() {
        assert!(matches!(
            load(",A,B\n"),
            Err(Error::MissingProportion { .. })
        ));
    }

    #[test]
    fn test_too_many_rows() {
        match load(",A,B\np,0.1,0.2\nn,10,10\nextra,1,1\n") {
            Err(Error::Shape { rows }) => assert_eq!(rows, 3),
            other => panic!("expected Shape, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_proportion_reported_before_shape() {
        assert!(matches!(
            load(",A,B\np,,0.2\nn,10,10\nextra,1,1\n"),
            Err(Error::MissingProportion { .. })
        ));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(",A,B\np,1.2,0.2\n"),
            Err(Error::InvalidProportion { ref group, .. }) if group == "A"
        ));
        assert!(matches!(
            load(",A,B\np,abc,0.2\n"),
            Err(Error::InvalidProportion { .. })
        ));
        assert!(matches!(
            load(",A,B\np,0.1,0.2\nn,0,10\n"),
            Err(Error::InvalidSampleSize { ref value, .. }) if value == "0"
        ));
        assert!(matches!(
            load(",A,B\np,0.1,0.2\nn,ten,10\n"),
            Err(Error::InvalidSampleSize { .. })
        ));
    }

    #[test]
    fn test_duplicate_group() {
        assert!(matches!(
            load(",A,A\np,0.1,0.2\n"),
            Err(Error::DuplicateGroup(ref name)) if name == "A"
        ));
    }

    #[test]
    fn test_empty_input_is_load_error() {
        assert!(matches!(load(""), Err(Error::Load { .. })));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = Dataset::load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
