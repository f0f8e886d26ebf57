//! Assembling and writing the effect size report
//!
//! One row is written per pair of groups, sorted by the rendered Cohen's h
//! column in descending order. The sort compares the rendered text, which
//! matches numeric order for every value Cohen's h can take (it never leaves
//! `0.00..=3.14`).

use crate::dataset::Dataset;
use proportion_core::Result;
use proportion_effect::pairwise::{PairResult, PairSide};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Columns written when confidence intervals are not requested
pub const EFFECT_HEADERS: [&str; 7] = [
    "Group A",
    "Group A - Proportion",
    "Group B",
    "Group B - Proportion",
    "Effect Strength",
    "Cohen's h",
    "Summary",
];

/// Columns written when confidence intervals are requested
pub const INTERVAL_HEADERS: [&str; 11] = [
    "Group A",
    "Group A - Proportion",
    "Group A - Sample Size",
    "Group B",
    "Group B - Proportion",
    "Group B - Sample Size",
    "Effect Strength",
    "Cohen's h",
    "Lower Bound",
    "Upper Bound",
    "Summary",
];

/// Placeholder left behind by a bound that could not be computed
const NAN_ARTIFACT: &str = "nan0";

/// The finished report, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    include_intervals: bool,
    rows: Vec<Vec<String>>,
}

impl ReportTable {
    /// Build the report for `results`, which must come from `dataset`
    pub fn build(dataset: &Dataset, mut results: Vec<PairResult>, include_intervals: bool) -> Self {
        sort_by_effect(&mut results);
        let rows = results
            .iter()
            .map(|result| {
                record(dataset, result, include_intervals)
                    .into_iter()
                    .map(|cell| clean_cell(&cell))
                    .collect()
            })
            .collect();
        Self {
            include_intervals,
            rows,
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        if self.include_intervals {
            &INTERVAL_HEADERS
        } else {
            &EFFECT_HEADERS
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table as CSV, without an index column
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(self.headers())?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the table to the file at `path`, replacing any existing file
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        self.write_to(std::io::BufWriter::new(file))?;
        info!(path = %path.display(), rows = self.rows.len(), "report written");
        Ok(())
    }
}

/// Sort descending by the rendered effect size; ties keep their order
pub fn sort_by_effect(results: &mut [PairResult]) {
    results.sort_by(|a, b| b.effect_text.cmp(&a.effect_text));
}

/// Remove every `nan0` placeholder from a cell
pub fn clean_cell(cell: &str) -> String {
    cell.replace(NAN_ARTIFACT, "")
}

fn record(dataset: &Dataset, result: &PairResult, include_intervals: bool) -> Vec<String> {
    let (a, b) = (&result.first, &result.second);
    let strength = result.strength().label().to_string();

    if include_intervals {
        let (lower, upper) = result
            .interval
            .as_ref()
            .map(|ci| (ci.lower.clone(), ci.upper.clone()))
            .unwrap_or_default();
        vec![
            a.name.clone(),
            proportion_cell(dataset, a),
            sample_size_cell(dataset, a),
            b.name.clone(),
            proportion_cell(dataset, b),
            sample_size_cell(dataset, b),
            strength,
            result.effect_text.clone(),
            lower,
            upper,
            result.summary.clone(),
        ]
    } else {
        vec![
            a.name.clone(),
            proportion_cell(dataset, a),
            b.name.clone(),
            proportion_cell(dataset, b),
            strength,
            result.effect_text.clone(),
            result.summary.clone(),
        ]
    }
}

fn proportion_cell(dataset: &Dataset, side: &PairSide) -> String {
    dataset
        .group(side.index)
        .map(|g| g.proportion_text.clone())
        .unwrap_or_else(|| side.proportion.to_string())
}

fn sample_size_cell(dataset: &Dataset, side: &PairSide) -> String {
    dataset
        .group(side.index)
        .and_then(|g| g.sample_size_text.clone())
        .or_else(|| side.sample_size.map(|n| n.to_string()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proportion_confidence::AsymptoticCI;
    use proportion_effect::{compare_all, PairwiseOptions};

    fn dataset(csv: &str) -> Dataset {
        Dataset::from_reader(csv.as_bytes(), "report.csv").unwrap()
    }

    fn render(table: &ReportTable) -> String {
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_effect_only_table() {
        let data = dataset(",X,Y\np,0.30,0.70\n");
        let results = compare_all(&data.observations(), &PairwiseOptions::default()).unwrap();
        let table = ReportTable::build(&data, results, false);

        assert_eq!(table.headers().len(), 7);
        assert_eq!(
            table.rows()[0],
            vec![
                "Y",
                "0.70",
                "X",
                "0.30",
                "Large",
                "0.82",
                "Y had a meaningfully higher score than X (Cohen's h = 0.82).",
            ]
        );

        let csv = render(&table);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Group A,Group A - Proportion,Group B,Group B - Proportion,Effect Strength,Cohen's h,Summary")
        );
        assert_eq!(
            lines.next(),
            Some("Y,0.70,X,0.30,Large,0.82,Y had a meaningfully higher score than X (Cohen's h = 0.82).")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_interval_table() {
        let data = dataset(",X,Y\np,0.3,0.7\nn,100,100\n");
        let options = PairwiseOptions::with_confidence(AsymptoticCI::default());
        let results = compare_all(&data.observations(), &options).unwrap();
        let table = ReportTable::build(&data, results, true);

        assert_eq!(table.headers().len(), 11);
        let row = &table.rows()[0];
        assert_eq!(row.len(), 11);
        assert_eq!(&row[..8], &["Y", "0.7", "100", "X", "0.3", "100", "Large", "0.82"]);
        assert_eq!(row[8], "0.57");
        assert_eq!(row[9], "1.08");
        assert!(render(&table).contains("\"Y had a meaningfully higher score than X [Cohen's h = 0.82, 95% Confidence Interval (0.57, 1.08)].\""));
    }

    #[test]
    fn test_rows_sorted_descending_with_stable_ties() {
        let data = dataset(",A,B,C,D\np,0.5,0.5,0.9,0.1\n");
        let results = compare_all(&data.observations(), &PairwiseOptions::default()).unwrap();
        let table = ReportTable::build(&data, results, false);

        let effects: Vec<&str> = table.rows().iter().map(|r| r[5].as_str()).collect();
        let mut sorted = effects.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(effects, sorted);
        assert_eq!(table.rows()[0][0], "C");
        assert_eq!(table.rows()[0][2], "D");

        // A-C and B-C tie; input order is kept
        let ties: Vec<(&str, &str)> = table
            .rows()
            .iter()
            .filter(|r| r[0] == "C" && r[2] != "D")
            .map(|r| (r[0].as_str(), r[2].as_str()))
            .collect();
        assert_eq!(ties, vec![("C", "A"), ("C", "B")]);
    }

    #[test]
    fn test_clean_cell() {
        assert_eq!(clean_cell("nan0"), "");
        assert_eq!(clean_cell("(nan0, 1.20)"), "(, 1.20)");
        assert_eq!(clean_cell("0.50"), "0.50");
    }

    #[test]
    fn test_no_pairs_writes_header_only() {
        let data = dataset(",Only\np,0.4\n");
        let results = compare_all(&data.observations(), &PairwiseOptions::default()).unwrap();
        let table = ReportTable::build(&data, results, false);
        assert!(table.is_empty());
        assert_eq!(render(&table).lines().count(), 1);
    }
}
