// File: crates/scatter-core/src/data.rs
// Summary: DataPoint model and CSV ingest with header-based column resolution.

use std::io::Read;
use std::path::Path;

use crate::error::DataError;

/// One parsed row of the tabular source. Immutable after load; rendering
/// only derives pixel-space scales from the collection.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Median household income (X axis).
    pub income: f64,
    /// Percentage of population lacking healthcare (Y axis).
    pub healthcare: f64,
    /// State abbreviation, rendered next to the mark.
    pub abbr: String,
}

/// Outcome counters for one load: usable rows kept and malformed rows dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows: usize,
    pub rejected: usize,
}

/// Load points from a CSV file on disk.
pub fn load_csv_path(path: &Path) -> Result<(Vec<DataPoint>, LoadReport), DataError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_records(rdr)
}

/// Load points from any reader (used by tests and in-memory sources).
pub fn load_csv_reader<R: Read>(reader: R) -> Result<(Vec<DataPoint>, LoadReport), DataError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    load_records(rdr)
}

fn load_records<R: Read>(mut rdr: csv::Reader<R>) -> Result<(Vec<DataPoint>, LoadReport), DataError> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_income = idx(&["income", "median_income"])
        .ok_or(DataError::MissingColumn("income"))?;
    let i_healthcare = idx(&["healthcare", "lacks_healthcare"])
        .ok_or(DataError::MissingColumn("healthcare"))?;
    let i_abbr = idx(&["abbr", "state_abbr", "abbreviation"])
        .ok_or(DataError::MissingColumn("abbr"))?;

    let mut out = Vec::new();
    let mut report = LoadReport::default();

    for rec in rdr.records() {
        let rec = rec?;
        let num = |ix: usize| -> Option<f64> {
            rec.get(ix)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };
        let abbr = rec.get(i_abbr).map(|s| s.trim()).unwrap_or("");
        match (num(i_income), num(i_healthcare)) {
            (Some(income), Some(healthcare)) if !abbr.is_empty() => {
                out.push(DataPoint { income, healthcare, abbr: abbr.to_string() });
                report.rows += 1;
            }
            // Malformed rows never reach the scale domains.
            _ => report.rejected += 1,
        }
    }

    if out.is_empty() {
        return Err(DataError::Empty { rejected: report.rejected });
    }
    Ok((out, report))
}
