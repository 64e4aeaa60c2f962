//! Reading workout packages from files and argument lists.
//!
//! Supported sources:
//! - CSV (`.csv`): `CODE,v1,v2,...` per row, no header, `#` comments;
//!   errors name the source line
//! - JSON (`.json`): array of `{"workout_type": ..., "data": [...]}`
//! - JSON Lines (`.jsonl`): one such object per line

use crate::{Error, Result, WorkoutPackage};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Load packages from a file, choosing the parser by extension
pub fn load_packages(path: &Path) -> Result<Vec<WorkoutPackage>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let file = File::open(path)?;
    let packages = match extension.as_deref() {
        Some("csv") => read_csv(file)?,
        Some("json") => read_json(file)?,
        Some("jsonl") => read_jsonl(BufReader::new(file))?,
        _ => {
            return Err(Error::Input(format!(
                "Unsupported input file {:?} (expected .csv, .json or .jsonl)",
                path
            )))
        }
    };

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

/// Parse headerless CSV rows of `CODE,v1,v2,...`
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<WorkoutPackage>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut packages = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let mut fields = record.iter();

        // A blank code is kept so the factory reports it as an unknown kind
        let workout_type = fields.next().unwrap_or_default().to_string();

        let data = fields
            .map(|field| parse_value(field).map_err(|e| with_line(e, line)))
            .collect::<Result<Vec<_>>>()?;

        packages.push(WorkoutPackage { workout_type, data });
    }

    Ok(packages)
}

/// Parse a JSON array of packages
pub fn read_json<R: Read>(reader: R) -> Result<Vec<WorkoutPackage>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse one JSON package per line, skipping blank lines
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<WorkoutPackage>> {
    let mut packages = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        packages.push(serde_json::from_str(&line)?);
    }
    Ok(packages)
}

/// Parse raw numeric values given on the command line
pub fn parse_values<S: AsRef<str>>(values: &[S]) -> Result<Vec<f64>> {
    values.iter().map(|v| parse_value(v.as_ref())).collect()
}

fn parse_value(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::Input(format!("Not a number: {:?}", raw)))
}

fn with_line(err: Error, line: u64) -> Error {
    match err {
        Error::Input(msg) => Error::Input(format!("line {}: {}", line, msg)),
        other => other,
    }
}
