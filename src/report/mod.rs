//! The `KmerContent.report` TSV.
//!
//! One header line followed by one row per reported subcontig:
//!
//! ```text
//! SubcontigID	StrainID	ContigID	Start_Stop	Length	Nunique
//! strainA;contig_1;1_10000;10000	strainA	contig_1	1_10000	10000	8231
//! ```

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::core::subcontig::SubcontigName;

/// Default report file name inside the database directory
pub const REPORT_FILE_NAME: &str = "KmerContent.report";

pub const REPORT_HEADER: [&str; 6] = [
    "SubcontigID",
    "StrainID",
    "ContigID",
    "Start_Stop",
    "Length",
    "Nunique",
];

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to move report into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "SubcontigID")]
    pub subcontig_id: String,

    #[serde(rename = "StrainID")]
    pub strain_id: String,

    #[serde(rename = "ContigID")]
    pub contig_id: String,

    #[serde(rename = "Start_Stop")]
    pub start_stop: String,

    #[serde(rename = "Length")]
    pub length: String,

    #[serde(rename = "Nunique")]
    pub n_unique: u64,
}

impl ReportRow {
    #[must_use]
    pub fn new(name: &SubcontigName, n_unique: u64) -> Self {
        Self {
            subcontig_id: name.full.clone(),
            strain_id: name.strain_id.clone(),
            contig_id: name.contig_id.clone(),
            start_stop: name.start_stop.clone(),
            length: name.length.clone(),
            n_unique,
        }
    }
}

/// Write the report header and rows as TSV
///
/// # Errors
///
/// Returns `ReportError::Io` if writing fails.
pub fn write_report<W: Write>(writer: W, rows: &[ReportRow]) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{}", REPORT_HEADER.join("\t"))?;
    for row in rows {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            row.subcontig_id, row.strain_id, row.contig_id, row.start_stop, row.length, row.n_unique
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the report to `path`.
///
/// The report is written to a temporary file next to `path` and renamed into
/// place, so an interrupted run never leaves a truncated report behind.
///
/// # Errors
///
/// Returns `ReportError::Io` if the temporary file cannot be created or
/// written, or `ReportError::Persist` if it cannot be renamed to `path`.
pub fn write_report_file(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    write_report(temp.as_file_mut(), rows)?;
    temp.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, n_unique: u64) -> ReportRow {
        ReportRow::new(&SubcontigName::parse(name).unwrap(), n_unique)
    }

    #[test]
    fn test_write_report() {
        let rows = vec![row("s1;c1;1_100;100", 42), row("s2;c9;101_200;100", 0)];
        let mut out = Vec::new();
        write_report(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "SubcontigID\tStrainID\tContigID\tStart_Stop\tLength\tNunique"
        );
        assert_eq!(lines[1], "s1;c1;1_100;100\ts1\tc1\t1_100\t100\t42");
        assert_eq!(lines[2], "s2;c9;101_200;100\ts2\tc9\t101_200\t100\t0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_empty_report_has_header() {
        let mut out = Vec::new();
        write_report(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "SubcontigID\tStrainID\tContigID\tStart_Stop\tLength\tNunique\n"
        );
    }

    #[test]
    fn test_write_report_file_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REPORT_FILE_NAME);
        std::fs::write(&path, "stale").unwrap();

        write_report_file(&path, &[row("s;c;1_4;4", 3)]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("SubcontigID\t"));
        assert!(text.ends_with("s;c;1_4;4\ts\tc\t1_4\t4\t3\n"));
        // Only the report itself is left in the directory
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_report_row_serializes_with_column_names() {
        let json = serde_json::to_value(row("s;c;1_4;4", 3)).unwrap();
        assert_eq!(json["SubcontigID"], "s;c;1_4;4");
        assert_eq!(json["Nunique"], 3);
    }
}
