//! Reader for subcontig FASTA files using noodles.
//!
//! Every record of a file is one subcontig. The record header is the
//! subcontig name (`StrainID;ContigID;Start_Stop;Length`); if the header carries
//! a description after whitespace it is kept as part of the name.
//! Supports both uncompressed and gzip/bgzip compressed files.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::core::subcontig::SubcontigName;
use crate::parsing::ParseError;
use crate::utils::validation::is_gzipped;

/// A subcontig read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcontigRecord {
    pub name: SubcontigName,
    pub sequence: Vec<u8>,
}

/// Read all subcontig records of a FASTA file.
///
/// An empty file yields no records.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// a record is not valid FASTA, or `ParseError::MalformedName` if a header is not
/// a subcontig name.
pub fn read_subcontigs(path: &Path) -> Result<Vec<SubcontigRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        // bgzip output is a series of gzip members
        read_subcontigs_from(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        read_subcontigs_from(BufReader::new(file))
    }
}

/// Read all subcontig records from a buffered reader
///
/// # Errors
///
/// See [`read_subcontigs`].
pub fn read_subcontigs_from<R: BufRead>(reader: R) -> Result<Vec<SubcontigRecord>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut records = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let mut name = String::from_utf8_lossy(record.name()).to_string();
        if let Some(description) = record.description() {
            name.push(' ');
            name.push_str(&String::from_utf8_lossy(description));
        }

        records.push(SubcontigRecord {
            name: SubcontigName::parse(&name)?,
            sequence: record.sequence().as_ref().to_vec(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_single_subcontig() {
        let content = b">strainA;contig_1;1_12;12\nACGTACGT\nACGT\n";
        let mut temp = NamedTempFile::with_suffix(".subcontig").unwrap();
        temp.write_all(content).unwrap();
        temp.flush().unwrap();

        let records = read_subcontigs(temp.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.full, "strainA;contig_1;1_12;12");
        assert_eq!(records[0].name.strain_id, "strainA");
        assert_eq!(records[0].sequence, b"ACGTACGTACGT");
    }

    #[test]
    fn test_read_multiple_subcontigs() {
        let content = b">s;c1;1_4;4\nACGT\n>s;EXCLUDED_c2;1_4;4\nGGGG\n";
        let records = read_subcontigs_from(&content[..]).unwrap();
        assert_eq!(records.len(), 2);
        assert!(!records[0].name.is_excluded());
        assert!(records[1].name.is_excluded());
        assert_eq!(records[1].sequence, b"GGGG");
    }

    #[test]
    fn test_description_is_part_of_name() {
        let content = b">strain A;contig_1;1_4;4\nACGT\n";
        let records = read_subcontigs_from(&content[..]).unwrap();
        assert_eq!(records[0].name.full, "strain A;contig_1;1_4;4");
        assert_eq!(records[0].name.strain_id, "strain A");
    }

    #[test]
    fn test_read_empty_file() {
        let records = read_subcontigs_from(&b""[..]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_malformed_name() {
        let content = b">contig_1\nACGT\n";
        let err = read_subcontigs_from(&content[..]).unwrap_err();
        assert!(matches!(err, ParseError::MalformedName { .. }));
    }

    #[test]
    fn test_read_gzipped_subcontig() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">s;c;1_8;8\nACGTTTGA\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".subcontig.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let records = read_subcontigs(temp.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence, b"ACGTTTGA");
    }
}
