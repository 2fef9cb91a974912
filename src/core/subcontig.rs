use serde::{Deserialize, Serialize};

use crate::parsing::ParseError;

/// Prefix carried by the contig field of subcontigs below the size threshold
pub const EXCLUDED_PREFIX: &str = "EXCLUDED_";

/// Field separator inside a subcontig name
pub const NAME_SEPARATOR: char = ';';

/// A subcontig name of the form `StrainID;ContigID;Start_Stop;Length`.
///
/// The full name is kept verbatim since it is the first column of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcontigName {
    /// Name exactly as it appeared in the FASTA header
    pub full: String,

    pub strain_id: String,

    /// Contig identifier, prefixed with `EXCLUDED_` for excluded subcontigs
    pub contig_id: String,

    /// Position of the subcontig in its contig, `start_stop`
    pub start_stop: String,

    pub length: String,
}

impl SubcontigName {
    /// Parse a subcontig name.
    ///
    /// Only the first four `;`-separated fields are interpreted; anything after
    /// them stays part of the full name.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MalformedName` if fewer than four fields are present.
    pub fn parse(name: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = name.split(NAME_SEPARATOR).collect();
        if fields.len() < 4 {
            return Err(ParseError::MalformedName {
                name: name.to_string(),
                fields: fields.len(),
            });
        }

        Ok(Self {
            full: name.to_string(),
            strain_id: fields[0].to_string(),
            contig_id: fields[1].to_string(),
            start_stop: fields[2].to_string(),
            length: fields[3].to_string(),
        })
    }

    /// Whether this subcontig was set aside as too small to score
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        self.contig_id.starts_with(EXCLUDED_PREFIX)
    }
}

impl std::fmt::Display for SubcontigName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcontig_name() {
        let name = SubcontigName::parse("strainA;contig_1;501_10500;10000").unwrap();
        assert_eq!(name.full, "strainA;contig_1;501_10500;10000");
        assert_eq!(name.strain_id, "strainA");
        assert_eq!(name.contig_id, "contig_1");
        assert_eq!(name.start_stop, "501_10500");
        assert_eq!(name.length, "10000");
        assert!(!name.is_excluded());
    }

    #[test]
    fn test_parse_excluded_name() {
        let name = SubcontigName::parse("strainA;EXCLUDED_contig_7;1_4000;4000").unwrap();
        assert!(name.is_excluded());
        assert_eq!(name.contig_id, "EXCLUDED_contig_7");
    }

    #[test]
    fn test_excluded_prefix_only_checked_on_contig_field() {
        let name = SubcontigName::parse("EXCLUDED_strain;contig_1;1_100;100").unwrap();
        assert!(!name.is_excluded());
    }

    #[test]
    fn test_parse_extra_fields_are_kept_in_full_name() {
        let name = SubcontigName::parse("s;c;1_10;10;extra").unwrap();
        assert_eq!(name.length, "10");
        assert_eq!(name.full, "s;c;1_10;10;extra");
    }

    #[test]
    fn test_parse_malformed_name() {
        let err = SubcontigName::parse("strainA;contig_1;1_100").unwrap_err();
        assert!(matches!(err, ParseError::MalformedName { fields: 3, .. }));

        assert!(SubcontigName::parse("no_separators").is_err());
    }
}
