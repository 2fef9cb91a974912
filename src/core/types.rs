use serde::{Deserialize, Serialize};

/// Ordinal assigned to a subcontig in the order it was read.
///
/// Excluded subcontigs are numbered first, included subcontigs continue
/// from where the exclusion phase stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubcontigId(pub u32);

impl SubcontigId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SubcontigId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ownership state of a single k-mer hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Hash has not been observed in any subcontig
    Unseen,
    /// Hash has been observed in exactly one included subcontig so far
    OwnedBy(SubcontigId),
    /// Hash is shared, or came from an excluded subcontig. Never reassigned.
    NonUnique,
}

impl Ownership {
    #[must_use]
    pub fn is_unique(self) -> bool {
        matches!(self, Self::OwnedBy(_))
    }
}

/// Counting phase. Exclusions must be seeded before any included subcontig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Exclusion,
    Inclusion,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exclusion => write!(f, "exclusion"),
            Self::Inclusion => write!(f, "inclusion"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_is_unique() {
        assert!(Ownership::OwnedBy(SubcontigId(3)).is_unique());
        assert!(!Ownership::NonUnique.is_unique());
        assert!(!Ownership::Unseen.is_unique());
    }

    #[test]
    fn test_phase_defaults_to_exclusion() {
        assert_eq!(Phase::default(), Phase::Exclusion);
        assert_eq!(Phase::Inclusion.to_string(), "inclusion");
    }
}
