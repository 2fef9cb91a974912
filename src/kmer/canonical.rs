//! Canonical k-mer enumeration.
//!
//! A canonical k-mer is the lexicographically smaller of a k-mer and its reverse
//! complement, so both strands of a sequence yield the same k-mers. Sequences are
//! uppercased first; k-mers containing anything other than `A`, `C`, `G`, `T`
//! are skipped.

/// Complement of an uppercase base, `N` for anything that is not ACGT
#[inline]
fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        _ => b'N',
    }
}

#[inline]
fn is_acgt(base: u8) -> bool {
    matches!(base, b'A' | b'C' | b'G' | b'T')
}

/// Reverse complement of an uppercase sequence
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

/// The canonical k-mers of one sequence.
///
/// Holds the uppercased forward strand and its reverse complement; k-mers are
/// borrowed from whichever strand is smaller at each position.
#[derive(Debug, Clone)]
pub struct CanonicalKmers {
    forward: Vec<u8>,
    reverse: Vec<u8>,
    /// `invalid[i]` = number of non-ACGT bases in `forward[..i]`
    invalid: Vec<u32>,
    k: usize,
}

impl CanonicalKmers {
    #[must_use]
    pub fn new(seq: &[u8], k: usize) -> Self {
        let forward: Vec<u8> = seq.iter().map(u8::to_ascii_uppercase).collect();
        let reverse = reverse_complement(&forward);

        let mut invalid = Vec::with_capacity(forward.len() + 1);
        let mut running = 0u32;
        invalid.push(running);
        for &base in &forward {
            if !is_acgt(base) {
                running += 1;
            }
            invalid.push(running);
        }

        Self {
            forward,
            reverse,
            invalid,
            k,
        }
    }

    /// Number of k-mer positions, valid or not
    #[must_use]
    pub fn positions(&self) -> usize {
        if self.k == 0 {
            return 0;
        }
        (self.forward.len() + 1).saturating_sub(self.k)
    }

    /// Iterate the canonical k-mers in sequence order
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let n = self.forward.len();
        let k = self.k;
        (0..self.positions())
            .filter(move |&i| self.invalid[i + k] == self.invalid[i])
            .map(move |i| {
                let fwd = &self.forward[i..i + k];
                let rev = &self.reverse[n - k - i..n - i];
                if rev < fwd {
                    rev
                } else {
                    fwd
                }
            })
    }
}
