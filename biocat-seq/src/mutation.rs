//! Positional substitution scan between two sequences.
//!
//! Symbols are compared index by index over the overlapping prefix. There
//! is no gap modelling: one inserted base shifts every later position and
//! shows up as a run of substitutions. Extra trailing symbols in the longer
//! sequence are never reported; only [`MutationRecord::has_length_mismatch`]
//! records that they exist.

use std::fmt;

/// Text rendered when the compared region is identical.
pub const NO_MUTATIONS: &str = "No mutations found";

/// One substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mutation {
    /// 1-based position.
    pub position: usize,
    /// Symbol in the first sequence (uppercased).
    pub reference: char,
    /// Symbol in the second sequence (uppercased).
    pub alternate: char,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos {}: {}->{}; ", self.position, self.reference, self.alternate)
    }
}

/// Substitutions found by [`detect_mutations`], in position order.
///
/// `Display` renders the query-result text: each mutation as
/// `"Pos {i}: {from}->{to}; "`, or [`NO_MUTATIONS`] when there are none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationRecord {
    mutations: Vec<Mutation>,
    compared: usize,
    length_mismatch: bool,
}

impl MutationRecord {
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mutation> {
        self.mutations.iter()
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    /// Number of positions compared (`min(len1, len2)`).
    pub fn compared_length(&self) -> usize {
        self.compared
    }

    /// Whether the inputs differ in length beyond the compared region.
    pub fn has_length_mismatch(&self) -> bool {
        self.length_mismatch
    }

    pub fn into_mutations(self) -> Vec<Mutation> {
        self.mutations
    }
}

impl fmt::Display for MutationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mutations.is_empty() {
            return f.write_str(NO_MUTATIONS);
        }
        for m in &self.mutations {
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a MutationRecord {
    type Item = &'a Mutation;
    type IntoIter = std::slice::Iter<'a, Mutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.mutations.iter()
    }
}

/// Report every position where `seq1` and `seq2` differ.
///
/// Works on any alphabet; comparison ignores case. Each byte is one symbol;
/// use [`detect_symbol_mutations`] for text that may hold multi-byte
/// characters.
///
/// ```
/// use biocat_seq::detect_mutations;
///
/// let record = detect_mutations(b"ATCGATCG", b"GTCAATCG");
/// assert_eq!(record.to_string(), "Pos 1: A->G; Pos 4: G->A; ");
///
/// let same = detect_mutations(b"ATCG", b"ATCGTTTT");
/// assert_eq!(same.to_string(), "No mutations found");
/// assert!(same.has_length_mismatch());
/// ```
pub fn detect_mutations(seq1: &[u8], seq2: &[u8]) -> MutationRecord {
    scan(
        seq1.iter().map(|&b| char::from(b)),
        seq1.len(),
        seq2.iter().map(|&b| char::from(b)),
        seq2.len(),
    )
}

/// Like [`detect_mutations`], with positions counted in characters.
///
/// ```
/// use biocat_seq::detect_symbol_mutations;
///
/// let record = detect_symbol_mutations("\u{e9}A", "\u{e9}C");
/// assert_eq!(record.to_string(), "Pos 2: A->C; ");
/// ```
pub fn detect_symbol_mutations(seq1: &str, seq2: &str) -> MutationRecord {
    scan(
        seq1.chars(),
        seq1.chars().count(),
        seq2.chars(),
        seq2.chars().count(),
    )
}

/// Single-character uppercase. Characters whose uppercase form is longer
/// (`'\u{df}'` to `"SS"`) are kept as they are.
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn scan(
    seq1: impl Iterator<Item = char>,
    len1: usize,
    seq2: impl Iterator<Item = char>,
    len2: usize,
) -> MutationRecord {
    let compared = len1.min(len2);
    let length_mismatch = len1 != len2;
    if length_mismatch {
        log::debug!(
            "comparing first {} positions of sequences with lengths {} and {}",
            compared,
            len1,
            len2
        );
    }

    let mutations = seq1
        .zip(seq2)
        .enumerate()
        .filter_map(|(i, (a, b))| {
            let (a, b) = (fold_case(a), fold_case(b));
            (a != b).then(|| Mutation {
                position: i + 1,
                reference: a,
                alternate: b,
            })
        })
        .collect();

    MutationRecord {
        mutations,
        compared,
        length_mismatch,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn identity_law(seq in "[ACGTN]{0,200}") {
            let record = detect_mutations(seq.as_bytes(), seq.as_bytes());
            prop_assert_eq!(record.to_string(), NO_MUTATIONS);
        }

        #[test]
        fn tail_insensitive(
            a in "[ACGT]{0,100}",
            b in "[ACGT]{0,100}",
            tail in "[ACGTN]{0,50}",
        ) {
            let n = a.len().min(b.len());
            let short = &b.as_bytes()[..n];
            let mut longer = a.as_bytes().to_vec();
            let base = detect_mutations(&longer, short).to_string();
            longer.extend_from_slice(tail.as_bytes());
            prop_assert_eq!(detect_mutations(&longer, short).to_string(), base);
        }

        #[test]
        fn positions_ascending_and_in_range(a in "[ACGT]{0,100}", b in "[ACGT]{0,100}") {
            let record = detect_mutations(a.as_bytes(), b.as_bytes());
            let limit = a.len().min(b.len());
            let mut prev = 0;
            for m in &record {
                prop_assert!(m.position > prev && m.position <= limit);
                prop_assert_ne!(m.reference, m.alternate);
                prev = m.position;
            }
        }
    }
}
