//! Start-codon heuristic for labelling DNA sequences.
//!
//! A sequence is a likely gene when `ATG` occurs anywhere in it, at any
//! offset and in any frame. This is a presence test, not ORF detection.

use std::fmt;

/// The start codon searched for.
pub const START_CODON: &[u8; 3] = b"ATG";

/// Label assigned by [`classify_sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    LikelyGene,
    Unknown,
}

impl Classification {
    /// Text label as shown in query results.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::LikelyGene => "Likely Gene",
            Classification::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label together with the sequence it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationResult<'a> {
    pub label: Classification,
    pub sequence: &'a [u8],
}

/// Whether `ATG` occurs anywhere in `seq`, ignoring case.
pub fn contains_start_codon(seq: &[u8]) -> bool {
    seq.windows(START_CODON.len())
        .any(|w| w.eq_ignore_ascii_case(START_CODON))
}

/// Classify a DNA sequence by start-codon presence.
///
/// ```
/// use biocat_seq::{classify_sequence, Classification};
///
/// assert_eq!(classify_sequence(b"ATGGCATAG"), Classification::LikelyGene);
/// assert_eq!(classify_sequence(b"GCTAGC"), Classification::Unknown);
/// assert_eq!(classify_sequence(b""), Classification::Unknown);
/// ```
pub fn classify_sequence(seq: &[u8]) -> Classification {
    if contains_start_codon(seq) {
        Classification::LikelyGene
    } else {
        Classification::Unknown
    }
}

/// Like [`classify_sequence`], keeping a reference to the input.
pub fn classify(seq: &[u8]) -> ClassificationResult<'_> {
    ClassificationResult {
        label: classify_sequence(seq),
        sequence: seq,
    }
}
