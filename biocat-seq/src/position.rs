//! Per-position base frequencies across aligned DNA sequences.
//!
//! The matrix behind a sequence logo. Its width is the length of the first
//! sequence; shorter sequences contribute only to the positions they reach
//! and longer ones are cut off. A column's depth counts every contributing
//! symbol, so `N` and gaps dilute the `A`/`C`/`G`/`T` frequencies.

use crate::alphabet::{Alphabet, DnaAlphabet};

/// Base frequencies per alignment column, in `ACGT` order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionFrequencies {
    columns: Vec<[f64; 4]>,
    depths: Vec<usize>,
}

impl PositionFrequencies {
    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Frequencies at `pos` in `ACGT` order.
    pub fn column(&self, pos: usize) -> Option<&[f64; 4]> {
        self.columns.get(pos)
    }

    /// Frequency of `base` (case-insensitive) at `pos`; 0 for non-ACGT
    /// bases and positions past the end.
    pub fn frequency(&self, pos: usize, base: u8) -> f64 {
        match (self.columns.get(pos), DnaAlphabet::index(base.to_ascii_uppercase())) {
            (Some(column), Some(i)) => column[i],
            _ => 0.0,
        }
    }

    /// Number of sequences reaching `pos`.
    pub fn depth(&self, pos: usize) -> usize {
        self.depths.get(pos).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, [f64; 4]> {
        self.columns.iter()
    }
}

/// Build the position frequency matrix of a set of aligned sequences.
///
/// ```
/// use biocat_seq::position_frequencies;
///
/// let pfm = position_frequencies(&[b"ACGT", b"ACGA"]);
/// assert_eq!(pfm.len(), 4);
/// assert_eq!(pfm.frequency(0, b'A'), 1.0);
/// assert_eq!(pfm.frequency(3, b'T'), 0.5);
/// ```
pub fn position_frequencies(seqs: &[&[u8]]) -> PositionFrequencies {
    let Some(first) = seqs.first() else {
        return PositionFrequencies::default();
    };
    let width = first.len();
    let mut counts = vec![[0usize; 4]; width];
    let mut depths = vec![0usize; width];

    for seq in seqs {
        for (pos, &b) in seq.iter().take(width).enumerate() {
            depths[pos] += 1;
            if let Some(i) = DnaAlphabet::index(b.to_ascii_uppercase()) {
                counts[pos][i] += 1;
            }
        }
    }
    log::debug!("position frequencies over {} sequences, {} columns", seqs.len(), width);

    let columns = counts
        .iter()
        .zip(&depths)
        .map(|(c, &depth)| {
            if depth == 0 {
                return [0.0; 4];
            }
            let d = depth as f64;
            [c[0] as f64 / d, c[1] as f64 / d, c[2] as f64 / d, c[3] as f64 / d]
        })
        .collect();

    PositionFrequencies { columns, depths }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn acgt_columns_sum_to_one(seqs in proptest::collection::vec("[ACGTacgt]{1,40}", 1..20)) {
            let refs: Vec<&[u8]> = seqs.iter().map(|s| s.as_bytes()).collect();
            let pfm = position_frequencies(&refs);
            prop_assert_eq!(pfm.len(), seqs[0].len());
            for column in pfm.iter() {
                let sum: f64 = column.iter().sum();
                prop_assert!((sum - 1.0).abs() < 1e-9);
            }
        }

        #[test]
        fn mixed_columns_never_exceed_one(seqs in proptest::collection::vec("[ACGTN-]{1,40}", 1..20)) {
            let refs: Vec<&[u8]> = seqs.iter().map(|s| s.as_bytes()).collect();
            for column in position_frequencies(&refs).iter() {
                prop_assert!(column.iter().sum::<f64>() <= 1.0 + 1e-9);
            }
        }
    }
}
