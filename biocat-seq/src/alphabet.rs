//! Alphabet definitions and the alphabet validator.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the canonical uppercase symbols for a sequence kind. Symbols are
//! always compared after ASCII uppercasing.
//!
//! The analysis functions in this crate are lenient: unrecognized symbols are
//! skipped, never rejected. Callers that want strict input call
//! [`invalid_positions`] or [`validate_strict`] themselves.

use std::fmt;

use biocat_core::{BiocatError, Result};

/// Trait for biological sequence alphabets.
///
/// `SYMBOLS` fixes both the valid set and the tally order used by
/// [`Composition`](crate::composition::Composition).
pub trait Alphabet:
    fmt::Debug + Clone + Copy + PartialEq + Eq + Send + Sync + 'static
{
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// Unit used when reporting lengths ("bp", "aa").
    const UNIT: &'static str;

    /// The runtime kind this alphabet corresponds to.
    const KIND: SequenceKind;

    /// The valid uppercase symbols, in tally order.
    const SYMBOLS: &'static [u8];

    /// Position of an uppercase symbol in [`Self::SYMBOLS`].
    fn index(b: u8) -> Option<usize>;

    /// Check whether a byte is valid, ignoring case.
    fn is_valid(b: u8) -> bool {
        Self::index(b.to_ascii_uppercase()).is_some()
    }
}

/// DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const UNIT: &'static str = "bp";
    const KIND: SequenceKind = SequenceKind::Dna;
    const SYMBOLS: &'static [u8] = b"ACGT";

    #[inline]
    fn index(b: u8) -> Option<usize> {
        match b {
            b'A' => Some(0),
            b'C' => Some(1),
            b'G' => Some(2),
            b'T' => Some(3),
            _ => None,
        }
    }
}

/// Protein alphabet: the 20 standard amino acids.
///
/// `X`, `*`, gaps and the rarer codes (`B`, `Z`, `J`, `U`, `O`) are not part
/// of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "Protein";
    const UNIT: &'static str = "aa";
    const KIND: SequenceKind = SequenceKind::Protein;
    const SYMBOLS: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY";

    #[inline]
    fn index(b: u8) -> Option<usize> {
        match b {
            b'A' => Some(0),
            b'C' => Some(1),
            b'D' => Some(2),
            b'E' => Some(3),
            b'F' => Some(4),
            b'G' => Some(5),
            b'H' => Some(6),
            b'I' => Some(7),
            b'K' => Some(8),
            b'L' => Some(9),
            b'M' => Some(10),
            b'N' => Some(11),
            b'P' => Some(12),
            b'Q' => Some(13),
            b'R' => Some(14),
            b'S' => Some(15),
            b'T' => Some(16),
            b'V' => Some(17),
            b'W' => Some(18),
            b'Y' => Some(19),
            _ => None,
        }
    }
}

/// Declared kind of a raw sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceKind {
    Dna,
    Protein,
}

impl SequenceKind {
    /// Alphabet name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            SequenceKind::Dna => DnaAlphabet::NAME,
            SequenceKind::Protein => ProteinAlphabet::NAME,
        }
    }

    /// Valid uppercase symbols for this kind.
    pub fn symbols(self) -> &'static [u8] {
        match self {
            SequenceKind::Dna => DnaAlphabet::SYMBOLS,
            SequenceKind::Protein => ProteinAlphabet::SYMBOLS,
        }
    }

    /// Check a single byte against this kind's alphabet, ignoring case.
    pub fn is_valid_symbol(self, b: u8) -> bool {
        match self {
            SequenceKind::Dna => DnaAlphabet::is_valid(b),
            SequenceKind::Protein => ProteinAlphabet::is_valid(b),
        }
    }

    /// Infer the kind of a raw sequence.
    ///
    /// DNA wins when every symbol is a base, since `ACGT` are also residue
    /// codes. Returns `None` for empty input or when neither alphabet covers
    /// every symbol.
    ///
    /// ```
    /// use biocat_seq::SequenceKind;
    ///
    /// assert_eq!(SequenceKind::infer(b"acgt"), Some(SequenceKind::Dna));
    /// assert_eq!(SequenceKind::infer(b"MKWV"), Some(SequenceKind::Protein));
    /// assert_eq!(SequenceKind::infer(b"AC-GT"), None);
    /// ```
    pub fn infer(seq: &[u8]) -> Option<SequenceKind> {
        if seq.is_empty() {
            return None;
        }
        [SequenceKind::Dna, SequenceKind::Protein]
            .into_iter()
            .find(|kind| seq.iter().all(|&b| kind.is_valid_symbol(b)))
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Validator ───────────────────────────────────────────────────

/// Positions (0-based, ascending) whose symbol is outside `kind`'s alphabet.
///
/// Empty when the sequence is fully valid. The input is not modified.
///
/// ```
/// use biocat_seq::alphabet::{invalid_positions, SequenceKind};
///
/// assert_eq!(invalid_positions(b"ACNGTX", SequenceKind::Dna), vec![2, 5]);
/// assert!(invalid_positions(b"acgt", SequenceKind::Dna).is_empty());
/// ```
pub fn invalid_positions(seq: &[u8], kind: SequenceKind) -> Vec<usize> {
    seq.iter()
        .enumerate()
        .filter(|&(_, &b)| !kind.is_valid_symbol(b))
        .map(|(i, _)| i)
        .collect()
}

/// Whether every symbol of `seq` belongs to `kind`'s alphabet.
pub fn is_valid(seq: &[u8], kind: SequenceKind) -> bool {
    seq.iter().all(|&b| kind.is_valid_symbol(b))
}

/// Strict validation: fail on the first symbol outside `kind`'s alphabet.
///
/// # Errors
///
/// Returns [`BiocatError::InvalidSymbol`] naming the first offending position.
pub fn validate_strict(seq: &[u8], kind: SequenceKind) -> Result<()> {
    match seq.iter().position(|&b| !kind.is_valid_symbol(b)) {
        None => Ok(()),
        Some(position) => Err(BiocatError::InvalidSymbol {
            alphabet: kind.name(),
            symbol: char::from(seq[position]),
            position,
        }),
    }
}

/// Trim surrounding ASCII whitespace and uppercase.
///
/// This is the clean-up the query console applies to pasted input before
/// handing it to [`validate_strict`].
pub fn normalize(seq: &[u8]) -> Vec<u8> {
    seq.trim_ascii().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_accepts_acgt_any_case() {
        for &b in b"ACGTacgt" {
            assert!(DnaAlphabet::is_valid(b), "DNA should accept {}", b as char);
        }
    }

    #[test]
    fn dna_rejects_iupac_and_u() {
        for &b in b"NRYUX-" {
            assert!(!DnaAlphabet::is_valid(b), "DNA should reject {}", b as char);
        }
    }

    #[test]
    fn protein_accepts_standard_twenty() {
        for &b in ProteinAlphabet::SYMBOLS {
            assert!(
                ProteinAlphabet::is_valid(b),
                "Protein should accept {}",
                b as char
            );
            assert!(ProteinAlphabet::is_valid(b.to_ascii_lowercase()));
        }
    }

    #[test]
    fn protein_rejects_nonstandard() {
        for &b in b"XBZJUO*-1 " {
            assert!(!ProteinAlphabet::is_valid(b), "Protein should reject {}", b as char);
        }
    }

    #[test]
    fn index_matches_symbol_order() {
        for (i, &b) in ProteinAlphabet::SYMBOLS.iter().enumerate() {
            assert_eq!(ProteinAlphabet::index(b), Some(i));
        }
        for (i, &b) in DnaAlphabet::SYMBOLS.iter().enumerate() {
            assert_eq!(DnaAlphabet::index(b), Some(i));
        }
    }

    #[test]
    fn invalid_positions_reports_all() {
        assert_eq!(invalid_positions(b"MKX*W", SequenceKind::Protein), vec![2, 3]);
        assert_eq!(invalid_positions(b"", SequenceKind::Dna), Vec::<usize>::new());
    }

    #[test]
    fn strict_reports_first_offender() {
        let err = validate_strict(b"ACGNNT", SequenceKind::Dna).unwrap_err();
        match err {
            BiocatError::InvalidSymbol { alphabet, symbol, position } => {
                assert_eq!(alphabet, "DNA");
                assert_eq!(symbol, 'N');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(validate_strict(b"acgt", SequenceKind::Dna).is_ok());
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize(b"  atgc\n"), b"ATGC");
        assert_eq!(normalize(b""), b"");
    }

    #[test]
    fn infer_prefers_dna() {
        assert_eq!(SequenceKind::infer(b"GATTACA"), Some(SequenceKind::Dna));
        assert_eq!(SequenceKind::infer(b"MEEPQSDPSV"), Some(SequenceKind::Protein));
        assert_eq!(SequenceKind::infer(b""), None);
        assert_eq!(SequenceKind::infer(b"MK*"), None);
    }
}
