//! Symbol composition of nucleotide and protein sequences.
//!
//! Counting is lenient: symbols outside the alphabet are tallied as
//! unrecognized but never raise an error. Every alphabet symbol is always
//! present in the result, zero-filled if absent.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use crate::alphabet::{Alphabet, DnaAlphabet, ProteinAlphabet};

/// Per-symbol counts over one alphabet.
#[derive(Clone, PartialEq, Eq)]
pub struct Composition<A: Alphabet> {
    counts: Vec<usize>,
    length: usize,
    _alphabet: PhantomData<A>,
}

/// Counts of `A`, `C`, `G`, `T`.
pub type NucleotideComposition = Composition<DnaAlphabet>;

/// Counts of the 20 standard amino acids.
pub type AminoAcidComposition = Composition<ProteinAlphabet>;

impl<A: Alphabet> Composition<A> {
    /// Count every symbol of `seq` in a single pass, ignoring case.
    pub fn from_sequence(seq: &[u8]) -> Self {
        let mut counts = vec![0usize; A::SYMBOLS.len()];
        for &b in seq {
            if let Some(i) = A::index(b.to_ascii_uppercase()) {
                counts[i] += 1;
            }
        }
        let composition = Self {
            counts,
            length: seq.len(),
            _alphabet: PhantomData,
        };
        let skipped = composition.unrecognized();
        if skipped > 0 {
            log::trace!(
                "{} composition skipped {} unrecognized symbols of {}",
                A::NAME,
                skipped,
                seq.len()
            );
        }
        composition
    }

    /// Count of one symbol (case-insensitive); 0 for symbols outside the alphabet.
    pub fn count(&self, symbol: u8) -> usize {
        A::index(symbol.to_ascii_uppercase()).map_or(0, |i| self.counts[i])
    }

    /// Counts in [`Alphabet::SYMBOLS`] order.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// `(symbol, count)` pairs in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        A::SYMBOLS
            .iter()
            .zip(&self.counts)
            .map(|(&s, &c)| (char::from(s), c))
    }

    /// Number of recognized symbols (sum of all counts).
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Raw input length, recognized or not.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of symbols that fell outside the alphabet.
    pub fn unrecognized(&self) -> usize {
        self.length - self.total()
    }

    /// Fraction of the raw length taken by `symbol`; `None` for empty input.
    pub fn fraction(&self, symbol: u8) -> Option<f64> {
        (self.length > 0).then(|| self.count(symbol) as f64 / self.length as f64)
    }

    /// Percentage of the raw length for every symbol; empty for empty input.
    pub fn percentages(&self) -> BTreeMap<char, f64> {
        if self.length == 0 {
            return BTreeMap::new();
        }
        let len = self.length as f64;
        self.iter()
            .map(|(s, c)| (s, c as f64 / len * 100.0))
            .collect()
    }

    /// Mapping from every alphabet symbol to its count.
    pub fn to_map(&self) -> BTreeMap<char, usize> {
        self.iter().collect()
    }
}

impl NucleotideComposition {
    /// Overall GC fraction over the raw length; `None` for empty input.
    pub fn gc_content(&self) -> Option<f64> {
        (self.length > 0).then(|| (self.count(b'G') + self.count(b'C')) as f64 / self.length as f64)
    }
}

impl<A: Alphabet> fmt::Debug for Composition<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composition")
            .field("alphabet", &A::NAME)
            .field("counts", &self.to_map())
            .field("length", &self.length)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for Composition<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (symbol, count) in self.iter() {
            map.serialize_entry(&symbol, &count)?;
        }
        map.end()
    }
}

/// Reads the symbol-to-count object written by `Serialize`. Missing symbols
/// count zero and symbols outside the alphabet are rejected. The raw length
/// is not part of the object, so it is taken to be the recognized total.
#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for Composition<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CountsVisitor<A>(PhantomData<A>);

        impl<'de, A: Alphabet> serde::de::Visitor<'de> for CountsVisitor<A> {
            type Value = Composition<A>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of {} symbols to counts", A::NAME)
            }

            fn visit_map<M: serde::de::MapAccess<'de>>(self, mut map: M) -> std::result::Result<Self::Value, M::Error> {
                let mut counts = vec![0usize; A::SYMBOLS.len()];
                while let Some((symbol, count)) = map.next_entry::<char, usize>()? {
                    let index = u8::try_from(symbol)
                        .ok()
                        .and_then(|b| A::index(b.to_ascii_uppercase()))
                        .ok_or_else(|| {
                            serde::de::Error::custom(format!("{symbol:?} is not a {} symbol", A::NAME))
                        })?;
                    counts[index] = count;
                }
                let length = counts.iter().sum();
                Ok(Composition {
                    counts,
                    length,
                    _alphabet: PhantomData,
                })
            }
        }

        deserializer.deserialize_map(CountsVisitor(PhantomData))
    }
}

/// Count `A`, `C`, `G`, `T` in a DNA sequence, ignoring case and other symbols.
///
/// ```
/// use biocat_seq::count_nucleotides;
///
/// let comp = count_nucleotides(b"ATCGATCG");
/// assert_eq!(comp.count(b'A'), 2);
/// assert_eq!(comp.count(b'G'), 2);
/// assert_eq!(comp.total(), 8);
/// ```
pub fn count_nucleotides(seq: &[u8]) -> NucleotideComposition {
    Composition::from_sequence(seq)
}

/// Count the 20 standard residues in a protein sequence.
///
/// `X`, `*`, gaps and other symbols are excluded from the tallies.
pub fn count_amino_acids(seq: &[u8]) -> AminoAcidComposition {
    Composition::from_sequence(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nucleotides_basic() {
        let comp = count_nucleotides(b"ATCGATCG");
        assert_eq!(comp.counts(), &[2, 2, 2, 2]);
        assert_eq!(comp.length(), 8);
    }

    #[test]
    fn nucleotides_case_insensitive() {
        let comp = count_nucleotides(b"aaTTcG");
        assert_eq!(comp.count(b'A'), 2);
        assert_eq!(comp.count(b't'), 2);
        assert_eq!(comp.count(b'C'), 1);
        assert_eq!(comp.count(b'G'), 1);
    }

    #[test]
    fn nucleotides_ignore_other_symbols() {
        let comp = count_nucleotides(b"ANNGC-T");
        assert_eq!(comp.total(), 4);
        assert_eq!(comp.unrecognized(), 3);
        assert_eq!(comp.count(b'N'), 0);
    }

    #[test]
    fn nucleotides_empty_all_zero() {
        let comp = count_nucleotides(b"");
        let map = comp.to_map();
        assert_eq!(map.len(), 4);
        assert!(map.values().all(|&c| c == 0));
        assert_eq!(comp.gc_content(), None);
        assert!(comp.percentages().is_empty());
    }

    #[test]
    fn nucleotide_map_keys_stable() {
        let map = count_nucleotides(b"GGG").to_map();
        assert_eq!(map.keys().collect::<String>(), "ACGT");
        assert_eq!(map[&'G'], 3);
        assert_eq!(map[&'A'], 0);
    }

    #[test]
    fn gc_content_uses_raw_length() {
        let comp = count_nucleotides(b"GCNN");
        assert!((comp.gc_content().unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn percentages_include_unrecognized_in_denominator() {
        let pct = count_nucleotides(b"AANN").percentages();
        assert!((pct[&'A'] - 50.0).abs() < 1e-12);
        assert_eq!(pct[&'T'], 0.0);
    }

    #[test]
    fn amino_acids_each_once() {
        let comp = count_amino_acids(b"ACDEFGHIKLMNPQRSTVWY");
        assert_eq!(comp.length(), 20);
        assert!(comp.counts().iter().all(|&c| c == 1));
    }

    #[test]
    fn amino_acids_exclude_x_stop_gap() {
        let comp = count_amino_acids(b"MKX*-k");
        assert_eq!(comp.count(b'M'), 1);
        assert_eq!(comp.count(b'K'), 2);
        assert_eq!(comp.count(b'X'), 0);
        assert_eq!(comp.total(), 3);
        assert_eq!(comp.unrecognized(), 3);
        assert_eq!(comp.to_map().len(), 20);
    }

    #[test]
    fn fraction_of_symbol() {
        let comp = count_amino_acids(b"AAAL");
        assert!((comp.fraction(b'A').unwrap() - 0.75).abs() < 1e-12);
        assert_eq!(count_amino_acids(b"").fraction(b'A'), None);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nucleotide_total_matches_acgt_chars(seq in proptest::collection::vec(any::<u8>(), 0..300)) {
            let comp = count_nucleotides(&seq);
            let expected = seq
                .iter()
                .filter(|b| matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T'))
                .count();
            prop_assert_eq!(comp.total(), expected);
            prop_assert_eq!(comp.total() + comp.unrecognized(), seq.len());
        }

        #[test]
        fn amino_acid_total_never_exceeds_length(seq in "[A-Za-z*X-]{0,200}") {
            let comp = count_amino_acids(seq.as_bytes());
            prop_assert!(comp.total() <= seq.len());
            prop_assert_eq!(comp.to_map().len(), 20);
        }
    }
}
