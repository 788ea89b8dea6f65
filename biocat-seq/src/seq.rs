//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction uppercases and validates every byte,
//! so the inner data is always uppercase and `Deref<Target=[u8]>` can be
//! handed straight to the analysis functions.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use biocat_core::{BiocatError, Sequence, Summarizable};

use crate::alphabet::{Alphabet, SequenceKind};

/// A strictly validated biological sequence parameterized by its alphabet.
///
/// `ValidatedSeq<DnaAlphabet>` is a DNA sequence, `ValidatedSeq<ProteinAlphabet>`
/// a protein. The inner bytes are always uppercase.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`BiocatError::InvalidSymbol`] for the first byte that is not in
    /// the alphabet after uppercasing.
    pub fn new(bytes: impl AsRef<[u8]>) -> biocat_core::Result<Self> {
        let data = bytes.as_ref().to_ascii_uppercase();
        if let Some(position) = data.iter().position(|&b| A::index(b).is_none()) {
            return Err(BiocatError::InvalidSymbol {
                alphabet: A::NAME,
                symbol: char::from(data[position]),
                position,
            });
        }
        Ok(Self {
            data,
            _alphabet: PhantomData,
        })
    }

    /// The declared kind of this sequence.
    pub fn kind(&self) -> SequenceKind {
        A::KIND
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> TryFrom<&str> for ValidatedSeq<A> {
    type Error = BiocatError;

    fn try_from(s: &str) -> biocat_core::Result<Self> {
        Self::new(s)
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        // Validated bytes are ASCII.
        let preview = String::from_utf8_lossy(&self.data[..preview_len]);
        let ellipsis = if self.data.len() > 20 { "..." } else { "" };
        format!(
            "{} sequence ({} {}): {}{}",
            A::NAME,
            self.data.len(),
            A::UNIT,
            preview,
            ellipsis
        )
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, String::from_utf8_lossy(&self.data))
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}
