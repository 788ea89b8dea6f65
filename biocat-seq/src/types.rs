//! Concrete sequence type aliases and their analysis shortcuts.
//!
//! - [`DnaSequence`]: composition, classification, GC content
//! - [`ProteinSequence`]: composition, hydrophobicity profile, GRAVY,
//!   physicochemical properties
//!
//! The methods delegate to the free functions, which also accept raw
//! unvalidated bytes.

use biocat_core::Result;

use crate::alphabet::{DnaAlphabet, ProteinAlphabet};
use crate::classify::{classify_sequence, Classification};
use crate::composition::{count_amino_acids, count_nucleotides, AminoAcidComposition, NucleotideComposition};
use crate::gc;
use crate::hydrophobicity::{self, HydrophobicityScale};
use crate::protein::{self, ProteinProperties};
use crate::seq::ValidatedSeq;
use crate::window::{WindowParams, WindowProfile};

/// A validated DNA sequence (`ACGT`).
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated protein sequence (20 standard amino acids).
pub type ProteinSequence = ValidatedSeq<ProteinAlphabet>;

impl DnaSequence {
    /// Base counts.
    pub fn composition(&self) -> NucleotideComposition {
        count_nucleotides(self)
    }

    /// Start-codon classification.
    pub fn classify(&self) -> Classification {
        classify_sequence(self)
    }

    /// GC content as a fraction; `None` for an empty sequence.
    pub fn gc_content(&self) -> Option<f64> {
        gc::gc_content(self)
    }

    /// GC content per window.
    pub fn gc_windows(&self, params: WindowParams) -> Result<WindowProfile> {
        gc::gc_content_windows(self, params)
    }
}

impl ProteinSequence {
    /// Residue counts.
    pub fn composition(&self) -> AminoAcidComposition {
        count_amino_acids(self)
    }

    /// Mean hydrophobicity per window.
    pub fn hydrophobicity_profile(
        &self,
        scale: &HydrophobicityScale,
        params: WindowParams,
    ) -> Result<WindowProfile> {
        hydrophobicity::hydrophobicity_profile(self, scale, params)
    }

    /// Grand average of hydropathy; `None` for an empty sequence.
    pub fn gravy(&self, scale: &HydrophobicityScale) -> Option<f64> {
        hydrophobicity::gravy(self, scale)
    }

    /// Average molecular weight (Da); `None` for an empty sequence.
    pub fn molecular_weight(&self) -> Option<f64> {
        protein::molecular_weight(self)
    }

    /// Isoelectric point; `None` for an empty sequence.
    pub fn isoelectric_point(&self) -> Option<f64> {
        protein::isoelectric_point(self)
    }

    /// Length, weight, pI and GRAVY together.
    pub fn properties(&self) -> Option<ProteinProperties> {
        ProteinProperties::from_sequence(self)
    }
}
