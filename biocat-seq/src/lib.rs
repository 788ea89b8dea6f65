//! Sequence analysis for the biocat genomic/proteomic database.
//!
//! Pure, stateless functions over DNA and protein sequences. Every function
//! takes raw bytes, treats them case-insensitively and is lenient about
//! unrecognized symbols; strict checking is available through the
//! [`alphabet`] validator and the validated sequence types.
//!
//! - **Alphabets**: [`DnaAlphabet`], [`ProteinAlphabet`], [`SequenceKind`]
//! - **Sequences**: [`DnaSequence`], [`ProteinSequence`]
//! - **Composition**: [`count_nucleotides`], [`count_amino_acids`]
//! - **Classification**: [`classify_sequence`] (start-codon heuristic)
//! - **GC content**: [`gc_content_windows`]
//! - **Mutations**: [`detect_mutations`] (positional diff, no gaps)
//! - **Hydrophobicity**: [`hydrophobicity_profile`], [`gravy`]
//! - **Protein properties**: [`molecular_weight`], [`isoelectric_point`], [`ProteinProperties`]
//! - **Alignments**: [`position_frequencies`] (sequence-logo matrix)
//!
//! # Example
//!
//! ```
//! use biocat_seq::{classify_sequence, count_nucleotides, detect_mutations, Classification};
//!
//! assert_eq!(classify_sequence(b"ccATGaa"), Classification::LikelyGene);
//!
//! let comp = count_nucleotides(b"ATCGATCG");
//! assert_eq!(comp.to_map()[&'A'], 2);
//!
//! let record = detect_mutations(b"ATCGATCG", b"ATCGATCC");
//! assert_eq!(record.to_string(), "Pos 8: G->C; ");
//! ```

pub mod alphabet;
pub mod classify;
pub mod composition;
pub mod gc;
pub mod hydrophobicity;
pub mod mutation;
pub mod position;
pub mod protein;
pub mod seq;
pub mod types;
pub mod window;

// Re-export alphabet types
pub use alphabet::{Alphabet, DnaAlphabet, ProteinAlphabet, SequenceKind};

// Re-export the generic sequence type and its aliases
pub use seq::ValidatedSeq;
pub use types::{DnaSequence, ProteinSequence};

// Re-export analysis entry points
pub use classify::{classify, classify_sequence, Classification, ClassificationResult};
pub use composition::{
    count_amino_acids, count_nucleotides, AminoAcidComposition, Composition, NucleotideComposition,
};
pub use gc::{gc_content, gc_content_windows};
pub use hydrophobicity::{gravy, hydrophobicity_profile, HydrophobicityScale};
pub use mutation::{
    detect_mutations, detect_symbol_mutations, Mutation, MutationRecord, NO_MUTATIONS,
};
pub use position::{position_frequencies, PositionFrequencies};
pub use protein::{isoelectric_point, molecular_weight, ProteinProperties};
pub use window::{WindowParams, WindowProfile, WindowValue};
