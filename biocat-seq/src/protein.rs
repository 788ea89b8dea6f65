//! Whole-sequence physicochemical properties of proteins.
//!
//! - **Molecular weight**: average residue masses minus one water per peptide bond
//! - **Isoelectric point**: bisection on the Henderson-Hasselbalch net charge
//! - **Summary**: [`ProteinProperties`] bundles both with length and GRAVY
//!
//! Like the rest of the crate these are lenient: input is uppercased and
//! anything outside the 20 standard residues (`X`, `*`, gaps) is dropped
//! before computing. A sequence with no standard residue has no properties.

use crate::alphabet::{Alphabet, ProteinAlphabet};
use crate::hydrophobicity::{gravy, HydrophobicityScale};

// ── Residue masses ──────────────────────────────────────────────

/// Average free amino-acid masses (Da), in `ProteinAlphabet::SYMBOLS` order.
const RESIDUE_MASS: [f64; 20] = [
    89.09,  // A
    121.16, // C
    133.10, // D
    147.13, // E
    165.19, // F
    75.03,  // G
    155.16, // H
    131.17, // I
    146.19, // K
    131.17, // L
    149.21, // M
    132.12, // N
    115.13, // P
    146.15, // Q
    174.20, // R
    105.09, // S
    119.12, // T
    117.15, // V
    204.23, // W
    181.19, // Y
];

/// Water lost per peptide bond.
const WATER_MASS: f64 = 18.015;

// ── pKa values (EMBOSS) ─────────────────────────────────────────

const PKA_NTERM: f64 = 9.69;
const PKA_CTERM: f64 = 2.34;
const PKA_D: f64 = 3.65;
const PKA_E: f64 = 4.25;
const PKA_C: f64 = 8.18;
const PKA_Y: f64 = 10.07;
const PKA_H: f64 = 6.00;
const PKA_K: f64 = 10.53;
const PKA_R: f64 = 12.48;

/// Uppercased standard residues of `seq`, in order.
fn standard_residues(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(u8::to_ascii_uppercase)
        .filter(|&aa| ProteinAlphabet::is_valid(aa))
        .collect()
}

fn mass_of(residues: &[u8]) -> Option<f64> {
    if residues.is_empty() {
        return None;
    }
    let sum: f64 = residues
        .iter()
        .filter_map(|&aa| ProteinAlphabet::index(aa))
        .map(|i| RESIDUE_MASS[i])
        .sum();
    Some(sum - (residues.len() - 1) as f64 * WATER_MASS)
}

/// Net charge at `ph` of uppercased standard residues.
fn net_charge(residues: &[u8], ph: f64) -> f64 {
    let positive = |pka: f64| 1.0 / (1.0 + 10_f64.powf(ph - pka));
    let negative = |pka: f64| 1.0 / (1.0 + 10_f64.powf(pka - ph));

    let mut charge = positive(PKA_NTERM) - negative(PKA_CTERM);
    for &aa in residues {
        charge += match aa {
            b'D' => -negative(PKA_D),
            b'E' => -negative(PKA_E),
            b'C' => -negative(PKA_C),
            b'Y' => -negative(PKA_Y),
            b'H' => positive(PKA_H),
            b'K' => positive(PKA_K),
            b'R' => positive(PKA_R),
            _ => 0.0,
        };
    }
    charge
}

fn pi_of(residues: &[u8]) -> Option<f64> {
    if residues.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0.0_f64, 14.0_f64);
    for _ in 0..100 {
        let mid = (lo + hi) / 2.0;
        let charge = net_charge(residues, mid);
        if charge.abs() < 0.001 {
            return Some(mid);
        }
        if charge > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Some((lo + hi) / 2.0)
}

/// Average molecular weight in daltons.
///
/// ```
/// use biocat_seq::molecular_weight;
///
/// let mw = molecular_weight(b"AG").unwrap();
/// assert!((mw - (89.09 + 75.03 - 18.015)).abs() < 1e-9);
/// assert_eq!(molecular_weight(b"X*"), None);
/// ```
pub fn molecular_weight(seq: &[u8]) -> Option<f64> {
    mass_of(&standard_residues(seq))
}

/// Isoelectric point: the pH at which the net charge is zero.
///
/// Bisection over pH 0-14 with EMBOSS pKa values, stopping once
/// `|charge| < 0.001`.
///
/// ```
/// use biocat_seq::isoelectric_point;
///
/// assert!(isoelectric_point(b"DDDDD").unwrap() < 4.0);
/// assert!(isoelectric_point(b"KKKKK").unwrap() > 9.0);
/// ```
pub fn isoelectric_point(seq: &[u8]) -> Option<f64> {
    pi_of(&standard_residues(seq))
}

/// Summary properties of one protein sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProteinProperties {
    /// Number of standard residues.
    pub length: usize,
    /// Average molecular weight (Da).
    pub molecular_weight: f64,
    /// Isoelectric point.
    pub isoelectric_point: f64,
    /// Kyte-Doolittle grand average of hydropathy.
    pub gravy: f64,
}

impl ProteinProperties {
    /// `None` when `seq` holds no standard residue.
    pub fn from_sequence(seq: &[u8]) -> Option<Self> {
        let residues = standard_residues(seq);
        Some(Self {
            length: residues.len(),
            molecular_weight: mass_of(&residues)?,
            isoelectric_point: pi_of(&residues)?,
            gravy: gravy(&residues, &HydrophobicityScale::KyteDoolittle)?,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pi_within_ph_range(seq in "[ACDEFGHIKLMNPQRSTVWY]{1,100}") {
            let pi = isoelectric_point(seq.as_bytes()).unwrap();
            prop_assert!((0.0..=14.0).contains(&pi));
        }

        #[test]
        fn weight_grows_with_each_residue(seq in "[ACDEFGHIKLMNPQRSTVWY]{1,100}", extra in "[ACDEFGHIKLMNPQRSTVWY]") {
            let base = molecular_weight(seq.as_bytes()).unwrap();
            let longer = molecular_weight(format!("{seq}{extra}").as_bytes()).unwrap();
            prop_assert!(longer > base);
        }
    }
}
