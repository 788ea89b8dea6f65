//! Hydrophobicity profiles of protein sequences.
//!
//! Each window's value is the mean scale value of the residues it holds.
//! Residues outside the 20 standard amino acids are left out of both the
//! sum and the count, so a window with no standard residue has no value
//! (`None`), never zero.

use biocat_core::Result;

use crate::alphabet::{Alphabet, ProteinAlphabet};
use crate::window::{WindowParams, WindowProfile};

// ── Scales ──────────────────────────────────────────────────────

/// Kyte-Doolittle (1982) hydropathy values, in `ProteinAlphabet::SYMBOLS` order.
const KYTE_DOOLITTLE: [f64; 20] = [
    1.8,  // A
    2.5,  // C
    -3.5, // D
    -3.5, // E
    2.8,  // F
    -0.4, // G
    -3.2, // H
    4.5,  // I
    -3.9, // K
    3.8,  // L
    1.9,  // M
    -3.5, // N
    -1.6, // P
    -3.5, // Q
    -4.5, // R
    -0.8, // S
    -0.7, // T
    4.2,  // V
    -0.9, // W
    -1.3, // Y
];

/// Hopp-Woods (1981) hydrophilicity values, in `ProteinAlphabet::SYMBOLS` order.
const HOPP_WOODS: [f64; 20] = [
    -0.5, // A
    -1.0, // C
    3.0,  // D
    3.0,  // E
    -2.5, // F
    0.0,  // G
    -0.5, // H
    -1.8, // I
    3.0,  // K
    -1.8, // L
    -1.3, // M
    0.2,  // N
    0.0,  // P
    0.2,  // Q
    3.0,  // R
    0.3,  // S
    -0.4, // T
    -1.5, // V
    -3.4, // W
    -2.3, // Y
];

/// Choice of hydrophobicity scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HydrophobicityScale {
    /// Kyte-Doolittle (1982): positive = hydrophobic.
    #[default]
    KyteDoolittle,
    /// Hopp-Woods (1981): positive = hydrophilic.
    HoppWoods,
    /// Caller-supplied values in `ACDEFGHIKLMNPQRSTVWY` order.
    Custom([f64; 20]),
}

impl HydrophobicityScale {
    pub fn name(&self) -> &'static str {
        match self {
            HydrophobicityScale::KyteDoolittle => "Kyte-Doolittle",
            HydrophobicityScale::HoppWoods => "Hopp-Woods",
            HydrophobicityScale::Custom(_) => "custom",
        }
    }

    /// The 20 scale values in `ProteinAlphabet::SYMBOLS` order.
    pub fn table(&self) -> &[f64; 20] {
        match self {
            HydrophobicityScale::KyteDoolittle => &KYTE_DOOLITTLE,
            HydrophobicityScale::HoppWoods => &HOPP_WOODS,
            HydrophobicityScale::Custom(values) => values,
        }
    }

    /// Scale value of one residue (case-insensitive); `None` if non-standard.
    pub fn value(&self, residue: u8) -> Option<f64> {
        ProteinAlphabet::index(residue.to_ascii_uppercase()).map(|i| self.table()[i])
    }
}

// ── Profiles ────────────────────────────────────────────────────

/// Prefix sums of scale values and of recognized-residue counts.
struct PrefixSums {
    sums: Vec<f64>,
    counts: Vec<usize>,
}

impl PrefixSums {
    fn new(seq: &[u8], scale: &HydrophobicityScale) -> Self {
        let mut sums = Vec::with_capacity(seq.len() + 1);
        let mut counts = Vec::with_capacity(seq.len() + 1);
        let (mut sum, mut count) = (0.0, 0usize);
        sums.push(sum);
        counts.push(count);
        for &aa in seq {
            if let Some(v) = scale.value(aa) {
                sum += v;
                count += 1;
            }
            sums.push(sum);
            counts.push(count);
        }
        Self { sums, counts }
    }

    fn mean(&self, start: usize, end: usize) -> Option<f64> {
        let n = self.counts[end] - self.counts[start];
        (n > 0).then(|| (self.sums[end] - self.sums[start]) / n as f64)
    }
}

/// Mean scale value per window across a protein sequence.
///
/// Windowing follows [`WindowParams::ranges`]: a truncated final window is
/// kept and averaged over the residues it holds.
///
/// # Errors
///
/// Returns [`BiocatError::InvalidParameter`](biocat_core::BiocatError::InvalidParameter)
/// if the window size or step is zero.
///
/// # Example
///
/// ```
/// use biocat_seq::{hydrophobicity_profile, HydrophobicityScale, WindowParams};
///
/// let params = WindowParams::new(3, 1).unwrap();
/// let profile = hydrophobicity_profile(b"IIIII", &HydrophobicityScale::KyteDoolittle, params).unwrap();
/// assert_eq!(profile.len(), 3);
/// assert!((profile.windows()[1].value.unwrap() - 4.5).abs() < 1e-10);
/// ```
pub fn hydrophobicity_profile(
    seq: &[u8],
    scale: &HydrophobicityScale,
    params: WindowParams,
) -> Result<WindowProfile> {
    params.validate()?;
    let prefix = PrefixSums::new(seq, scale);
    WindowProfile::build(seq.len(), &params, |range| prefix.mean(range.start, range.end))
}

/// Grand average of hydropathy: the scale mean over all standard residues.
///
/// `None` when the sequence has no standard residue.
///
/// ```
/// use biocat_seq::{gravy, HydrophobicityScale};
///
/// let g = gravy(b"IIIII", &HydrophobicityScale::KyteDoolittle).unwrap();
/// assert!((g - 4.5).abs() < 1e-10);
/// assert_eq!(gravy(b"XX*", &HydrophobicityScale::KyteDoolittle), None);
/// ```
pub fn gravy(seq: &[u8], scale: &HydrophobicityScale) -> Option<f64> {
    let (sum, n) = seq
        .iter()
        .filter_map(|&aa| scale.value(aa))
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biocat_core::BiocatError;

    const KD: HydrophobicityScale = HydrophobicityScale::KyteDoolittle;

    fn values(seq: &[u8], scale: &HydrophobicityScale, size: usize, step: usize) -> Vec<Option<f64>> {
        hydrophobicity_profile(seq, scale, WindowParams::new(size, step).unwrap())
            .unwrap()
            .values()
            .collect()
    }

    #[test]
    fn scale_lookup_case_insensitive() {
        assert_eq!(KD.value(b'I'), Some(4.5));
        assert_eq!(KD.value(b'r'), Some(-4.5));
        assert_eq!(KD.value(b'X'), None);
        assert_eq!(KD.value(b'*'), None);
    }

    #[test]
    fn hydro_poly_i_kd() {
        for v in values(b"IIIIIIIII", &KD, 3, 1) {
            assert!((v.unwrap() - 4.5).abs() < 1e-10);
        }
    }

    #[test]
    fn hydro_poly_r_kd() {
        for v in values(b"RRRRRRRRR", &KD, 5, 2) {
            assert!((v.unwrap() - (-4.5)).abs() < 1e-10);
        }
    }

    #[test]
    fn hydro_hopp_woods_sign() {
        // Charged residues are hydrophilic on Hopp-Woods.
        let hw = values(b"DDDDD", &HydrophobicityScale::HoppWoods, 5, 1);
        assert!(hw[0].unwrap() > 0.0);
        let kd = values(b"DDDDD", &KD, 5, 1);
        assert!(kd[0].unwrap() < 0.0);
    }

    #[test]
    fn hydro_window_1_raw() {
        let v = values(b"ARN", &KD, 1, 1);
        assert_eq!(v.len(), 3);
        assert!((v[0].unwrap() - 1.8).abs() < 1e-10);
        assert!((v[1].unwrap() - (-4.5)).abs() < 1e-10);
        assert!((v[2].unwrap() - (-3.5)).abs() < 1e-10);
    }

    #[test]
    fn unrecognized_excluded_from_mean() {
        // "IXI" averages over the two I residues only.
        let v = values(b"IXI", &KD, 3, 3);
        assert!((v[0].unwrap() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn all_unrecognized_is_no_data() {
        let v = values(b"XXX**--", &KD, 2, 2);
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(Option::is_none));
    }

    #[test]
    fn mixed_no_data_window() {
        let v = values(b"AAXXAA", &KD, 2, 2);
        assert!(v[0].is_some());
        assert!(v[1].is_none());
        assert!(v[2].is_some());
    }

    #[test]
    fn truncated_final_window() {
        let profile =
            hydrophobicity_profile(b"AAAAI", &KD, WindowParams::non_overlapping(4).unwrap()).unwrap();
        let last = profile.windows()[1];
        assert_eq!((last.start, last.end), (4, 5));
        assert!((last.value.unwrap() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn shorter_than_window() {
        let v = values(b"AI", &KD, 9, 1);
        assert_eq!(v.len(), 1);
        assert!((v[0].unwrap() - 3.15).abs() < 1e-10);
    }

    #[test]
    fn custom_scale() {
        let mut table = [0.0; 20];
        table[0] = 10.0; // A
        let scale = HydrophobicityScale::Custom(table);
        assert_eq!(scale.value(b'a'), Some(10.0));
        assert_eq!(scale.name(), "custom");
        let v = values(b"AG", &scale, 2, 2);
        assert!((v[0].unwrap() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn zero_window_rejected() {
        let bad = WindowParams { size: 0, step: 1 };
        assert!(matches!(
            hydrophobicity_profile(b"AAAA", &KD, bad),
            Err(BiocatError::InvalidParameter(_))
        ));
    }

    #[test]
    fn empty_sequence() {
        let profile = hydrophobicity_profile(b"", &KD, WindowParams::hydropathy_default()).unwrap();
        assert!(profile.is_empty());
        assert_eq!(gravy(b"", &KD), None);
    }

    #[test]
    fn gravy_mixed() {
        // A=1.8, R=-4.5 → mean = -1.35
        let g = gravy(b"AR", &KD).unwrap();
        assert!((g - (-1.35)).abs() < 1e-10);
    }
}
