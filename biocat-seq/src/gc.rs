//! GC content over sliding windows.
//!
//! Values are fractions in `[0, 1]`. The denominator is the window's actual
//! length, so a truncated final window is measured against the symbols it
//! holds, and non-ACGT symbols count toward the length but not toward GC.

use biocat_core::Result;

use crate::window::{WindowParams, WindowProfile};

#[inline]
fn is_gc(b: u8) -> bool {
    matches!(b, b'G' | b'C' | b'g' | b'c')
}

/// GC fraction of a slice; `None` when the slice is empty.
pub fn gc_content(seq: &[u8]) -> Option<f64> {
    if seq.is_empty() {
        return None;
    }
    let gc = seq.iter().filter(|&&b| is_gc(b)).count();
    Some(gc as f64 / seq.len() as f64)
}

/// GC fraction per window across a DNA sequence.
///
/// # Errors
///
/// Returns [`BiocatError::InvalidParameter`](biocat_core::BiocatError::InvalidParameter)
/// if the window size or step is zero.
///
/// # Example
///
/// ```
/// use biocat_seq::{gc_content_windows, WindowParams};
///
/// let params = WindowParams::non_overlapping(4).unwrap();
/// let profile = gc_content_windows(b"GGCCATATGC", params).unwrap();
/// let values: Vec<_> = profile.values().collect();
/// assert_eq!(values, vec![Some(1.0), Some(0.0), Some(1.0)]);
/// ```
pub fn gc_content_windows(seq: &[u8], params: WindowParams) -> Result<WindowProfile> {
    WindowProfile::build(seq.len(), &params, |range| gc_content(&seq[range]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use biocat_core::BiocatError;

    fn values(seq: &[u8], size: usize, step: usize) -> Vec<Option<f64>> {
        let params = WindowParams::new(size, step).unwrap();
        gc_content_windows(seq, params).unwrap().values().collect()
    }

    #[test]
    fn all_g_is_one() {
        assert!(values(b"GGGGGGG", 3, 2).iter().all(|&v| v == Some(1.0)));
    }

    #[test]
    fn partial_window_uses_actual_length() {
        // Last window is "GA": 1 of 2.
        assert_eq!(values(b"ATGCGA", 4, 4), vec![Some(0.5), Some(0.5)]);
    }

    #[test]
    fn shorter_than_window_single_window() {
        let params = WindowParams::new(100, 25).unwrap();
        let profile = gc_content_windows(b"GCAT", params).unwrap();
        assert_eq!(profile.len(), 1);
        let w = profile.windows()[0];
        assert_eq!((w.start, w.end), (0, 4));
        assert_eq!(w.value, Some(0.5));
    }

    #[test]
    fn overlapping_windows() {
        let profile = gc_content_windows(b"AAGGAA", WindowParams::new(2, 1).unwrap()).unwrap();
        let starts: Vec<_> = profile.iter().map(|w| w.start).collect();
        assert_eq!(starts, vec![0, 1, 2, 3, 4]);
        assert_eq!(
            profile.values().collect::<Vec<_>>(),
            vec![Some(0.0), Some(0.5), Some(1.0), Some(0.5), Some(0.0)]
        );
    }

    #[test]
    fn lowercase_and_unknown_symbols() {
        // N counts toward length only.
        assert_eq!(values(b"gcNN", 4, 4), vec![Some(0.5)]);
    }

    #[test]
    fn empty_sequence_no_windows() {
        assert!(gc_content_windows(b"", WindowParams::gc_default()).unwrap().is_empty());
    }

    #[test]
    fn zero_parameters_rejected() {
        let bad = WindowParams { size: 0, step: 1 };
        assert!(matches!(
            gc_content_windows(b"ACGT", bad),
            Err(BiocatError::InvalidParameter(_))
        ));
        let bad = WindowParams { size: 2, step: 0 };
        assert!(gc_content_windows(b"ACGT", bad).is_err());
    }

    #[test]
    fn overall_gc() {
        assert_eq!(gc_content(b"ATGC"), Some(0.5));
        assert_eq!(gc_content(b""), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn all_g_windows_are_one(len in 1..300usize, size in 1..50usize, step in 1..50usize) {
            let seq = vec![b'G'; len];
            let profile = gc_content_windows(&seq, WindowParams::new(size, step).unwrap()).unwrap();
            prop_assert!(!profile.is_empty());
            for v in profile.values() {
                prop_assert_eq!(v, Some(1.0));
            }
        }

        #[test]
        fn windows_stay_in_unit_interval(seq in "[ACGTN]{1,200}", size in 1..40usize, step in 1..40usize) {
            let profile = gc_content_windows(seq.as_bytes(), WindowParams::new(size, step).unwrap()).unwrap();
            for w in &profile {
                let v = w.value.unwrap();
                prop_assert!((0.0..=1.0).contains(&v));
                prop_assert!(w.end <= seq.len());
            }
            if step <= size {
                prop_assert_eq!(profile.windows().last().map(|w| w.end), Some(seq.len()));
            }
        }

        #[test]
        fn short_sequence_one_window(len in 1..20usize, extra in 1..20usize) {
            let seq = vec![b'A'; len];
            let profile = gc_content_windows(&seq, WindowParams::non_overlapping(len + extra).unwrap()).unwrap();
            prop_assert_eq!(profile.len(), 1);
        }
    }
}
