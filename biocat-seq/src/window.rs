//! Sliding-window parameters and per-window profiles.
//!
//! Windows are laid left to right from position 0, advancing by `step`.
//! Iteration stops at the first window that reaches the end of the
//! sequence, so at most one window is shorter than `size` and a sequence
//! shorter than `size` yields exactly one window covering all of it. An
//! empty sequence yields no windows.

use std::ops::Range;

use biocat_core::{BiocatError, Result};

/// Window size and step, both counted in symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowParams {
    pub size: usize,
    pub step: usize,
}

impl WindowParams {
    /// Create window parameters.
    ///
    /// # Errors
    ///
    /// Returns [`BiocatError::InvalidParameter`] if `size` or `step` is zero.
    pub fn new(size: usize, step: usize) -> Result<Self> {
        let params = Self { size, step };
        params.validate()?;
        Ok(params)
    }

    /// Non-overlapping windows (`step == size`).
    pub fn non_overlapping(size: usize) -> Result<Self> {
        Self::new(size, size)
    }

    /// 100 bp windows every 25 bp, the GC plot default.
    pub fn gc_default() -> Self {
        Self { size: 100, step: 25 }
    }

    /// 9-residue windows every residue, the hydropathy plot default.
    pub fn hydropathy_default() -> Self {
        Self { size: 9, step: 1 }
    }

    /// Check that both size and step are positive.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(BiocatError::invalid_parameter(
                "window size must be positive",
            ));
        }
        if self.step == 0 {
            return Err(BiocatError::invalid_parameter(
                "window step must be positive",
            ));
        }
        Ok(())
    }

    /// Iterate over the window ranges for a sequence of length `len`.
    ///
    /// Parameters are assumed valid; a zero size or step yields nothing.
    ///
    /// ```
    /// use biocat_seq::WindowParams;
    ///
    /// let params = WindowParams::non_overlapping(4).unwrap();
    /// let ranges: Vec<_> = params.ranges(10).collect();
    /// assert_eq!(ranges, vec![0..4, 4..8, 8..10]);
    /// ```
    pub fn ranges(&self, len: usize) -> WindowRanges {
        let valid = self.size > 0 && self.step > 0;
        WindowRanges {
            len,
            size: self.size,
            step: self.step,
            next: (valid && len > 0).then_some(0),
        }
    }
}

/// Iterator over window ranges produced by [`WindowParams::ranges`].
#[derive(Debug, Clone)]
pub struct WindowRanges {
    len: usize,
    size: usize,
    step: usize,
    next: Option<usize>,
}

impl Iterator for WindowRanges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let start = self.next?;
        let end = start.saturating_add(self.size).min(self.len);
        self.next = if end == self.len {
            None
        } else {
            start.checked_add(self.step).filter(|&s| s < self.len)
        };
        Some(start..end)
    }
}

impl std::iter::FusedIterator for WindowRanges {}

/// One window of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowValue {
    /// 0-based start position.
    pub start: usize,
    /// Exclusive end position.
    pub end: usize,
    /// Window value, or `None` when the window holds no usable data.
    pub value: Option<f64>,
}

impl WindowValue {
    /// Number of symbols covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Midpoint used when plotting the window.
    pub fn center(&self) -> usize {
        self.start + self.len() / 2
    }

    pub fn has_data(&self) -> bool {
        self.value.is_some()
    }
}

/// Ordered per-window values over one sequence.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WindowProfile {
    windows: Vec<WindowValue>,
}

impl WindowProfile {
    /// Evaluate `value_of` on every window of a sequence of length `len`.
    pub(crate) fn build(
        len: usize,
        params: &WindowParams,
        mut value_of: impl FnMut(Range<usize>) -> Option<f64>,
    ) -> Result<Self> {
        params.validate()?;
        let windows: Vec<WindowValue> = params
            .ranges(len)
            .map(|range| WindowValue {
                start: range.start,
                end: range.end,
                value: value_of(range),
            })
            .collect();
        log::debug!(
            "built {} windows (size {}, step {}) over {} symbols",
            windows.len(),
            params.size,
            params.step,
            len
        );
        Ok(Self { windows })
    }

    pub fn windows(&self) -> &[WindowValue] {
        &self.windows
    }

    /// Window values in order, `None` marking windows without data.
    pub fn values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.windows.iter().map(|w| w.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WindowValue> {
        self.windows.iter()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Mean over windows that have data; `None` if none do.
    pub fn mean(&self) -> Option<f64> {
        let (sum, n) = self
            .values()
            .flatten()
            .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
        (n > 0).then(|| sum / n as f64)
    }

    pub fn into_windows(self) -> Vec<WindowValue> {
        self.windows
    }
}

impl<'a> IntoIterator for &'a WindowProfile {
    type Item = &'a WindowValue;
    type IntoIter = std::slice::Iter<'a, WindowValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.iter()
    }
}

impl IntoIterator for WindowProfile {
    type Item = WindowValue;
    type IntoIter = std::vec::IntoIter<WindowValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.into_iter()
    }
}
