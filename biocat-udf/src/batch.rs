//! Per-row evaluation of a scalar function over a column.
//!
//! Rows are independent, so with the `parallel` feature the column is split
//! across the rayon thread pool. Output order always matches input order,
//! and a failing row does not affect the others.

use biocat_core::{BiocatError, Result};

/// Apply `f` to every row, returning one result per row in row order.
///
/// ```
/// use biocat_udf::{batch::evaluate_column, classify_sequence};
///
/// let column = vec![Some("ATGCC"), None, Some("CCCC")];
/// let out = evaluate_column(&column, |row| classify_sequence(*row));
/// assert_eq!(out[0].as_deref().unwrap(), "Likely Gene");
/// assert!(out[1].is_err());
/// assert_eq!(out[2].as_deref().unwrap(), "Unknown");
/// ```
pub fn evaluate_column<T, F>(rows: &[T], f: F) -> Vec<Result<String>>
where
    T: Sync,
    F: Fn(&T) -> Result<String> + Sync + Send,
{
    log::debug!("evaluating scalar function over {} rows", rows.len());
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        rows.par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    rows.iter().map(f).collect()
}

/// Like [`evaluate_column`] for two-argument functions over paired columns.
///
/// # Errors
///
/// Returns [`BiocatError::InvalidParameter`] if the columns differ in
/// length; no row is evaluated in that case.
pub fn evaluate_pairs<T, F>(left: &[T], right: &[T], f: F) -> Result<Vec<Result<String>>>
where
    T: Sync,
    F: Fn(&T, &T) -> Result<String> + Sync + Send,
{
    if left.len() != right.len() {
        return Err(BiocatError::invalid_parameter(format!(
            "paired columns differ in length: {} and {} rows",
            left.len(),
            right.len()
        )));
    }
    log::debug!("evaluating pairwise scalar function over {} rows", left.len());
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Ok(left
            .par_iter()
            .zip(right.par_iter())
            .map(|(a, b)| f(a, b))
            .collect())
    }
    #[cfg(not(feature = "parallel"))]
    Ok(left.iter().zip(right).map(|(a, b)| f(a, b)).collect())
}
