//! Scalar functions as seen from the query layer.
//!
//! Arguments arrive as nullable SQL values: text as `Option<&str>`, integers
//! as `Option<i64>`. A NULL required argument and a non-positive window or
//! step are [`BiocatError::InvalidParameter`]. Everything else is total.
//!
//! | Function | Output |
//! |---|---|
//! | [`classify_sequence`] | `Likely Gene` / `Unknown` |
//! | [`count_nucleotides`] | `{"A":n,"C":n,"G":n,"T":n}` |
//! | [`detect_mutations`] | `Pos 1: A->G; Pos 4: G->A; ` or `No mutations found` |
//! | [`gc_content_windows`] | `[{"start":0,"end":w,"value":f},...]` |
//! | [`count_amino_acids`] | `{"A":n,...,"Y":n}` |
//! | [`hydrophobicity_profile`] | as GC windows, `"value":null` for no data |

use biocat_core::{BiocatError, Result};
use biocat_seq::{HydrophobicityScale, WindowParams};

use serde::Serialize;

fn to_json<T: Serialize + ?Sized>(val: &T) -> Result<String> {
    serde_json::to_string(val).map_err(|e| BiocatError::Serialization(e.to_string()))
}

fn required_text<'a>(arg: Option<&'a str>, name: &str) -> Result<&'a str> {
    arg.ok_or_else(|| BiocatError::invalid_parameter(format!("{name} must not be NULL")))
}

fn required<'a>(arg: Option<&'a str>, name: &str) -> Result<&'a [u8]> {
    required_text(arg, name).map(str::as_bytes)
}

fn positive(value: i64, name: &str) -> Result<usize> {
    if value <= 0 {
        return Err(BiocatError::invalid_parameter(format!(
            "{name} must be positive, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| BiocatError::invalid_parameter(format!("{name} {value} is out of range")))
}

/// Window parameters from SQL integers. A NULL step defaults to the window.
pub fn window_params(window: Option<i64>, step: Option<i64>) -> Result<WindowParams> {
    let window = window.ok_or_else(|| BiocatError::invalid_parameter("window must not be NULL"))?;
    let size = positive(window, "window")?;
    let step = match step {
        Some(step) => positive(step, "step")?,
        None => size,
    };
    WindowParams::new(size, step)
}

/// `classify_sequence(dna_sequence)`.
///
/// ```
/// assert_eq!(biocat_udf::classify_sequence(Some("ATGGCATAG")).unwrap(), "Likely Gene");
/// assert_eq!(biocat_udf::classify_sequence(Some("")).unwrap(), "Unknown");
/// assert!(biocat_udf::classify_sequence(None).is_err());
/// ```
pub fn classify_sequence(dna_sequence: Option<&str>) -> Result<String> {
    let seq = required(dna_sequence, "dna_sequence")?;
    Ok(biocat_seq::classify_sequence(seq).to_string())
}

/// `count_nucleotides(dna_sequence)` as a JSON object over `A`, `C`, `G`, `T`.
pub fn count_nucleotides(dna_sequence: Option<&str>) -> Result<String> {
    let seq = required(dna_sequence, "dna_sequence")?;
    to_json(&biocat_seq::count_nucleotides(seq))
}

/// `detect_mutations(seq1, seq2)` in the literal text format.
///
/// Positions count characters, so multi-byte text stays aligned.
///
/// ```
/// let text = biocat_udf::detect_mutations(Some("ATCGATCG"), Some("ATCGATCC")).unwrap();
/// assert_eq!(text, "Pos 8: G->C; ");
/// ```
pub fn detect_mutations(seq1: Option<&str>, seq2: Option<&str>) -> Result<String> {
    let seq1 = required_text(seq1, "seq1")?;
    let seq2 = required_text(seq2, "seq2")?;
    Ok(biocat_seq::detect_symbol_mutations(seq1, seq2).to_string())
}

/// `gc_content_windows(dna_sequence, window, step)` as a JSON array.
pub fn gc_content_windows(
    dna_sequence: Option<&str>,
    window: Option<i64>,
    step: Option<i64>,
) -> Result<String> {
    let seq = required(dna_sequence, "dna_sequence")?;
    let params = window_params(window, step)?;
    to_json(&biocat_seq::gc_content_windows(seq, params)?)
}

/// `count_amino_acids(protein_sequence)` as a JSON object over the 20 residues.
pub fn count_amino_acids(protein_sequence: Option<&str>) -> Result<String> {
    let seq = required(protein_sequence, "protein_sequence")?;
    to_json(&biocat_seq::count_amino_acids(seq))
}

/// `hydrophobicity_profile(protein_sequence, window, step)` on the
/// Kyte-Doolittle scale, as a JSON array.
pub fn hydrophobicity_profile(
    protein_sequence: Option<&str>,
    window: Option<i64>,
    step: Option<i64>,
) -> Result<String> {
    let seq = required(protein_sequence, "protein_sequence")?;
    let params = window_params(window, step)?;
    to_json(&biocat_seq::hydrophobicity_profile(
        seq,
        &HydrophobicityScale::KyteDoolittle,
        params,
    )?)
}
