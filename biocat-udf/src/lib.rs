//! Query-layer surface of the biocat sequence-analysis engine.
//!
//! This crate wraps `biocat-seq` as scalar functions that a query engine can
//! call once per row over a sequence column. Every function accepts nullable
//! SQL-shaped arguments (`Option<&str>`, `Option<i64>`) and returns the text
//! rendering stored in result sets:
//!
//! - [`functions`]: `classify_sequence`, `count_nucleotides`, `detect_mutations`,
//!   `gc_content_windows`, `count_amino_acids`, `hydrophobicity_profile`
//! - [`batch`]: column evaluation, rayon-parallel with the `parallel` feature
//! - [`envelope`]: `{"ok": ...}` / `{"error": {"kind", "message"}}` cells for
//!   callers that need a total function
//!
//! # Example
//!
//! ```
//! let counts = biocat_udf::count_nucleotides(Some("ATCGATCG")).unwrap();
//! let v: serde_json::Value = serde_json::from_str(&counts).unwrap();
//! assert_eq!(v["A"], 2);
//!
//! let json = biocat_udf::udf_result(biocat_udf::gc_content_windows(Some("ACGT"), Some(0), None));
//! assert!(json.contains("error"));
//! ```

pub mod batch;
pub mod envelope;
pub mod functions;

pub use envelope::{udf_json_result, udf_result, Envelope};
pub use functions::{
    classify_sequence, count_amino_acids, count_nucleotides, detect_mutations, gc_content_windows,
    hydrophobicity_profile, window_params,
};
