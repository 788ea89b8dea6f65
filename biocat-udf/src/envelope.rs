//! Total rendering of query-function results.
//!
//! Some callers cannot surface a Rust error per row and want one JSON cell
//! either way. Success renders as `{"ok": <value>}` and failure as
//! `{"error": {"kind": "<variant>", "message": "<text>"}}`, where `kind` is
//! [`BiocatError::kind`].

use biocat_core::{BiocatError, Result};
use serde::Serialize;

/// Last-resort cell when even the error envelope cannot be rendered.
const RENDER_FAILED: &str =
    r#"{"error":{"kind":"serialization","message":"result could not be rendered"}}"#;

/// Outcome of one function call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Envelope<T> {
    Ok(T),
    Error { kind: &'static str, message: String },
}

impl<T> From<Result<T>> for Envelope<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Envelope::Ok(value),
            Err(e) => e.into(),
        }
    }
}

impl<T> From<BiocatError> for Envelope<T> {
    fn from(e: BiocatError) -> Self {
        Envelope::Error {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Compact JSON text of the envelope.
    pub fn render(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("rendering result envelope failed: {e}");
                let failure: Envelope<()> = BiocatError::Serialization(e.to_string()).into();
                serde_json::to_string(&failure).unwrap_or_else(|_| RENDER_FAILED.to_owned())
            }
        }
    }
}

/// Render any result as an envelope.
///
/// ```
/// let cell = biocat_udf::udf_result(biocat_udf::classify_sequence(Some("ATGC")));
/// assert_eq!(cell, r#"{"ok":"Likely Gene"}"#);
/// ```
pub fn udf_result<T: Serialize>(result: Result<T>) -> String {
    Envelope::from(result).render()
}

/// Envelope for functions whose text output is JSON: the payload is nested
/// under `"ok"` instead of quoted as a string.
pub fn udf_json_result(result: Result<String>) -> String {
    udf_result(result.and_then(|text| {
        serde_json::from_str::<serde_json::Value>(&text)
            .map_err(|e| BiocatError::Serialization(e.to_string()))
    }))
}
