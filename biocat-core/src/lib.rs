//! Shared primitives for the biocat sequence-analysis crates.
//!
//! `biocat-core` provides the foundation the other biocat crates build on:
//!
//! - **Error types**: [`BiocatError`] and [`Result`] for structured error handling
//! - **Traits**: [`Sequence`] and [`Summarizable`], implemented by the
//!   validated sequence types in `biocat-seq`

pub mod error;
pub mod traits;

pub use error::{BiocatError, Result};
pub use traits::*;
