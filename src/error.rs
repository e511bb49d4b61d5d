//! Error types for DexKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using DexError
pub type Result<T> = std::result::Result<T, DexError>;

/// Unified error type for DexKV operations
#[derive(Debug, Error)]
pub enum DexError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Factory Errors
    // -------------------------------------------------------------------------
    /// The factory was handed a discriminator it does not recognize.
    /// Construction fails; the caller decides what to do. There is no
    /// silent fallback to a default backend.
    #[error("unknown backend kind {value:?} (valid options: 1=hash, 2=ordered, 3=insertion)")]
    InvalidBackendKind { value: String },

    // -------------------------------------------------------------------------
    // Loader Errors
    // -------------------------------------------------------------------------
    /// A bulk-load row had the wrong arity or a non-numeric numeric
    /// field. The loader absorbs this per row (logged and counted);
    /// one bad row never aborts a load.
    #[error("malformed row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    // -------------------------------------------------------------------------
    // Query Errors
    // -------------------------------------------------------------------------
    /// An extension operation was requested from a backend that does
    /// not provide it (e.g. a name range query outside the ordered
    /// backend).
    #[error("operation not supported: {0}")]
    Unsupported(String),
}
