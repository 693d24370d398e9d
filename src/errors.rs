//! Typed error hierarchy for the repair bay.
//!
//! `DiagnosticError` covers the diagnostic session service. Its `Display`
//! strings double as the messages sent back to HTTP clients.

use thiserror::Error;

/// Errors from the diagnostic session service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    #[error("No damaged system found for this client. Please GET /status first.")]
    NoDamagedSystem,

    #[error("Invalid damaged system stored.")]
    InvalidDamagedSystem { fault: String },

    #[error("Fault catalog must contain at least one entry")]
    EmptyCatalog,
}
