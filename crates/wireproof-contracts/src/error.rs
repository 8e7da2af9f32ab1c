//! Error types for schema construction and catalog loading.
//!
//! Verification outcomes are never errors: a verifier always returns a
//! definite result (`None`, or a reason string) for any message value.
//! `WireproofError` covers the fail-fast boundary instead, which is
//! assembling a `SchemaSet` with dangling references or loading a malformed
//! catalog document. A schema that reaches a verifier is fully resolved.

use thiserror::Error;

/// The unified error type for the WIREPROOF crates.
#[derive(Debug, Error)]
pub enum WireproofError {
    /// A field references a message schema id that is not in the set.
    #[error("field '{field}' in '{schema}' references an unresolved message type")]
    UnresolvedMessageRef { schema: String, field: String },

    /// A field references an enum id that is not in the set.
    #[error("field '{field}' in '{schema}' references an unresolved enum type")]
    UnresolvedEnumRef { schema: String, field: String },

    /// Two catalog types share one full name.
    #[error("duplicate type name '{name}' in catalog")]
    DuplicateTypeName { name: String },

    /// A field kind that needs a target type was declared without one.
    #[error("field '{field}' in '{schema}' has kind '{kind}' but names no target type")]
    MissingTarget {
        schema: String,
        field: String,
        kind: String,
    },

    /// A scalar field declared a target type it cannot use.
    #[error("scalar field '{field}' in '{schema}' must not name a target type")]
    UnexpectedTarget { schema: String, field: String },

    /// A catalog field references a type name that was never declared.
    #[error("field '{field}' in '{schema}' references unknown type '{target}'")]
    UnknownTypeName {
        schema: String,
        field: String,
        target: String,
    },

    /// The catalog document could not be read or parsed.
    #[error("catalog error: {reason}")]
    CatalogError { reason: String },
}

/// Convenience alias used throughout the WIREPROOF crates.
pub type WireproofResult<T> = Result<T, WireproofError>;
