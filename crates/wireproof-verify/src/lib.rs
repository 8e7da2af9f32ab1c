//! # wireproof-verify
//!
//! Message verification against resolved WIREPROOF schemas.
//!
//! Two interchangeable strategies share one contract:
//!
//! 1. **Reflective**: [`ReflectiveVerifier`] walks the schema's field list
//!    on every call. No setup, always correct; it is the semantic reference.
//! 2. **Specialized**: [`plan::VerifierBuilder`] compiles a schema's fields
//!    into per-field plans once, and [`VerifierRegistry`] caches one
//!    compiled routine per schema, dispatching nested message checks by
//!    schema id.
//!
//! Both return `None` for a valid message, or the first violation in field
//! declaration order, with identical wording.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wireproof_verify::VerifierRegistry;
//!
//! let registry = VerifierRegistry::new(Arc::new(set));
//! match registry.verify(person, &message) {
//!     None => { /* message is valid */ }
//!     Some(reason) => eprintln!("rejected: {reason}"),
//! }
//! ```

use serde_json::Value;

use wireproof_contracts::{reason::Reason, schema::SchemaId};

pub mod plan;
pub mod reflective;
pub mod registry;
mod value;

pub use reflective::ReflectiveVerifier;
pub use registry::VerifierRegistry;

/// The common contract of both verification strategies.
///
/// Callers that do not care which strategy is behind a check (e.g. an
/// encoding layer rejecting invalid data before serialization) can hold
/// either implementation as a `dyn Verifier`.
pub trait Verifier: Send + Sync {
    /// Check `message` against the schema identified by `schema`.
    ///
    /// Returns `None` when the message satisfies the schema, or a reason
    /// describing the first violation in field declaration order.
    fn verify(&self, schema: SchemaId, message: &Value) -> Option<Reason>;
}
