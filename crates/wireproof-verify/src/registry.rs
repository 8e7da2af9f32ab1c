//! The registration-step cache: one specialized verifier per schema.
//!
//! `VerifierRegistry::new` performs the registration step once, building a
//! [`SpecializedVerifier`] for every schema in the set, and every later
//! `verify` call dispatches to the cached routine. Nested message checks
//! inside the routines come back through the registry by `SchemaId`; the
//! routines never embed one another, which is what lets self-referential
//! and mutually referential schema graphs build in any order.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use wireproof_contracts::{
    reason::Reason,
    schema::{SchemaId, SchemaSet},
};

use crate::plan::{SpecializedVerifier, VerifierBuilder};
use crate::Verifier;

/// Holds the compiled verifier for every schema in a set.
///
/// Construction is pure over the immutable set, so building a registry
/// twice for the same set is wasteful but harmless. After construction the
/// registry is read-only and can be shared across threads freely.
pub struct VerifierRegistry {
    set: Arc<SchemaSet>,
    /// Compiled routines, indexed by `SchemaId`.
    verifiers: Vec<SpecializedVerifier>,
}

impl VerifierRegistry {
    /// Build the specialized verifier for every schema in `set`.
    pub fn new(set: Arc<SchemaSet>) -> Self {
        let builder = VerifierBuilder::new(&set);
        let verifiers: Vec<SpecializedVerifier> =
            set.schemas().map(|(id, _)| builder.build(id)).collect();

        debug!(schemas = verifiers.len(), "verifier registry built");

        Self { set, verifiers }
    }

    /// Verify `message` with the cached routine for `schema`.
    ///
    /// # Panics
    ///
    /// Panics if `schema` was not issued by this registry's set.
    pub fn verify(&self, schema: SchemaId, message: &Value) -> Option<Reason> {
        self.verifiers[schema.0].verify(self, message)
    }

    /// The compiled routine for `schema`.
    ///
    /// # Panics
    ///
    /// Panics if `schema` was not issued by this registry's set.
    pub fn specialized(&self, schema: SchemaId) -> &SpecializedVerifier {
        &self.verifiers[schema.0]
    }

    /// The schema set this registry was built over.
    pub fn schema_set(&self) -> &SchemaSet {
        &self.set
    }
}

impl Verifier for VerifierRegistry {
    fn verify(&self, schema: SchemaId, message: &Value) -> Option<Reason> {
        VerifierRegistry::verify(self, schema, message)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
