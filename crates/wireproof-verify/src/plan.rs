//! Build-once field plans: the specialized verification strategy.
//!
//! The reflective walk re-derives the same facts on every call: each
//! field's structural key, its enum's declared ids, its nested target.
//! `VerifierBuilder` computes those facts once per schema and stores them
//! as one `FieldCheck` per field; the resulting `SpecializedVerifier` is a
//! plain dispatch loop over the plans, with the same declaration-order
//! short-circuit and the same reason wording as the reflective walk.
//!
//! Nested message plans hold a `SchemaId`, never another verifier: the id
//! is resolved through the [`VerifierRegistry`] at call time, so schemas
//! that reference themselves (or each other) compile in any order.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, warn};

use wireproof_contracts::{
    reason::{self, Reason},
    schema::{FieldType, SchemaId, SchemaSet},
};

use crate::registry::VerifierRegistry;
use crate::value::{field_value, is_falsy};

/// The single check a field performs, classified once at build time.
#[derive(Debug, Clone)]
enum FieldCheck {
    /// Required scalar: absence is the only violation.
    RequiredPresence,

    /// Enum field: a present value must be a declared id; when the field is
    /// required, absence is a violation too. The id set is captured here at
    /// build time and never re-read from the descriptor.
    EnumDomain { required: bool, ids: BTreeSet<i64> },

    /// Message field: recurse by schema id through the registry; when the
    /// field is required, absent and empty values are violations.
    NestedMessage { required: bool, target: SchemaId },

    /// Optional scalar: nothing to check.
    NoCheck,
}

/// One field's precomputed plan: its structural key plus its check.
#[derive(Debug, Clone)]
struct FieldPlan {
    /// The declared field name: both the lookup key and the name used in
    /// reason text.
    name: String,
    check: FieldCheck,
}

/// Builds specialized verifiers over a schema set.
///
/// Building is pure and idempotent: it reads the set and touches nothing
/// else, so building the same schema twice yields equivalent verifiers.
pub struct VerifierBuilder<'a> {
    set: &'a SchemaSet,
}

impl<'a> VerifierBuilder<'a> {
    /// A builder reading from `set`.
    pub fn new(set: &'a SchemaSet) -> Self {
        Self { set }
    }

    /// Compile the schema's field list into a reusable verifier.
    ///
    /// # Panics
    ///
    /// Panics if `schema` was not issued by this builder's set.
    pub fn build(&self, schema: SchemaId) -> SpecializedVerifier {
        let desc = self.set.schema(schema);

        let plans: Vec<FieldPlan> = desc
            .fields
            .iter()
            .map(|field| {
                let check = match field.field_type {
                    FieldType::Scalar if field.required => FieldCheck::RequiredPresence,
                    FieldType::Scalar => FieldCheck::NoCheck,
                    FieldType::Enum(enum_id) => FieldCheck::EnumDomain {
                        required: field.required,
                        ids: self.set.enum_descriptor(enum_id).ids().collect(),
                    },
                    FieldType::Message(target) => FieldCheck::NestedMessage {
                        required: field.required,
                        target,
                    },
                };
                FieldPlan {
                    name: field.name.clone(),
                    check,
                }
            })
            .collect();

        debug!(
            schema = %desc.full_name,
            plans = plans.len(),
            "built specialized verifier"
        );

        SpecializedVerifier {
            full_name: desc.full_name.clone(),
            plans,
        }
    }
}

/// A per-schema verification routine, built once and reused for every
/// subsequent check against that schema.
///
/// Holds no reference to the schema set or to other verifiers; nested
/// message checks go back through the registry by id.
#[derive(Debug, Clone)]
pub struct SpecializedVerifier {
    full_name: String,
    plans: Vec<FieldPlan>,
}

impl SpecializedVerifier {
    /// Run the compiled plans against `message`.
    ///
    /// Behaviorally identical to the reflective walk over the same schema:
    /// declaration order, first violation wins, identical reason text. A
    /// schema with no fields always reports valid.
    pub fn verify(&self, registry: &VerifierRegistry, message: &Value) -> Option<Reason> {
        for plan in &self.plans {
            let value = field_value(message, &plan.name);

            match &plan.check {
                FieldCheck::RequiredPresence => {
                    if value.is_none() {
                        return Some(self.missing(&plan.name));
                    }
                }

                FieldCheck::EnumDomain { required, ids } => match value {
                    None => {
                        if *required {
                            return Some(self.missing(&plan.name));
                        }
                    }
                    Some(v) => {
                        let member = v.as_i64().is_some_and(|id| ids.contains(&id));
                        if !member {
                            warn!(
                                schema = %self.full_name,
                                field = %plan.name,
                                "enum value outside declared domain"
                            );
                            return Some(reason::invalid_enum_value(
                                &plan.name,
                                v,
                                &self.full_name,
                            ));
                        }
                    }
                },

                FieldCheck::NestedMessage { required, target } => match value {
                    None => {
                        if *required {
                            return Some(self.missing(&plan.name));
                        }
                    }
                    Some(v) => {
                        if *required && is_falsy(v) {
                            return Some(self.missing(&plan.name));
                        }
                        if let Some(nested) = registry.verify(*target, v) {
                            return Some(nested);
                        }
                    }
                },

                FieldCheck::NoCheck => {}
            }
        }

        None
    }

    /// Full name of the schema this verifier was built for.
    pub fn schema_name(&self) -> &str {
        &self.full_name
    }

    fn missing(&self, field: &str) -> Reason {
        warn!(schema = %self.full_name, field = %field, "required field missing");
        reason::missing_required_field(field, &self.full_name)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
