//! The reflective verification strategy.
//!
//! `ReflectiveVerifier` walks a schema's resolved field list on every call.
//! It needs no per-schema setup, which makes it the semantic reference the
//! specialized strategy must match, and the strategy of choice for callers
//! that skip the registration step entirely.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use wireproof_contracts::{
    reason::{self, Reason},
    schema::{FieldType, SchemaId, SchemaSet},
};

use crate::value::{field_value, is_falsy};
use crate::Verifier;

/// Verifies messages by walking the schema's field list at call time.
///
/// Holds a shared handle on the registered `SchemaSet`. The set is never
/// mutated after registration, so clones of this verifier can run
/// concurrently from any thread without synchronization.
#[derive(Debug, Clone)]
pub struct ReflectiveVerifier {
    set: Arc<SchemaSet>,
}

impl ReflectiveVerifier {
    /// Create a verifier over the given schema set.
    pub fn new(set: Arc<SchemaSet>) -> Self {
        Self { set }
    }

    /// Check `message` against the schema identified by `schema`.
    ///
    /// Fields are scanned in declaration order and the first violation
    /// wins:
    ///
    /// - a required field that is absent reports the missing-field reason;
    /// - an enum field holding an undeclared id reports the invalid-enum
    ///   reason;
    /// - a required message-typed field holding an empty value (`null`,
    ///   `false`, zero, `""`) reports the missing-field reason;
    /// - every other message-typed value is verified recursively and a
    ///   nested reason is propagated verbatim;
    /// - optional absent fields and present scalars pass without checks.
    ///
    /// Returns `None` after a clean scan. Purely a predicate over its
    /// inputs; no side effects beyond diagnostics.
    pub fn verify(&self, schema: SchemaId, message: &Value) -> Option<Reason> {
        walk(&self.set, schema, message)
    }
}

impl Verifier for ReflectiveVerifier {
    fn verify(&self, schema: SchemaId, message: &Value) -> Option<Reason> {
        ReflectiveVerifier::verify(self, schema, message)
    }
}

/// The field walk itself, over a borrowed set so recursion stays cheap.
fn walk(set: &SchemaSet, schema: SchemaId, message: &Value) -> Option<Reason> {
    let desc = set.schema(schema);
    debug!(schema = %desc.full_name, "reflective verification");

    for field in &desc.fields {
        let Some(value) = field_value(message, &field.name) else {
            if field.required {
                warn!(
                    schema = %desc.full_name,
                    field = %field.name,
                    "required field absent"
                );
                return Some(reason::missing_required_field(&field.name, &desc.full_name));
            }
            continue;
        };

        match field.field_type {
            FieldType::Scalar => {}

            FieldType::Enum(enum_id) => {
                let domain = set.enum_descriptor(enum_id);
                let member = value.as_i64().is_some_and(|id| domain.contains(id));
                if !member {
                    warn!(
                        schema = %desc.full_name,
                        field = %field.name,
                        "enum value outside declared domain"
                    );
                    return Some(reason::invalid_enum_value(
                        &field.name,
                        value,
                        &desc.full_name,
                    ));
                }
            }

            FieldType::Message(target) => {
                // A required message field must be a genuinely present
                // object; an empty stand-in counts as missing.
                if field.required && is_falsy(value) {
                    warn!(
                        schema = %desc.full_name,
                        field = %field.name,
                        "required message field is empty"
                    );
                    return Some(reason::missing_required_field(&field.name, &desc.full_name));
                }
                if let Some(nested) = walk(set, target, value) {
                    return Some(nested);
                }
            }
        }
    }

    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use wireproof_contracts::schema::{EnumDescriptor, Field, SchemaId, SchemaSet};

    use super::ReflectiveVerifier;

    // ── Builder helpers ───────────────────────────────────────────────────────

    /// Person { name: required scalar, age: optional scalar,
    /// role: required enum { ADMIN = 0, USER = 1 } }.
    fn person_set() -> (Arc<SchemaSet>, SchemaId) {
        let mut set = SchemaSet::new();
        let role = set.add_enum(EnumDescriptor::new(
            "Role",
            [(0, "ADMIN".to_string()), (1, "USER".to_string())],
        ));
        let person = set.declare_message("Person");
        set.set_fields(
            person,
            vec![
                Field::scalar("name", true),
                Field::scalar("age", false),
                Field::enumeration("role", true, role),
            ],
        )
        .unwrap();
        (Arc::new(set), person)
    }

    /// A self-recursive list node: Node { label: required scalar,
    /// next: optional Node }.
    fn node_set() -> (Arc<SchemaSet>, SchemaId) {
        let mut set = SchemaSet::new();
        let node = set.declare_message("Node");
        set.set_fields(
            node,
            vec![
                Field::scalar("label", true),
                Field::message("next", false, node),
            ],
        )
        .unwrap();
        (Arc::new(set), node)
    }

    // ── Person scenario ───────────────────────────────────────────────────────

    #[test]
    fn valid_person_passes() {
        let (set, person) = person_set();
        let verifier = ReflectiveVerifier::new(set);

        assert_eq!(verifier.verify(person, &json!({ "name": "x", "role": 0 })), None);
    }

    #[test]
    fn missing_required_scalar_is_reported() {
        let (set, person) = person_set();
        let verifier = ReflectiveVerifier::new(set);

        assert_eq!(
            verifier.verify(person, &json!({ "role": 0 })),
            Some("missing required field name in Person".to_string())
        );
    }

    #[test]
    fn undeclared_enum_id_is_reported() {
        let (set, person) = person_set();
        let verifier = ReflectiveVerifier::new(set);

        assert_eq!(
            verifier.verify(person, &json!({ "name": "x", "role": 5 })),
            Some("invalid enum value role = 5 in Person".to_string())
        );
    }

    #[test]
    fn every_declared_enum_id_is_accepted() {
        let (set, person) = person_set();
        let verifier = ReflectiveVerifier::new(set);

        for id in [0, 1] {
            assert_eq!(verifier.verify(person, &json!({ "name": "x", "role": id })), None);
        }
    }

    #[test]
    fn non_integer_enum_values_are_rejected() {
        let (set, person) = person_set();
        let verifier = ReflectiveVerifier::new(set);

        // "0" is not the id 0; enum domains hold integers only.
        assert_eq!(
            verifier.verify(person, &json!({ "name": "x", "role": "0" })),
            Some("invalid enum value role = 0 in Person".to_string())
        );
        assert_eq!(
            verifier.verify(person, &json!({ "name": "x", "role": 0.5 })),
            Some("invalid enum value role = 0.5 in Person".to_string())
        );
    }

    #[test]
    fn optional_absent_field_never_produces_a_reason() {
        let (set, person) = person_set();
        let verifier = ReflectiveVerifier::new(set);

        // "age" absent, still valid.
        assert_eq!(verifier.verify(person, &json!({ "name": "x", "role": 1 })), None);
    }

    #[test]
    fn first_field_in_declaration_order_wins() {
        // Both required fields absent: the reason must name "name", which
        // is declared before "role".
        let (set, person) = person_set();
        let verifier = ReflectiveVerifier::new(set);

        assert_eq!(
            verifier.verify(person, &json!({})),
            Some("missing required field name in Person".to_string())
        );
    }

    #[test]
    fn non_object_message_observes_all_fields_absent() {
        let (set, person) = person_set();
        let verifier = ReflectiveVerifier::new(set);

        assert_eq!(
            verifier.verify(person, &json!(42)),
            Some("missing required field name in Person".to_string())
        );
    }

    // ── Nested messages ───────────────────────────────────────────────────────

    #[test]
    fn required_message_field_with_empty_value_counts_as_missing() {
        let mut set = SchemaSet::new();
        let address = set.declare_message("Address");
        set.set_fields(address, vec![Field::scalar("street", true)])
            .unwrap();
        let person = set.declare_message("Person");
        set.set_fields(person, vec![Field::message("home", true, address)])
            .unwrap();
        let verifier = ReflectiveVerifier::new(Arc::new(set));

        for empty in [json!(null), json!(0), json!(""), json!(false)] {
            assert_eq!(
                verifier.verify(person, &json!({ "home": empty })),
                Some("missing required field home in Person".to_string())
            );
        }

        // An empty object is present: verification recurses into it and
        // finds the nested violation instead.
        assert_eq!(
            verifier.verify(person, &json!({ "home": {} })),
            Some("missing required field street in Address".to_string())
        );
    }

    #[test]
    fn nested_reason_is_propagated_verbatim() {
        let (set, node) = node_set();
        let verifier = ReflectiveVerifier::new(set);

        // Violation three levels deep: the reason names Node, unwrapped.
        let message = json!({
            "label": "a",
            "next": { "label": "b", "next": { "next": null } }
        });
        assert_eq!(
            verifier.verify(node, &message),
            Some("missing required field label in Node".to_string())
        );
    }

    #[test]
    fn self_recursive_schema_terminates_on_finite_messages() {
        let (set, node) = node_set();
        let verifier = ReflectiveVerifier::new(set);

        let message = json!({
            "label": "a",
            "next": { "label": "b", "next": { "label": "c" } }
        });
        assert_eq!(verifier.verify(node, &message), None);
    }

    #[test]
    fn zero_field_schema_is_always_valid() {
        let mut set = SchemaSet::new();
        let empty = set.declare_message("Empty");
        let verifier = ReflectiveVerifier::new(Arc::new(set));

        assert_eq!(verifier.verify(empty, &json!({})), None);
        assert_eq!(verifier.verify(empty, &json!({ "extra": 1 })), None);
        assert_eq!(verifier.verify(empty, &json!(null)), None);
    }
}
