//! Scenario 1: Person messages, reflective strategy.
//!
//! Builds the Person schema programmatically and checks three messages
//! with `ReflectiveVerifier`, with no registration step:
//!
//! Sub-case A: complete message           → valid
//! Sub-case B: required field absent      → missing-field reason
//! Sub-case C: undeclared enum id         → invalid-enum reason

use std::sync::Arc;

use serde_json::json;

use wireproof_contracts::{
    error::WireproofResult,
    schema::{EnumDescriptor, Field, SchemaId, SchemaSet},
};
use wireproof_verify::ReflectiveVerifier;

// ── Schema construction ───────────────────────────────────────────────────────

/// Person { name: required scalar, age: optional scalar,
/// role: required enum Role { ADMIN = 0, USER = 1 } }.
fn person_schema() -> WireproofResult<(Arc<SchemaSet>, SchemaId)> {
    let mut set = SchemaSet::new();
    let role = set.add_enum(EnumDescriptor::new(
        "demo.Role",
        [(0, "ADMIN".to_string()), (1, "USER".to_string())],
    ));
    let person = set.declare_message("demo.Person");
    set.set_fields(
        person,
        vec![
            Field::scalar("name", true),
            Field::scalar("age", false),
            Field::enumeration("role", true, role),
        ],
    )?;
    Ok((Arc::new(set), person))
}

// ── Scenario runner ───────────────────────────────────────────────────────────

/// Run Scenario 1: Person, three sub-cases under the reflective strategy.
pub fn run_scenario() -> WireproofResult<()> {
    println!("=== Scenario 1: Person (reflective strategy) ===");
    println!();

    let (set, person) = person_schema()?;
    let verifier = ReflectiveVerifier::new(set);

    let cases = [
        ("A: complete message", json!({ "name": "ada", "age": 36, "role": 0 })),
        ("B: required field absent", json!({ "role": 0 })),
        ("C: undeclared enum id", json!({ "name": "ada", "role": 5 })),
    ];

    for (label, message) in &cases {
        println!("  Sub-case {label}");
        println!("  Message:  {message}");
        match verifier.verify(person, message) {
            None => println!("  Result:   VALID"),
            Some(reason) => println!("  Result:   REJECTED — {reason}"),
        }
        println!();
    }

    Ok(())
}
