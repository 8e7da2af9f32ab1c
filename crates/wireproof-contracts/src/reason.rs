//! Reason-string templates shared by both verifier strategies.
//!
//! A verifier reports at most one reason per call, built from one of two
//! templates; reasons produced by nested verification are propagated
//! verbatim (the nested call already names the nested schema). Both
//! strategies route through these functions, so their wording is identical
//! by construction.

use serde_json::Value;

/// A human-readable explanation of the first violation found.
///
/// Verifiers return `Option<Reason>`: `None` means the message is valid.
pub type Reason = String;

/// Reason for a required field that is absent or, for message-typed
/// fields only, present but empty.
pub fn missing_required_field(field: &str, schema_full_name: &str) -> Reason {
    format!("missing required field {field} in {schema_full_name}")
}

/// Reason for an enum field holding a value outside the declared id set.
pub fn invalid_enum_value(field: &str, value: &Value, schema_full_name: &str) -> Reason {
    format!(
        "invalid enum value {field} = {} in {schema_full_name}",
        render_value(value)
    )
}

/// Render a message value for reason text.
///
/// Strings render bare, without quotes; every other value uses its compact
/// JSON form.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
