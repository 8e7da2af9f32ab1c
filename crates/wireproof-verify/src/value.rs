//! Message-value helpers shared by both strategies.

use serde_json::Value;

/// Look up `field` in `message` as a structural key.
///
/// Absence is distinct from every present value: a key mapped to `null` is
/// observed as present. A message value that is not a JSON object has no
/// keys, so every field is observed as absent and verification stays total
/// for any input shape.
pub(crate) fn field_value<'m>(message: &'m Value, field: &str) -> Option<&'m Value> {
    message.as_object().and_then(|map| map.get(field))
}

/// The emptiness test applied to required message-typed fields.
///
/// `null`, `false`, numeric zero, and the empty string count as missing.
/// Objects and arrays are always present, even when empty. Scalar and enum
/// fields are never tested for emptiness, only presence.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_null_are_distinct() {
        let message = json!({ "present": null });
        assert!(field_value(&message, "present").is_some());
        assert!(field_value(&message, "absent").is_none());
    }

    #[test]
    fn non_object_messages_observe_every_field_as_absent() {
        for message in [json!(null), json!(42), json!("text"), json!([1, 2])] {
            assert!(field_value(&message, "anything").is_none());
        }
    }

    #[test]
    fn falsy_values() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));
    }

    #[test]
    fn truthy_values_include_empty_containers() {
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!("x")));
        assert!(!is_falsy(&json!({})));
        assert!(!is_falsy(&json!([])));
    }
}
