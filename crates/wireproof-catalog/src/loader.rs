//! TOML catalog loading and name resolution.
//!
//! `SchemaCatalog` parses a catalog document and resolves it into a
//! `SchemaSet` in two passes, mirroring the set's declare-then-define API:
//!
//! 1. Declare every enum and message, so each full name has a table id.
//! 2. Resolve each field's kind and target name against those ids and
//!    install the field lists.
//!
//! Any duplicate name, dangling reference, or kind/target mismatch aborts
//! loading with the matching `WireproofError`.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use wireproof_contracts::{
    error::{WireproofError, WireproofResult},
    schema::{EnumDescriptor, EnumId, Field, FieldType, SchemaId, SchemaSet},
};

use crate::descriptor::{CatalogDoc, FieldKind, MessageDoc};

/// A parsed schema catalog, ready to resolve into a `SchemaSet`.
///
/// Construct via `from_toml_str` or `from_file`, then call `resolve`.
///
/// ```rust,ignore
/// use wireproof_catalog::SchemaCatalog;
///
/// let set = SchemaCatalog::from_toml_str(CATALOG)?.resolve()?;
/// ```
#[derive(Debug)]
pub struct SchemaCatalog {
    doc: CatalogDoc,
}

impl SchemaCatalog {
    /// Parse `s` as a TOML catalog document.
    ///
    /// Returns `WireproofError::CatalogError` if the TOML is malformed or
    /// does not match the expected `CatalogDoc` schema.
    pub fn from_toml_str(s: &str) -> WireproofResult<Self> {
        let doc: CatalogDoc = toml::from_str(s).map_err(|e| WireproofError::CatalogError {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;
        Ok(Self { doc })
    }

    /// Read the file at `path` and parse it as a TOML catalog document.
    ///
    /// Returns `WireproofError::CatalogError` if the file cannot be read or
    /// its contents are not a valid catalog.
    pub fn from_file(path: &Path) -> WireproofResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| WireproofError::CatalogError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The parsed document, before resolution.
    pub fn document(&self) -> &CatalogDoc {
        &self.doc
    }

    /// Resolve every name reference and produce the schema set.
    ///
    /// Enum and message names share one namespace; declaring the same full
    /// name twice, in either section, is an error. Fields keep their
    /// declared order.
    pub fn resolve(&self) -> WireproofResult<SchemaSet> {
        let mut set = SchemaSet::new();
        let mut enum_ids: HashMap<&str, EnumId> = HashMap::new();
        let mut message_ids: HashMap<&str, SchemaId> = HashMap::new();

        // ── Pass 1: declare every type so names resolve in any order ──────────
        for enum_doc in &self.doc.enums {
            if enum_ids.contains_key(enum_doc.name.as_str()) {
                return Err(WireproofError::DuplicateTypeName {
                    name: enum_doc.name.clone(),
                });
            }
            let descriptor = EnumDescriptor::new(
                enum_doc.name.clone(),
                enum_doc.values.iter().map(|(name, id)| (*id, name.clone())),
            );
            enum_ids.insert(enum_doc.name.as_str(), set.add_enum(descriptor));
        }

        for message in &self.doc.messages {
            let name = message.name.as_str();
            if enum_ids.contains_key(name) || message_ids.contains_key(name) {
                return Err(WireproofError::DuplicateTypeName {
                    name: message.name.clone(),
                });
            }
            message_ids.insert(name, set.declare_message(message.name.clone()));
        }

        // ── Pass 2: resolve targets and install field lists ───────────────────
        for message in &self.doc.messages {
            let fields = resolve_fields(message, &enum_ids, &message_ids)?;
            set.set_fields(message_ids[message.name.as_str()], fields)?;
        }

        debug!(
            enums = self.doc.enums.len(),
            messages = self.doc.messages.len(),
            "catalog resolved"
        );

        Ok(set)
    }
}

/// Resolve one message's field declarations into resolved `Field`s.
fn resolve_fields(
    message: &MessageDoc,
    enum_ids: &HashMap<&str, EnumId>,
    message_ids: &HashMap<&str, SchemaId>,
) -> WireproofResult<Vec<Field>> {
    message
        .fields
        .iter()
        .map(|field| {
            let field_type = match (field.kind, field.target.as_deref()) {
                (FieldKind::Scalar, None) => FieldType::Scalar,
                (FieldKind::Scalar, Some(_)) => {
                    return Err(WireproofError::UnexpectedTarget {
                        schema: message.name.clone(),
                        field: field.name.clone(),
                    });
                }
                (kind, None) => {
                    return Err(WireproofError::MissingTarget {
                        schema: message.name.clone(),
                        field: field.name.clone(),
                        kind: kind.as_str().to_string(),
                    });
                }
                (FieldKind::Enum, Some(target)) => match enum_ids.get(target) {
                    Some(id) => FieldType::Enum(*id),
                    None => {
                        return Err(unknown_type(message, &field.name, target));
                    }
                },
                (FieldKind::Message, Some(target)) => match message_ids.get(target) {
                    Some(id) => FieldType::Message(*id),
                    None => {
                        return Err(unknown_type(message, &field.name, target));
                    }
                },
            };

            Ok(Field {
                name: field.name.clone(),
                required: field.required,
                field_type,
            })
        })
        .collect()
}

fn unknown_type(message: &MessageDoc, field: &str, target: &str) -> WireproofError {
    WireproofError::UnknownTypeName {
        schema: message.name.clone(),
        field: field.to_string(),
        target: target.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use wireproof_contracts::{
        error::WireproofError,
        schema::FieldType,
    };

    use super::SchemaCatalog;

    const PERSON_CATALOG: &str = r#"
[[enums]]
name = "demo.Role"

[enums.values]
ADMIN = 0
USER = 1

[[messages]]
name = "demo.Address"

[[messages.fields]]
name = "street"
required = true
kind = "scalar"

[[messages]]
name = "demo.Person"

[[messages.fields]]
name = "name"
required = true
kind = "scalar"

[[messages.fields]]
name = "age"
kind = "scalar"

[[messages.fields]]
name = "role"
required = true
kind = "enum"
target = "demo.Role"

[[messages.fields]]
name = "home"
kind = "message"
target = "demo.Address"
"#;

    // ── Happy path ────────────────────────────────────────────────────────────

    #[test]
    fn golden_catalog_resolves() {
        let catalog = SchemaCatalog::from_toml_str(PERSON_CATALOG).unwrap();
        assert_eq!(catalog.document().enums.len(), 1);
        assert_eq!(catalog.document().messages.len(), 2);

        let set = catalog.resolve().unwrap();

        let person = set.find_message("demo.Person").unwrap();
        let schema = set.schema(person);

        // Field order is declaration order, verbatim.
        let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age", "role", "home"]);

        // Targets resolved to table ids.
        let role = set.find_enum("demo.Role").unwrap();
        let address = set.find_message("demo.Address").unwrap();
        assert_eq!(schema.fields[2].field_type, FieldType::Enum(role));
        assert_eq!(schema.fields[3].field_type, FieldType::Message(address));

        // `required` defaults to false when omitted.
        assert!(schema.fields[0].required);
        assert!(!schema.fields[1].required);
    }

    #[test]
    fn enum_values_invert_into_id_membership() {
        let set = SchemaCatalog::from_toml_str(PERSON_CATALOG)
            .unwrap()
            .resolve()
            .unwrap();

        let role = set.enum_descriptor(set.find_enum("demo.Role").unwrap());
        assert!(role.contains(0));
        assert!(role.contains(1));
        assert!(!role.contains(2));
        assert_eq!(role.name_of(0), Some("ADMIN"));
    }

    #[test]
    fn forward_references_resolve() {
        // "home" targets a message declared *after* Person in the document.
        let catalog = r#"
[[messages]]
name = "A"

[[messages.fields]]
name = "b"
kind = "message"
target = "B"

[[messages]]
name = "B"
"#;
        let set = SchemaCatalog::from_toml_str(catalog).unwrap().resolve().unwrap();
        assert_eq!(set.len(), 2);
    }

    // ── Failure modes ─────────────────────────────────────────────────────────

    #[test]
    fn malformed_toml_is_a_catalog_error() {
        let err = SchemaCatalog::from_toml_str("[[messages]\nname=").unwrap_err();
        assert!(matches!(err, WireproofError::CatalogError { .. }));
    }

    #[test]
    fn unknown_target_is_rejected() {
        let catalog = r#"
[[messages]]
name = "A"

[[messages.fields]]
name = "x"
kind = "message"
target = "Nowhere"
"#;
        let err = SchemaCatalog::from_toml_str(catalog).unwrap().resolve().unwrap_err();
        assert!(matches!(
            err,
            WireproofError::UnknownTypeName { ref target, .. } if target == "Nowhere"
        ));
    }

    #[test]
    fn duplicate_type_name_is_rejected() {
        let catalog = r#"
[[enums]]
name = "T"

[enums.values]
A = 0

[[messages]]
name = "T"
"#;
        let err = SchemaCatalog::from_toml_str(catalog).unwrap().resolve().unwrap_err();
        assert!(matches!(
            err,
            WireproofError::DuplicateTypeName { ref name } if name == "T"
        ));
    }

    #[test]
    fn enum_field_without_target_is_rejected() {
        let catalog = r#"
[[messages]]
name = "A"

[[messages.fields]]
name = "x"
kind = "enum"
"#;
        let err = SchemaCatalog::from_toml_str(catalog).unwrap().resolve().unwrap_err();
        assert!(matches!(
            err,
            WireproofError::MissingTarget { ref kind, .. } if kind == "enum"
        ));
    }

    #[test]
    fn scalar_field_with_target_is_rejected() {
        let catalog = r#"
[[messages]]
name = "A"

[[messages.fields]]
name = "x"
kind = "scalar"
target = "B"

[[messages]]
name = "B"
"#;
        let err = SchemaCatalog::from_toml_str(catalog).unwrap().resolve().unwrap_err();
        assert!(matches!(err, WireproofError::UnexpectedTarget { .. }));
    }

    #[test]
    fn empty_document_resolves_to_an_empty_set() {
        let set = SchemaCatalog::from_toml_str("").unwrap().resolve().unwrap();
        assert!(set.is_empty());
    }
}
