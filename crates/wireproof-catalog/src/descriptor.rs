//! Catalog document types and configuration schema.
//!
//! A `CatalogDoc` is deserialized from TOML. Types reference each other by
//! full name; the loader resolves names into `SchemaSet` table ids. Field
//! order within a message is declaration order and is preserved verbatim;
//! it decides which violation a verifier reports first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The kind tag of a catalog field, expressed in kebab-case in TOML.
///
/// Example in TOML:
/// ```toml
/// kind = "scalar"
/// kind = "enum"
/// kind = "message"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Scalar,
    Enum,
    Message,
}

impl FieldKind {
    /// The kind tag as it appears in TOML, for error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Scalar => "scalar",
            FieldKind::Enum => "enum",
            FieldKind::Message => "message",
        }
    }
}

/// One field declaration inside a message.
///
/// `target` names the referenced enum or message type and is mandatory
/// exactly when `kind` is `"enum"` or `"message"`: the loader rejects a
/// scalar with a target and a typed field without one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDoc {
    /// Field name: the structural key into message values.
    pub name: String,

    /// Whether absence of this field is a violation. Defaults to optional.
    #[serde(default)]
    pub required: bool,

    /// The field's kind tag.
    pub kind: FieldKind,

    /// Full name of the target type, for enum and message fields.
    pub target: Option<String>,
}

/// One message declaration.
///
/// Example:
/// ```toml
/// [[messages]]
/// name = "demo.Person"
///
/// [[messages.fields]]
/// name = "name"
/// required = true
/// kind = "scalar"
///
/// [[messages.fields]]
/// name = "role"
/// required = true
/// kind = "enum"
/// target = "demo.Role"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDoc {
    /// Full qualified name. Appears verbatim in verification reasons.
    pub name: String,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDoc>,
}

/// One enum declaration.
///
/// Example:
/// ```toml
/// [[enums]]
/// name = "demo.Role"
///
/// [enums.values]
/// ADMIN = 0
/// USER = 1
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDoc {
    /// Full qualified name.
    pub name: String,

    /// Declared values: name to integer id.
    pub values: BTreeMap<String, i64>,
}

/// The top-level structure deserialized from a TOML catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDoc {
    /// Enum declarations. May be empty.
    #[serde(default)]
    pub enums: Vec<EnumDoc>,

    /// Message declarations. May be empty.
    #[serde(default)]
    pub messages: Vec<MessageDoc>,
}
