//! Resolved schema model: messages, fields, and enums.
//!
//! A `SchemaSet` is the unit of registration. Every message schema and enum
//! descriptor lives in one table, and cross-references between them are
//! table indices (`SchemaId`, `EnumId`) rather than embedded values. Message
//! graphs may be self-referential or mutually referential; keeping the
//! references indirect means such graphs can be declared in any order, and
//! verifiers resolve a nested schema by identity at call time.
//!
//! The set is assembled once (programmatically or through
//! `wireproof-catalog`) and is read-only from then on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{WireproofError, WireproofResult};

/// Index of a message schema within its `SchemaSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaId(pub usize);

/// Index of an enum descriptor within its `SchemaSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumId(pub usize);

/// A resolved enum type: the integer ids declared valid, with their names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDescriptor {
    /// Full qualified name (e.g. "demo.Role").
    pub full_name: String,
    /// Declared values keyed by integer id. A `BTreeMap` keeps iteration
    /// order stable across runs.
    values: BTreeMap<i64, String>,
}

impl EnumDescriptor {
    /// Build a descriptor from `(id, name)` pairs.
    pub fn new(
        full_name: impl Into<String>,
        values: impl IntoIterator<Item = (i64, String)>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            values: values.into_iter().collect(),
        }
    }

    /// Return true if `id` is a declared value of this enum.
    ///
    /// Membership is exact: no range checks, no default-value leniency.
    pub fn contains(&self, id: i64) -> bool {
        self.values.contains_key(&id)
    }

    /// Iterate the declared ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.keys().copied()
    }

    /// The declared name for `id`, when it is a member.
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }
}

/// The resolved type of a field, as a closed tagged variant.
///
/// The set of kinds is fixed and exhaustive: scalars need no structural
/// check beyond presence, enum fields check domain membership, message
/// fields are verified recursively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// A primitive value. Presence is the only structural concern.
    Scalar,
    /// A resolved enum type. Values must be declared ids.
    Enum(EnumId),
    /// A resolved nested message type.
    Message(SchemaId),
}

/// One named, typed, required-or-optional member of a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Declaration name. Used verbatim as the structural key into message
    /// values and as the field's name in reason text.
    pub name: String,
    /// Whether absence of this field is a violation.
    pub required: bool,
    /// The field's resolved type.
    pub field_type: FieldType,
}

impl Field {
    /// A scalar field.
    pub fn scalar(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            field_type: FieldType::Scalar,
        }
    }

    /// An enum-typed field referencing a descriptor in the same set.
    pub fn enumeration(name: impl Into<String>, required: bool, target: EnumId) -> Self {
        Self {
            name: name.into(),
            required,
            field_type: FieldType::Enum(target),
        }
    }

    /// A message-typed field referencing a schema in the same set.
    pub fn message(name: impl Into<String>, required: bool, target: SchemaId) -> Self {
        Self {
            name: name.into(),
            required,
            field_type: FieldType::Message(target),
        }
    }
}

/// A resolved message schema: its full name and its ordered field list.
///
/// Field order is declaration order. Verifiers scan in this order and
/// report the first violation, so the order is part of the observable
/// contract, not a storage detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Full qualified name (e.g. "demo.Person"). Appears in reason text.
    pub full_name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

/// The immutable table of message schemas and enums verification runs over.
///
/// Recursive graphs are built in two steps: `declare_message` first (which
/// issues the `SchemaId` other fields can reference), then `set_fields`
/// once every referenced id exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaSet {
    schemas: Vec<Schema>,
    enums: Vec<EnumDescriptor>,
}

impl SchemaSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an enum descriptor and return its id.
    pub fn add_enum(&mut self, descriptor: EnumDescriptor) -> EnumId {
        self.enums.push(descriptor);
        EnumId(self.enums.len() - 1)
    }

    /// Declare a message schema with no fields yet and return its id.
    ///
    /// Fields are installed later with `set_fields`, so schemas that
    /// reference each other (or themselves) can all be declared first.
    pub fn declare_message(&mut self, full_name: impl Into<String>) -> SchemaId {
        self.schemas.push(Schema {
            full_name: full_name.into(),
            fields: Vec::new(),
        });
        SchemaId(self.schemas.len() - 1)
    }

    /// Install the field list for a declared message.
    ///
    /// Every enum and message reference in `fields` must point into this
    /// set; a dangling reference aborts with the matching `WireproofError`
    /// and leaves the schema unchanged. This is the fail-fast gate that
    /// guarantees verifiers only ever see fully resolved schemas.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this set.
    pub fn set_fields(&mut self, id: SchemaId, fields: Vec<Field>) -> WireproofResult<()> {
        let full_name = self.schemas[id.0].full_name.clone();

        for field in &fields {
            match field.field_type {
                FieldType::Scalar => {}
                FieldType::Enum(EnumId(e)) => {
                    if e >= self.enums.len() {
                        return Err(WireproofError::UnresolvedEnumRef {
                            schema: full_name,
                            field: field.name.clone(),
                        });
                    }
                }
                FieldType::Message(SchemaId(m)) => {
                    if m >= self.schemas.len() {
                        return Err(WireproofError::UnresolvedMessageRef {
                            schema: full_name,
                            field: field.name.clone(),
                        });
                    }
                }
            }
        }

        self.schemas[id.0].fields = fields;
        Ok(())
    }

    /// The schema with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this set.
    pub fn schema(&self, id: SchemaId) -> &Schema {
        &self.schemas[id.0]
    }

    /// The enum descriptor with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this set.
    pub fn enum_descriptor(&self, id: EnumId) -> &EnumDescriptor {
        &self.enums[id.0]
    }

    /// Iterate all message schemas with their ids, in declaration order.
    pub fn schemas(&self) -> impl Iterator<Item = (SchemaId, &Schema)> {
        self.schemas
            .iter()
            .enumerate()
            .map(|(i, s)| (SchemaId(i), s))
    }

    /// Number of message schemas in the set.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True when the set holds no message schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Look up a message schema by full name.
    pub fn find_message(&self, full_name: &str) -> Option<SchemaId> {
        self.schemas
            .iter()
            .position(|s| s.full_name == full_name)
            .map(SchemaId)
    }

    /// Look up an enum descriptor by full name.
    pub fn find_enum(&self, full_name: &str) -> Option<EnumId> {
        self.enums
            .iter()
            .position(|e| e.full_name == full_name)
            .map(EnumId)
    }
}
