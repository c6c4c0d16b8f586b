//! Field definitions
//!
//! A [`Field`] is one node of the schema tree. Its children live inside the
//! [`FieldKind::Nested`] variant, so a string or number field can never carry
//! a child sequence.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::error::TreeError;

/// Opaque identity of a field, stable for the lifetime of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The closed set of field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Nested,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Nested => "nested",
        };
        f.write_str(s)
    }
}

/// Type of a field together with the data only that type carries
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Number,
    Nested(Vec<Field>),
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::String => FieldType::String,
            FieldKind::Number => FieldType::Number,
            FieldKind::Nested(_) => FieldType::Nested,
        }
    }

    /// Switch to another type. Leaving `Nested` drops the children; entering
    /// `Nested` from a leaf starts with no children.
    fn retype(self, to: FieldType) -> Self {
        match (self, to) {
            (FieldKind::Nested(children), FieldType::Nested) => FieldKind::Nested(children),
            (_, FieldType::Nested) => FieldKind::Nested(Vec::new()),
            (_, FieldType::String) => FieldKind::String,
            (_, FieldType::Number) => FieldKind::Number,
        }
    }
}

/// A single field in the schema tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawField", into = "RawField")]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    pub kind: FieldKind,
    pub enabled: bool,
}

impl Field {
    /// A fresh, enabled, unnamed string field
    pub fn new() -> Self {
        Self {
            id: FieldId::new(),
            name: String::new(),
            kind: FieldKind::String,
            enabled: true,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Number,
            ..Self::new()
        }
    }

    pub fn nested(name: impl Into<String>, children: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Nested(children),
            ..Self::new()
        }
    }

    /// Builder-style toggle of the enabled flag
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Children of a nested field; `None` for string and number fields
    pub fn children(&self) -> Option<&[Field]> {
        match &self.kind {
            FieldKind::Nested(children) => Some(children),
            _ => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Field>> {
        match &mut self.kind {
            FieldKind::Nested(children) => Some(children),
            _ => None,
        }
    }

    /// Merge a partial update over this field
    pub fn apply(&mut self, update: &FieldUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
        if let Some(field_type) = update.field_type {
            let kind = std::mem::replace(&mut self.kind, FieldKind::String);
            self.kind = kind.retype(field_type);
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for a field. Unset attributes are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdate {
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub enabled: Option<bool>,
}

impl FieldUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

/// Wire shape of a field in seed documents
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawField {
    #[serde(default)]
    id: Option<FieldId>,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Field>>,
}

fn default_enabled() -> bool {
    true
}

impl TryFrom<RawField> for Field {
    type Error = TreeError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let kind = match (raw.field_type, raw.children) {
            (FieldType::Nested, children) => FieldKind::Nested(children.unwrap_or_default()),
            (field_type, Some(_)) => {
                return Err(TreeError::UnexpectedChildren {
                    name: raw.name,
                    field_type: field_type.to_string(),
                })
            }
            (FieldType::String, None) => FieldKind::String,
            (FieldType::Number, None) => FieldKind::Number,
        };

        Ok(Field {
            id: raw.id.unwrap_or_default(),
            name: raw.name,
            kind,
            enabled: raw.enabled,
        })
    }
}

impl From<Field> for RawField {
    fn from(field: Field) -> Self {
        let field_type = field.field_type();
        let children = match field.kind {
            FieldKind::Nested(children) => Some(children),
            _ => None,
        };
        RawField {
            id: Some(field.id),
            name: field.name,
            field_type,
            enabled: field.enabled,
            children,
        }
    }
}
