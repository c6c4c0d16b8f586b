//! Schema projector
//!
//! Turns a field tree into the JSON preview document. Disabled fields drop out
//! together with their subtrees, leaves become placeholder strings and nested
//! fields become objects. Sibling names are used as keys, so a later sibling
//! overwrites an earlier one with the same name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::field::{Field, FieldKind};

pub const STRING_PLACEHOLDER: &str = "STRING";
pub const NUMBER_PLACEHOLDER: &str = "number";

/// Placeholder values written for leaf fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholders {
    #[serde(default = "default_string_placeholder")]
    pub string: String,
    #[serde(default = "default_number_placeholder")]
    pub number: String,
}

fn default_string_placeholder() -> String {
    STRING_PLACEHOLDER.to_string()
}

fn default_number_placeholder() -> String {
    NUMBER_PLACEHOLDER.to_string()
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            string: default_string_placeholder(),
            number: default_number_placeholder(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Projector {
    placeholders: Placeholders,
}

impl Projector {
    pub fn new(placeholders: Placeholders) -> Self {
        Self { placeholders }
    }

    /// Project a sequence of fields into a JSON object
    pub fn project(&self, fields: &[Field]) -> Value {
        Value::Object(self.project_map(fields))
    }

    fn project_map(&self, fields: &[Field]) -> Map<String, Value> {
        let mut out = Map::new();
        for field in fields.iter().filter(|f| f.enabled) {
            out.insert(field.name.clone(), self.project_field(field));
        }
        out
    }

    fn project_field(&self, field: &Field) -> Value {
        match &field.kind {
            // Unnamed string fields project to an empty string
            FieldKind::String if field.name.is_empty() => Value::String(String::new()),
            FieldKind::String => Value::String(self.placeholders.string.clone()),
            FieldKind::Number => Value::String(self.placeholders.number.clone()),
            FieldKind::Nested(children) => Value::Object(self.project_map(children)),
        }
    }
}

/// Project with the built-in placeholders
pub fn project(fields: &[Field]) -> Value {
    Projector::default().project(fields)
}

/// Render a preview as pretty JSON with two-space indentation
pub fn to_pretty_string(value: &Value) -> String {
    format!("{:#}", value)
}
