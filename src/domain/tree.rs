//! Field tree
//!
//! The root of a schema is an ordered list of [`Field`]s. Every structural
//! operation takes a path of sibling indices, works on a copy and returns the
//! new tree, leaving `self` untouched. An empty path addresses the root
//! sequence.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::error::TreeError;
use super::field::{Field, FieldId, FieldKind, FieldUpdate};
use crate::projector::{self, NUMBER_PLACEHOLDER};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Field>", into = "Vec<Field>")]
pub struct FieldTree {
    fields: Vec<Field>,
}

impl FieldTree {
    /// An empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from caller-supplied fields, rejecting duplicate ids
    pub fn from_fields(fields: Vec<Field>) -> Result<Self, TreeError> {
        let mut seen = HashSet::new();
        check_unique_ids(&fields, &mut seen)?;
        Ok(Self { fields })
    }

    /// Build a tree from a sample JSON document.
    ///
    /// Objects become nested fields, the `"number"` placeholder and JSON
    /// numbers become number fields, everything else becomes a string field.
    /// A non-object document yields an empty tree.
    pub fn from_preview(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                fields: fields_from_map(map),
            },
            _ => Self::new(),
        }
    }

    /// A fresh field, as appended by [`FieldTree::append_child`]
    pub fn create_field() -> Field {
        Field::new()
    }

    /// Append a fresh field to the sequence at `path`
    pub fn append_child(&self, path: &[usize]) -> Result<Self, TreeError> {
        self.append_field(path, Self::create_field())
    }

    /// Append `field` to the sequence at `path`: the root when the path is
    /// empty, otherwise the children of the nested field it points at. Ids in
    /// `field` and its subtree must not already occur in the tree.
    pub fn append_field(&self, path: &[usize], field: Field) -> Result<Self, TreeError> {
        let mut seen = HashSet::new();
        collect_ids(&self.fields, &mut seen);
        check_unique_ids(std::slice::from_ref(&field), &mut seen)?;

        let mut next = self.clone();
        let sequence =
            sequence_mut(&mut next.fields, path).ok_or_else(|| TreeError::invalid_path(path))?;
        sequence.push(field);
        Ok(next)
    }

    /// Merge `update` over the field at `path`
    pub fn update_field(&self, path: &[usize], update: &FieldUpdate) -> Result<Self, TreeError> {
        let mut next = self.clone();
        let field = field_mut(&mut next.fields, path).ok_or_else(|| TreeError::invalid_path(path))?;
        field.apply(update);
        Ok(next)
    }

    /// Remove the field at `path` along with its subtree
    pub fn remove_field(&self, path: &[usize]) -> Result<Self, TreeError> {
        let (&index, parent) = path
            .split_last()
            .ok_or_else(|| TreeError::invalid_path(path))?;

        let mut next = self.clone();
        let sequence = sequence_mut(&mut next.fields, parent)
            .filter(|seq| index < seq.len())
            .ok_or_else(|| TreeError::invalid_path(path))?;
        sequence.remove(index);
        Ok(next)
    }

    /// The field at `path`, if any
    pub fn get(&self, path: &[usize]) -> Option<&Field> {
        let (&index, parent) = path.split_last()?;
        sequence(&self.fields, parent)?.get(index)
    }

    /// Path of the field carrying `id`
    pub fn find_path(&self, id: FieldId) -> Option<Vec<usize>> {
        let mut path = Vec::new();
        if find_in(&self.fields, id, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    /// Root-level fields
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Number of root-level fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields at every depth
    pub fn field_count(&self) -> usize {
        count(&self.fields)
    }

    /// Project this tree with the default placeholders
    pub fn preview(&self) -> Value {
        projector::project(&self.fields)
    }
}

impl TryFrom<Vec<Field>> for FieldTree {
    type Error = TreeError;

    fn try_from(fields: Vec<Field>) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl From<FieldTree> for Vec<Field> {
    fn from(tree: FieldTree) -> Self {
        tree.fields
    }
}

impl<'a> IntoIterator for &'a FieldTree {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn sequence<'a>(fields: &'a [Field], path: &[usize]) -> Option<&'a [Field]> {
    let mut current = fields;
    for &idx in path {
        current = current.get(idx)?.children()?;
    }
    Some(current)
}

fn sequence_mut<'a>(fields: &'a mut Vec<Field>, path: &[usize]) -> Option<&'a mut Vec<Field>> {
    let mut current = fields;
    for &idx in path {
        current = current.get_mut(idx)?.children_mut()?;
    }
    Some(current)
}

fn field_mut<'a>(fields: &'a mut Vec<Field>, path: &[usize]) -> Option<&'a mut Field> {
    let (&index, parent) = path.split_last()?;
    sequence_mut(fields, parent)?.get_mut(index)
}

fn find_in(fields: &[Field], id: FieldId, path: &mut Vec<usize>) -> bool {
    for (idx, field) in fields.iter().enumerate() {
        path.push(idx);
        if field.id == id {
            return true;
        }
        if let Some(children) = field.children() {
            if find_in(children, id, path) {
                return true;
            }
        }
        path.pop();
    }
    false
}

fn count(fields: &[Field]) -> usize {
    fields
        .iter()
        .map(|f| 1 + f.children().map(count).unwrap_or(0))
        .sum()
}

fn collect_ids(fields: &[Field], seen: &mut HashSet<FieldId>) {
    for field in fields {
        seen.insert(field.id);
        if let Some(children) = field.children() {
            collect_ids(children, seen);
        }
    }
}

fn check_unique_ids(fields: &[Field], seen: &mut HashSet<FieldId>) -> Result<(), TreeError> {
    for field in fields {
        if !seen.insert(field.id) {
            return Err(TreeError::DuplicateId(field.id));
        }
        if let Some(children) = field.children() {
            check_unique_ids(children, seen)?;
        }
    }
    Ok(())
}

fn fields_from_map(map: &serde_json::Map<String, Value>) -> Vec<Field> {
    map.iter()
        .map(|(name, value)| {
            let kind = match value {
                Value::Object(nested) => FieldKind::Nested(fields_from_map(nested)),
                Value::Number(_) => FieldKind::Number,
                Value::String(s) if s == NUMBER_PLACEHOLDER => FieldKind::Number,
                _ => FieldKind::String,
            };
            Field {
                name: name.clone(),
                kind,
                ..Field::new()
            }
        })
        .collect()
}
