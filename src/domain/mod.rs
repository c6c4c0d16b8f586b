//! Schema tree domain types

pub mod error;
pub mod field;
pub mod tree;

pub use error::TreeError;
pub use field::{Field, FieldId, FieldKind, FieldType, FieldUpdate};
pub use tree::FieldTree;
