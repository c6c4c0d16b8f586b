//! # Schemapad - nested schema editor core
//!
//! Schemapad models a record schema as an ordered tree of fields (string,
//! number or nested) and derives a JSON preview document from it. A form or
//! other front end drives the tree through path-addressed operations and
//! renders the preview after every change.
//!
//! ## Quick Start
//!
//! ```rust
//! use schemapad::domain::{FieldType, FieldUpdate};
//! use schemapad::editor::SchemaEditor;
//!
//! let mut editor = SchemaEditor::new();
//! editor.append_child(&[]).unwrap();
//! editor
//!     .update_field(&[0], &FieldUpdate::new().name("address").field_type(FieldType::Nested))
//!     .unwrap();
//! editor.append_child(&[0]).unwrap();
//! editor
//!     .update_field(&[0, 0], &FieldUpdate::new().name("line").field_type(FieldType::Number))
//!     .unwrap();
//!
//! assert_eq!(
//!     editor.preview_text(),
//!     "{\n  \"address\": {\n    \"line\": \"number\"\n  }\n}"
//! );
//! ```
//!
//! ## Layout
//!
//! - **domain**: fields, the field tree and its operations
//! - **projector**: tree to JSON preview
//! - **editor**: editor session holding the current snapshot
//! - **seed**: seed trees from JSON, YAML or TOML
//! - **config**: settings for the `schemapad` binary

pub mod cli;
pub mod config;
pub mod domain;
pub mod editor;
pub mod projector;
pub mod seed;

pub use domain::{Field, FieldId, FieldKind, FieldTree, FieldType, FieldUpdate, TreeError};
pub use editor::SchemaEditor;
pub use projector::{project, Projector};
