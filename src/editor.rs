//! Editor session
//!
//! [`SchemaEditor`] owns the current tree snapshot and the preview derived
//! from it. Each operation builds a new tree; the snapshot is only replaced
//! when the operation succeeds, and the preview is recomputed right after.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::{Field, FieldId, FieldTree, FieldUpdate, TreeError};
use crate::projector::{self, Projector};

/// Receiver for the submitted preview document
pub trait SubmitSink {
    fn submit(&mut self, preview: &Value) -> anyhow::Result<()>;
}

/// Sink that writes the submitted preview to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl SubmitSink for LoggingSink {
    fn submit(&mut self, preview: &Value) -> anyhow::Result<()> {
        info!("Submitted schema preview: {}", preview);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SchemaEditor {
    tree: FieldTree,
    preview: Value,
    projector: Projector,
}

impl SchemaEditor {
    /// Editor over an empty tree
    pub fn new() -> Self {
        Self::with_tree(FieldTree::new())
    }

    /// Editor over a caller-supplied seed tree
    pub fn with_tree(tree: FieldTree) -> Self {
        let projector = Projector::default();
        let preview = projector.project(tree.fields());
        Self {
            tree,
            preview,
            projector,
        }
    }

    /// Replace the projector and recompute the preview
    pub fn with_projector(mut self, projector: Projector) -> Self {
        self.projector = projector;
        self.preview = self.projector.project(self.tree.fields());
        self
    }

    pub fn tree(&self) -> &FieldTree {
        &self.tree
    }

    pub fn preview(&self) -> &Value {
        &self.preview
    }

    /// Preview as pretty JSON
    pub fn preview_text(&self) -> String {
        projector::to_pretty_string(&self.preview)
    }

    /// Append a fresh field to the sequence at `path` and return its id
    pub fn append_child(&mut self, path: &[usize]) -> Result<FieldId, TreeError> {
        let field = FieldTree::create_field();
        let id = field.id;
        self.append_field(path, field)?;
        Ok(id)
    }

    /// Append a prepared field to the sequence at `path`
    pub fn append_field(&mut self, path: &[usize], field: Field) -> Result<(), TreeError> {
        let result = self.tree.append_field(path, field);
        self.commit("append", path, result)
    }

    pub fn update_field(&mut self, path: &[usize], update: &FieldUpdate) -> Result<(), TreeError> {
        let result = self.tree.update_field(path, update);
        self.commit("update", path, result)
    }

    pub fn remove_field(&mut self, path: &[usize]) -> Result<(), TreeError> {
        let result = self.tree.remove_field(path);
        self.commit("remove", path, result)
    }

    /// Hand the current preview to `sink`
    pub fn submit<S: SubmitSink + ?Sized>(&self, sink: &mut S) -> anyhow::Result<()> {
        sink.submit(&self.preview)
    }

    fn commit(
        &mut self,
        op: &str,
        path: &[usize],
        result: Result<FieldTree, TreeError>,
    ) -> Result<(), TreeError> {
        match result {
            Ok(tree) => {
                debug!(op, ?path, "Applied field tree operation");
                self.preview = self.projector.project(tree.fields());
                self.tree = tree;
                Ok(())
            }
            Err(e) => {
                warn!(op, ?path, "Rejected field tree operation: {}", e);
                Err(e)
            }
        }
    }
}

impl Default for SchemaEditor {
    fn default() -> Self {
        Self::new()
    }
}
