//! Seed trees
//!
//! A seed is a JSON, YAML or TOML document describing the initial fields.
//! JSON and YAML accept either a bare list of fields or a table with a
//! `fields` list; TOML only the latter.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::domain::{Field, FieldTree, TreeError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported seed format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid seed tree: {0}")]
    Tree(#[from] TreeError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Yaml,
    Toml,
}

impl SeedFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            other => Err(SeedError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    List(Vec<Field>),
    Table { fields: Vec<Field> },
}

impl SeedDocument {
    fn into_fields(self) -> Vec<Field> {
        match self {
            SeedDocument::List(fields) => fields,
            SeedDocument::Table { fields } => fields,
        }
    }
}

/// Parse a seed document
pub fn parse_seed(content: &str, format: SeedFormat) -> Result<FieldTree, SeedError> {
    let document: SeedDocument = match format {
        SeedFormat::Json => serde_json::from_str(content)?,
        SeedFormat::Yaml => serde_yaml::from_str(content)?,
        SeedFormat::Toml => toml::from_str(content)?,
    };
    Ok(FieldTree::from_fields(document.into_fields())?)
}

/// Read and parse a seed file, picking the format from its extension
pub fn load_seed(path: &Path) -> Result<FieldTree, SeedError> {
    let format = SeedFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let tree = parse_seed(&content, format)?;
    tracing::info!(
        "Loaded seed tree from {} ({} fields)",
        path.display(),
        tree.field_count()
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldType;
    use serde_json::json;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SeedFormat::from_path(Path::new("a.json")).unwrap(), SeedFormat::Json);
        assert_eq!(SeedFormat::from_path(Path::new("a.yml")).unwrap(), SeedFormat::Yaml);
        assert_eq!(SeedFormat::from_path(Path::new("a.yaml")).unwrap(), SeedFormat::Yaml);
        assert_eq!(SeedFormat::from_path(Path::new("a.toml")).unwrap(), SeedFormat::Toml);
        assert!(matches!(
            SeedFormat::from_path(Path::new("a.txt")),
            Err(SeedError::UnsupportedFormat(ext)) if ext == "txt"
        ));
    }

    #[test]
    fn test_parse_json_list() {
        let tree = parse_seed(
            r#"[
                {"name": "name", "type": "string"},
                {"name": "class", "type": "number", "enabled": true}
            ]"#,
            SeedFormat::Json,
        )
        .unwrap();
        assert_eq!(tree.preview(), json!({"name": "STRING", "class": "number"}));
    }

    #[test]
    fn test_parse_yaml_nested() {
        let yaml = r#"
fields:
  - name: address
    type: nested
    children:
      - name: line
        type: number
      - type: string
"#;
        let tree = parse_seed(yaml, SeedFormat::Yaml).unwrap();
        assert_eq!(tree.get(&[0]).unwrap().field_type(), FieldType::Nested);
        assert_eq!(tree.preview(), json!({"address": {"line": "number", "": ""}}));
    }

    #[test]
    fn test_parse_toml_table() {
        let toml = r#"
[[fields]]
name = "name"
type = "string"

[[fields]]
name = "class"
type = "number"
enabled = false
"#;
        let tree = parse_seed(toml, SeedFormat::Toml).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.preview(), json!({"name": "STRING"}));
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let content = r#"[
            {"id": "2f1d7e1e-4a8b-4c5f-9f57-0b7a1f1c2d3e", "type": "string"},
            {"id": "2f1d7e1e-4a8b-4c5f-9f57-0b7a1f1c2d3e", "type": "number"}
        ]"#;
        let err = parse_seed(content, SeedFormat::Json).unwrap_err();
        assert!(matches!(err, SeedError::Tree(TreeError::DuplicateId(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let err = parse_seed(r#"[{"name": "x", "type": "boolean"}]"#, SeedFormat::Json).unwrap_err();
        assert!(matches!(err, SeedError::Json(_)));
    }
}
