use schemapad::config::Settings;
use schemapad::editor::SchemaEditor;
use schemapad::seed::load_seed;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_settings_and_seed_from_root() -> anyhow::Result<()> {
    // Create a temporary directory
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    // Create schemapad.toml
    let schemapad_toml = r#"
[logging]
level = "debug"

[preview.placeholders]
string = "text"

[seed]
path = "fields.yaml"
"#;
    fs::write(root.join("schemapad.toml"), schemapad_toml)?;

    // Create a seed tree in YAML
    let seed_yaml = r#"
- name: name
  type: string
- name: address
  type: nested
  children:
    - name: line
      type: number
    - name: note
      type: string
      enabled: false
"#;
    fs::write(root.join("fields.yaml"), seed_yaml)?;

    // Load settings
    let settings = Settings::from_root(root)?;
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.preview.placeholders.string, "text");
    assert_eq!(settings.preview.placeholders.number, "number");

    // Seed paths are resolved by the caller
    let seed_path = root.join(settings.seed.path.as_ref().unwrap());
    let tree = load_seed(&seed_path)?;
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.field_count(), 4);

    let editor = SchemaEditor::with_tree(tree).with_projector(settings.preview.projector());
    assert_eq!(
        editor.preview(),
        &json!({"name": "text", "address": {"line": "number"}})
    );

    Ok(())
}

#[test]
fn test_settings_defaults_without_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = Settings::from_root(temp_dir.path())?;
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.preview.placeholders.string, "STRING");
    assert!(settings.seed.path.is_none());
    Ok(())
}

#[test]
fn test_invalid_settings_are_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("schemapad.json"),
        r#"{"logging": {"level": "shouting"}, "seed": {"path": "fields.csv"}}"#,
    )?;

    let err = Settings::from_root(temp_dir.path()).unwrap_err().to_string();
    assert!(err.contains("Configuration validation failed"), "{}", err);
    assert!(err.contains("logging.level"), "{}", err);
    assert!(err.contains("seed.path"), "{}", err);
    Ok(())
}

#[test]
fn test_load_seed_json_and_toml() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let json_path = temp_dir.path().join("fields.json");
    fs::write(
        &json_path,
        r#"{"fields": [{"name": "meta", "type": "nested"}, {"name": "", "type": "string"}]}"#,
    )?;
    assert_eq!(load_seed(&json_path)?.preview(), json!({"meta": {}, "": ""}));

    let toml_path = temp_dir.path().join("fields.toml");
    fs::write(
        &toml_path,
        r#"
[[fields]]
name = "address"
type = "nested"

[[fields.children]]
name = "line"
type = "number"
"#,
    )?;
    assert_eq!(
        load_seed(&toml_path)?.preview(),
        json!({"address": {"line": "number"}})
    );

    Ok(())
}

#[test]
fn test_load_seed_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_seed(&temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(schemapad::seed::SeedError::Io(_))));
}
