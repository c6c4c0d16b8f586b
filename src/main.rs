use clap::Parser;
use schemapad::cli::Cli;
use schemapad::config::Settings;
use schemapad::domain::FieldTree;
use schemapad::editor::{LoggingSink, SchemaEditor};
use schemapad::seed::load_seed;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;

    // Initialize tracing on stderr so stdout carries only the preview
    tracing_subscriber::fmt()
        .with_max_level(settings.logging.max_level()?)
        .with_writer(std::io::stderr)
        .init();

    let tree = match &settings.seed.path {
        Some(path) => load_seed(path)?,
        None => FieldTree::new(),
    };
    info!("Starting schemapad with {} root fields", tree.len());

    let editor = SchemaEditor::with_tree(tree).with_projector(settings.preview.projector());

    if cli.tree {
        println!("{}", serde_json::to_string_pretty(editor.tree())?);
    }
    println!("{}", editor.preview_text());

    if cli.submit {
        editor.submit(&mut LoggingSink)?;
    }

    Ok(())
}
