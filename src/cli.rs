use clap::Parser;
use std::path::PathBuf;

/// Schemapad - derive a JSON preview document from a nested field schema
#[derive(Parser, Debug, Clone)]
#[command(name = "schemapad", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "SCHEMAPAD_CONFIG", default_value = "schemapad.toml")]
    pub config: PathBuf,

    /// Seed tree to start from (JSON, YAML or TOML)
    #[arg(short, long, env = "SCHEMAPAD_SEED")]
    pub seed: Option<PathBuf>,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, env = "SCHEMAPAD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Also print the field tree as JSON
    #[arg(long)]
    pub tree: bool,

    /// Hand the preview to the submit sink after printing it
    #[arg(long)]
    pub submit: bool,
}
