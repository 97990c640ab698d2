use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectorGenError};
use crate::output::writer::DEFAULT_EXTENSION;

pub const DEFAULT_INPUT: &str = "source.html";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_CONFIG: &str = "selector-gen.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

/// Every flag is optional; a bare invocation reads `source.html` and writes
/// into `output/`.
#[derive(Parser, Debug)]
#[command(
    name = "selector-gen",
    version,
    about = "Generate camelCase selector tables from an HTML page"
)]
pub struct Cli {
    /// HTML file to scan (default: source.html)
    #[arg(long)]
    pub input: Option<String>,

    /// Directory receiving the generated modules (default: output)
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// File extension of the generated modules (default: js)
    #[arg(long)]
    pub extension: Option<String>,

    /// Path to config file (default: selector-gen.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `selector-gen.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub input: Option<String>,
    pub output_dir: Option<String>,
    pub extension: Option<String>,
}

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
///
/// A missing `selector-gen.yaml` is expected and stays silent; an explicitly
/// passed path that cannot be read or parsed is reported with a warning.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let explicit = path.is_some();
    let config_path = path.unwrap_or(DEFAULT_CONFIG);

    match try_load_config(Path::new(config_path)) {
        Ok(config) => {
            log::info!("Using config {}", config_path);
            config
        }
        Err(SelectorGenError::ReadConfig { source, .. })
            if !explicit && source.kind() == std::io::ErrorKind::NotFound =>
        {
            AppConfig::default()
        }
        Err(e) => {
            log::warn!("Ignoring config: {}", e);
            AppConfig::default()
        }
    }
}

/// Read and parse one config file.
pub fn try_load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| SelectorGenError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| SelectorGenError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Settings resolution: CLI > config > defaults
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
}

pub fn resolve_settings(cli: &Cli, config: &AppConfig) -> GenerateSettings {
    let input = cli
        .input
        .as_deref()
        .or(config.input.as_deref())
        .unwrap_or(DEFAULT_INPUT);
    let output_dir = cli
        .output_dir
        .as_deref()
        .or(config.output_dir.as_deref())
        .unwrap_or(DEFAULT_OUTPUT_DIR);
    let extension = cli
        .extension
        .as_deref()
        .or(config.extension.as_deref())
        .unwrap_or(DEFAULT_EXTENSION)
        .trim_start_matches('.');

    GenerateSettings {
        input: PathBuf::from(input),
        output_dir: PathBuf::from(output_dir),
        extension: extension.to_string(),
    }
}
