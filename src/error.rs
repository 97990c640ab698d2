use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions of a generation run. None of them is retried.
#[derive(Error, Debug)]
pub enum SelectorGenError {
    /// Input HTML missing or unreadable
    #[error("Failed to read input '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output directory could not be created or cleared
    #[error("Failed to prepare output directory '{}': {source}", path.display())]
    PrepareOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file missing or unreadable
    #[error("Failed to read config '{}': {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid YAML for `AppConfig`
    #[error("Failed to parse config '{}': {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A generated file could not be written
    #[error("Failed to write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SelectorGenError>;
