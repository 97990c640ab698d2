use std::path::PathBuf;

use log::info;

use crate::cli::config::GenerateSettings;
use crate::error::{Result, SelectorGenError};
use crate::output::write_tables;
use crate::scan::{SelectorTables, scan_html};

pub const SUCCESS_MESSAGE: &str = "Selectors have been generated and saved in the output directory.";

/// Outcome of a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub tables: SelectorTables,
    pub written: Vec<PathBuf>,
}

/// Read the input page, scan it, and regenerate the output directory.
pub fn cmd_generate(settings: &GenerateSettings) -> Result<GenerateReport> {
    info!("Reading {}", settings.input.display());
    let html = std::fs::read_to_string(&settings.input).map_err(|source| {
        SelectorGenError::ReadInput {
            path: settings.input.clone(),
            source,
        }
    })?;

    let tables = scan_html(&html);

    info!(
        "Writing {} selectors to {}/",
        tables.total_entries(),
        settings.output_dir.display()
    );
    let written = write_tables(&settings.output_dir, &tables, &settings.extension)?;

    Ok(GenerateReport { tables, written })
}
