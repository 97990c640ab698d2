use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SelectorGenError};
use crate::scan::{SelectorMap, SelectorTables};

pub const DEFAULT_EXTENSION: &str = "js";

// ============================================================================
// Rendering
// ============================================================================

/// Render `map` as a CommonJS module exporting an object named `name`.
///
/// ```text
/// const idSelectors = {
///   userName: "#user-name"
/// };
///
/// module.exports = idSelectors;
/// ```
pub fn render_module(name: &str, map: &SelectorMap) -> String {
    format!(
        "const {name} = {};\n\nmodule.exports = {name};\n",
        render_object(map)
    )
}

/// Object literal with bare keys and JSON string values, two-space indent.
pub fn render_object(map: &SelectorMap) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }

    let lines: Vec<String> = map
        .iter()
        .map(|(key, selector)| format!("  {}: {}", key, string_literal(selector)))
        .collect();

    format!("{{\n{}\n}}", lines.join(",\n"))
}

fn string_literal(value: &str) -> String {
    // Serializing a &str cannot fail
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

// ============================================================================
// Filesystem
// ============================================================================

/// Create `dir`, or empty it of regular files if it already exists.
///
/// Subdirectories are left alone.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    let prepare_err = |source| SelectorGenError::PrepareOutput {
        path: dir.to_path_buf(),
        source,
    };

    if !dir.exists() {
        return fs::create_dir_all(dir).map_err(prepare_err);
    }

    for entry in fs::read_dir(dir).map_err(prepare_err)? {
        let path = entry.map_err(prepare_err)?.path();
        if path.is_file() {
            fs::remove_file(&path).map_err(prepare_err)?;
            debug!("Removed stale {}", path.display());
        }
    }

    Ok(())
}

/// Write one mapping to `<dir>/<name>.<extension>`.
pub fn write_mapping(dir: &Path, name: &str, map: &SelectorMap, extension: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{}.{}", name, extension));
    fs::write(&path, render_module(name, map)).map_err(|source| SelectorGenError::WriteOutput {
        path: path.clone(),
        source,
    })?;
    debug!("Wrote {} ({} entries)", path.display(), map.len());
    Ok(path)
}

/// Clear `dir` once, then write all five tables into it.
pub fn write_tables(dir: &Path, tables: &SelectorTables, extension: &str) -> Result<Vec<PathBuf>> {
    prepare_output_dir(dir)?;

    tables
        .iter()
        .map(|(category, map)| write_mapping(dir, category.module_name(), map, extension))
        .collect()
}
