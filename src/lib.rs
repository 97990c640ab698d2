//! Generate camelCase → CSS selector tables from a static HTML page.
//!
//! One run reads a page, scans it with five extraction passes (ids, names,
//! `data-testid`s, labels, form fields) and writes one CommonJS module per
//! table into a freshly cleared output directory.

pub mod cli;
pub mod error;
pub mod key;
pub mod output;
pub mod scan;
pub mod selector;

pub use error::SelectorGenError;
pub use scan::{Category, SelectorMap, SelectorTables, scan_document, scan_html};
