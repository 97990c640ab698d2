pub mod form_fields;
pub mod scan_model;
pub mod scanner;

pub use scan_model::{Category, SelectorMap, SelectorTables};
pub use scanner::{scan_document, scan_html};
