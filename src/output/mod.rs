pub mod writer;

pub use writer::{prepare_output_dir, render_module, write_mapping, write_tables};
