pub mod synth;

pub use synth::{attribute_selector, id_selector, label_sibling_selector};
