pub mod normalize;

pub use normalize::camel_case_key;
