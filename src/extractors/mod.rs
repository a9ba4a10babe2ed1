// src/extractors/mod.rs
pub mod names;

// Re-export key extraction types for convenience
pub use names::{extract_names, NameExtractor};
