// mod.rs - Plain-text input loaders

pub mod text;

pub use text::{read_column_header, read_tokens, METADATA_COLUMNS};
