//! File-backed persistence for the inventory snapshot slot.

pub mod json_file;

pub use json_file::{DEFAULT_SLOT, JsonFileStore};
