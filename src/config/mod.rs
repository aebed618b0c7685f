//! Configuration module for Quarry.
//!
//! Loads semantic model documents from JSON or TOML.

mod loader;

pub use loader::{load_model_from_file, load_model_from_str, LoadError, ModelFormat};
