//! Semantic model loading.
//!
//! A model document has three optional sections. In TOML:
//! ```toml
//! [[metrics]]
//! name = "revenue"
//! table = "orders"
//! sql = "SUM(orders.amount)"
//!
//! [[dimensions]]
//! name = "created_at"
//! table = "orders"
//! sql = "created_at"
//!
//! [[joins]]
//! one = "customers"
//! many = "orders"
//! join = "orders.customer_id = customers.id"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{ModelDocument, SemanticModel};

/// Error type for model loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Model file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read model file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse JSON model: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML model: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),
}

/// Serialization format of a model document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Json,
    Toml,
}

impl ModelFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(ModelFormat::Json),
            Some("toml") => Ok(ModelFormat::Toml),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a model document from a string.
pub fn load_model_from_str(content: &str, format: ModelFormat) -> Result<SemanticModel, LoadError> {
    let doc: ModelDocument = match format {
        ModelFormat::Json => serde_json::from_str(content)?,
        ModelFormat::Toml => toml::from_str(content)?,
    };

    tracing::debug!(
        metrics = doc.metrics.len(),
        dimensions = doc.dimensions.len(),
        joins = doc.joins.len(),
        "loaded semantic model"
    );

    Ok(doc.into())
}

/// Load a model document from a `.json` or `.toml` file.
pub fn load_model_from_file<P: AsRef<Path>>(path: P) -> Result<SemanticModel, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let format = ModelFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    load_model_from_str(&content, format)
}
