//! Data layer — the static crop definition table.
//!
//! The built-in table in `crops` covers the base game; `load_crops_json`
//! accepts an externally supplied table in the same schema. Malformed data
//! is a hard error at this boundary — a definition with an unknown season
//! or special-handling tag would otherwise flow through the engine and
//! produce confidently-wrong profit figures.

mod crops;

pub use crops::all_crops;

use tracing::debug;

use crate::shared::CropDefinition;

/// Errors loading an external crop table.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("malformed crop table: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate crop name `{0}`")]
    DuplicateName(String),
}

/// Parse an externally supplied crop table (a JSON array of definitions).
pub fn load_crops_json(json: &str) -> Result<Vec<CropDefinition>, DataError> {
    let crops: Vec<CropDefinition> = serde_json::from_str(json)?;

    for (i, crop) in crops.iter().enumerate() {
        if crops[..i].iter().any(|c| c.name == crop.name) {
            return Err(DataError::DuplicateName(crop.name.clone()));
        }
    }

    debug!(count = crops.len(), "loaded crop definitions");
    Ok(crops)
}
