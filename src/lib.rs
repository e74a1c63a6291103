// src/lib.rs

pub mod attributes;
pub mod converter;
pub mod error;
pub mod importer;
pub mod pin_name;
pub mod rectangle;
pub mod schlib_models;
pub mod style;
pub mod symlib_models;

use crate::error::Result;
use std::path::Path;

pub use converter::{ConvertOptions, convert};

/// Reads a JSON symbol-library document and converts it in one pass.
pub async fn convert_document_file(
    path: &Path,
    options: &ConvertOptions,
) -> Result<schlib_models::SchLibrary> {
    log::info!("Converting document {:?}", path);
    let json = tokio::fs::read_to_string(path).await?;
    let document = importer::import_document(&json)?;
    let library = convert(&document, options)?;
    log::info!(
        "Converted {} component(s) from {:?}",
        library.components.len(),
        path
    );
    Ok(library)
}
