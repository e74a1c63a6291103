// src/importer.rs

use crate::error::Result;
use crate::symlib_models::SymDocument;
use log::debug;

/// Parses a symbol-library document from its JSON form.
///
/// An unknown record `type` is rejected here, so nothing reaches the
/// converter that its mapping does not cover.
pub fn import_document(json: &str) -> Result<SymDocument> {
    let document: SymDocument = serde_json::from_str(json)?;
    debug!(
        "Imported document: {} component(s), {} symbol(s), {} footprint(s)",
        document.components.len(),
        document.symbols.len(),
        document.footprints.len()
    );
    Ok(document)
}
