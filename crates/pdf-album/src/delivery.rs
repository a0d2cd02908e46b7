//! Delivery of the assembled document to disk.

use crate::types::{AssembledDocument, Result};
use std::path::Path;

/// Write the assembled bytes to `path`. The document itself stays
/// untouched, so the caller can offer the save action again.
pub async fn save_document(document: &AssembledDocument, path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path.as_ref(), &document.bytes).await?;
    Ok(())
}
