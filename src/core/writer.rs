use crate::core::error::{Result, ShowcaseError};
use std::path::Path;

/// Persist generated content, replacing any existing file
pub async fn write_output(path: &Path, content: &str) -> Result<()> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());
    tokio::fs::write(path, content)
        .await
        .map_err(|e| ShowcaseError::write_failed(path, e))
}
