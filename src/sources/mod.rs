// src/sources/mod.rs
use crate::utils::error::SourceError;
use std::path::Path;

/// Reads a whole source document into memory.
pub async fn load_document(path: &Path) -> Result<String, SourceError> {
    tracing::info!("Loading document from: {}", path.display());

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| {
            tracing::error!("Failed to read {}: {}", path.display(), source);
            SourceError::Unavailable { path: path.to_path_buf(), source }
        })?;

    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("baby1990.html");
        std::fs::write(&path, "<h3>Popularity in 1990</h3>").unwrap();

        let content = tokio_test::block_on(load_document(&path)).unwrap();
        assert_eq!(content, "<h3>Popularity in 1990</h3>");
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.html");

        let err = tokio_test::block_on(load_document(&path)).unwrap_err();
        match err {
            SourceError::Unavailable { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
        }
    }
}
