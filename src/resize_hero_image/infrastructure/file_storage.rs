use super::error::InfrastructureError;
use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    // 出力先ディレクトリは作成しない。存在しなければエラー
    pub async fn save_image_impl(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        let to_storage_error = |source: std::io::Error| InfrastructureError::FileStorageError {
            path: path.display().to_string(),
            source,
        };
        let mut file = File::create(path).await.map_err(to_storage_error)?;
        file.write_all(data).await.map_err(to_storage_error)?;
        file.flush().await.map_err(to_storage_error)?;
        debug!(path = %path.display(), bytes = data.len(), "Image written");
        Ok(())
    }

    pub async fn read_image_impl(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError> {
        let data = fs::read(path)
            .await
            .map_err(|source| InfrastructureError::FileStorageError {
                path: path.display().to_string(),
                source,
            })?;
        debug!(path = %path.display(), bytes = data.len(), "Image read");
        Ok(data)
    }
}

impl Default for LocalFileStorage {
    fn default() -> Self {
        Self::new()
    }
}
