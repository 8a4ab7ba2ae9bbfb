use thiserror::Error;
use crate::domain::error::DomainError; // 寸法計算の失敗をそのまま包む

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Image processing failed: {0}")]
    ImageProcessingError(String),

    #[error("File storage error at {path}: {source}")]
    FileStorageError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Underlying image library error: {0}")]
    ImageLibError(#[from] image::ImageError),

    #[error("JPEG encoding failed: {0}")]
    JpegEncodeError(#[from] jpeg_encoder::EncodingError),

    #[error("Underlying I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Domain Error Wrapper: {0}")]
    DomainErrorWrapper(#[from] DomainError),
}
