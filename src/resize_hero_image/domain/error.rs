use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // 幅または高さが 0 になるリサイズは扱えない
    #[error("Computed dimensions are zero: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}
