use thiserror::Error;
use crate::infrastructure::error::InfrastructureError; // InfrastructureError をラップするため

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Resize failed for {output}: {source}")]
    ResizeFailed {
        output: String,
        #[source]
        source: InfrastructureError,
    },

    #[error("Infrastructure error occurred: {0}")]
    InfrastructureError(#[from] InfrastructureError),
}
