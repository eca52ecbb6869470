use thiserror::Error;

use crate::render::RenderError;

/// Result type for universe operations
pub type CosmosResult<T> = Result<T, CosmosError>;

#[derive(Error, Debug)]
pub enum CosmosError {
    /// Startup-fatal: the configuration asks for something that cannot exist.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Fatal: rendering is local, so there is nothing to retry.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
