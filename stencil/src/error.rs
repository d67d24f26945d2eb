//! Error types raised while rendering and inserting templates.

use thiserror::Error;

/// Failures of the registry and document helpers.
///
/// `render` and `insert` log these and degrade to empty output; only
/// `try_render` hands them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StencilError {
    #[error("template \"{0}\" not found")]
    TemplateNotFound(String),

    #[error("container \"{0}\" not found")]
    ContainerNotFound(String),
}

pub type Result<T> = std::result::Result<T, StencilError>;
