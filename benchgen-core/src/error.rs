use thiserror::Error;

/// Errors surfaced across the generation engine's public boundary.
///
/// Generators never retry internally; a failure from `init` or from a single
/// row/batch call is reported immediately to the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to load resource: {0}")]
    ResourceLoad(String),

    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn resource_load(msg: impl Into<String>) -> Self {
        Error::ResourceLoad(msg.into())
    }

    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Error::NotImplemented(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
