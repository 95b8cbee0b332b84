use thiserror::Error;

/// Result alias used across the builder API.
pub type Result<T> = std::result::Result<T, TagBuilderError>;

/// Broad classification of a [`TagBuilderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed an argument the builder cannot accept.
    InvalidArgument,
}

/// Misuse of the builder API, reported immediately and never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum TagBuilderError {
    /// A builder was constructed without a tag name.
    #[error("invalid argument: tag name must not be empty")]
    EmptyTagName,

    /// An attribute merge was attempted with an empty key.
    #[error("invalid argument: attribute key must not be empty")]
    EmptyAttributeKey,
}

impl TagBuilderError {
    /// The class of failure this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTagName | Self::EmptyAttributeKey => ErrorKind::InvalidArgument,
        }
    }
}
