use thiserror::Error;

/// Raised while building an [`AttributeSpace`](crate::attributes::AttributeSpace).
///
/// These are startup errors: the attribute list itself is wrong and has to be
/// fixed by whoever wrote it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("too many attributes: {count} (a space holds at most {max})")]
    TooManyAttributes { count: usize, max: usize },

    #[error("duplicate attribute name: {0}")]
    DuplicateName(String),

    #[error("invalid attribute name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

/// A name that is not part of the attribute space it was looked up in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown attribute: {0}")]
pub struct UnknownAttributeError(pub String);

#[derive(Error, Debug)]
pub enum SkinmatchError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("{0}")]
    UnknownAttribute(#[from] UnknownAttributeError),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SkinmatchError>;
