use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("no child named '{name}' under '{parent}'")]
    ChildNotFound { parent: String, name: String },

    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}
