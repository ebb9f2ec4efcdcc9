use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Title cannot be empty.")]
    EmptyTitle,

    #[error("Invalid input.")]
    InvalidInput(String),

    #[error("Invalid choice.")]
    InvalidChoice(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, JournalError>;
