use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book with ID {0} not found.")]
    BookNotFound(u64),

    #[error("Invalid status '{0}'. Valid statuses: 'available', 'checked-out'.")]
    InvalidStatus(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    /// Lookup, validation and input errors leave the catalog untouched and
    /// can be reported to the user without ending the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ShelfError::BookNotFound(_) | ShelfError::InvalidStatus(_) | ShelfError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
