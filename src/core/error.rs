use thiserror::Error;

/// Errors surfaced by the recipe store and the command loop.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// Malformed user input. The menu reports it and keeps going.
    #[error("{0}")]
    Validation(String),

    /// Any failure coming back from the database.
    #[error("{0}")]
    Storage(#[from] sqlx::Error),

    /// Console read/write failure. Not recoverable.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl RecipeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        RecipeError::Validation(msg.into())
    }

    /// Whether the menu loop should report this error and continue.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RecipeError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
