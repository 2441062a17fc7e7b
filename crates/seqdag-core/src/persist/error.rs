//! Errors raised while saving or loading a graph.

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Reading or writing the underlying file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("binary encoding error: {0}")]
    Binary(#[from] postcard::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The image decoded but does not describe a valid sequence graph.
    #[error("corrupt graph image: {0}")]
    Corrupt(String),
}
