//! Error types shared by the tracker and the pairer.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("data file '{}' not found, run the tracker first", path.display())]
    StoreNotFound { path: PathBuf },

    #[error("not enough players: need at least {needed}, have {available}")]
    InsufficientPlayers { needed: usize, available: usize },

    #[error("invalid input '{input}', expected a non-negative number")]
    InvalidInput { input: String },

    #[error("player '{id}' not found")]
    PlayerNotFound { id: String },

    #[error("invalid timestamp '{input}'")]
    InvalidTimestamp { input: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
