use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize game state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),
}

pub type GameResult<T> = Result<T, GameError>;
