use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Stored history could not be decoded: {0}")]
    HistoryDecode(#[from] serde_json::Error),
    #[error("History storage failed: {0}")]
    Storage(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
