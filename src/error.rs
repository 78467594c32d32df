use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid ratio: {0}")]
    InvalidRatio(String),

    #[error("{} doesn't exist.", .0.display())]
    MissingInput(PathBuf),

    #[error("Line count mismatch: {queries} queries vs {gold} gold labels (pass --truncate to pair up to the shorter file)")]
    LengthMismatch { queries: usize, gold: usize },

    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;
