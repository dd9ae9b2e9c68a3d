use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OffhoursError>;

#[derive(Error, Debug)]
pub enum OffhoursError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Not a git repository: {0}")]
    NotARepository(String),
    #[error("git log failed ({status}): {stderr}")]
    GitCommand { status: ExitStatus, stderr: String },
    #[error("git log timed out after {0:?}")]
    Timeout(Duration),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid work hours: {0}")]
    InvalidWorkHours(String),
}
