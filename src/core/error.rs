// src/core/error.rs

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CrucibleError {
    Io(String),
    ParseError(String),
    InvalidConfig(String),
}

impl fmt::Display for CrucibleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrucibleError::Io(msg) => write!(f, "I/O error: {}", msg),
            CrucibleError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CrucibleError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for CrucibleError {}

impl From<io::Error> for CrucibleError {
    fn from(err: io::Error) -> Self {
        CrucibleError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CrucibleError {
    fn from(err: serde_json::Error) -> Self {
        CrucibleError::ParseError(err.to_string())
    }
}

impl From<String> for CrucibleError {
    fn from(err: String) -> Self {
        CrucibleError::InvalidConfig(err)
    }
}
