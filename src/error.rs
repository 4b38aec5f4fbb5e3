//! Error types for varnamala

use std::io;
use thiserror::Error;

/// Main error type for varnamala
#[derive(Error, Debug)]
pub enum VarnamalaError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for varnamala operations
pub type Result<T> = std::result::Result<T, VarnamalaError>;

impl From<String> for VarnamalaError {
    fn from(s: String) -> Self {
        VarnamalaError::Other(s)
    }
}

impl From<&str> for VarnamalaError {
    fn from(s: &str) -> Self {
        VarnamalaError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for VarnamalaError {
    fn from(e: serde_yaml::Error) -> Self {
        VarnamalaError::Catalog(format!("YAML error: {}", e))
    }
}
