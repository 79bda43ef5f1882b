//! Unified application error type.
//! Engine, collaborators, config and cli all return AppError so the
//! pipeline can turn any failure into a single warning string.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Collaborator errors
    // ---------------------------
    #[error("{0}")]
    Calendar(String),

    #[error("{0}")]
    Board(String),

    #[error("{0}")]
    Delivery(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {0}. Run `dailybrief init` first.")]
    ConfigMissing(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
