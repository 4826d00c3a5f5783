//! Unified application error type.
//! The pure core never fails; sources, cache, config and CLI handlers
//! return AppError to keep the error handling consistent.

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
    // Feeds
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source error: {0}")]
    Source(String),

    #[error("A {0} refresh is already in flight")]
    RefreshInFlight(String),

    // ---------------------------
    // Cache
    // ---------------------------
    #[error("Cache error: {0}")]
    Cache(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors (CLI input)
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
