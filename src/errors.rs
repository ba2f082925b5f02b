//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid link: {0}")]
    InvalidLink(#[from] url::ParseError),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Add at least one character before {0}.")]
    EmptyBoard(&'static str),

    #[error("Invalid image '{path}': {reason}")]
    InvalidImage { path: String, reason: String },

    #[error("Invalid slot: {}", .0 + 1)]
    InvalidSlot(usize),

    #[error("Slot {} has no image yet", .0 + 1)]
    EmptySlot(usize),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ---------------------------
    // Board lookup
    // ---------------------------
    #[error("Board '{0}' could not be found.")]
    BoardNotFound(String),

    #[error("Could not load example board: {0}")]
    ExampleBoard(String),

    #[error("The file '{0}' already exists (use --force to overwrite)")]
    FileExists(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,
}

pub type AppResult<T> = Result<T, AppError>;
