//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("{key} must be exactly one character, got {value:?}")]
    InvalidGlyph { key: &'static str, value: String },

    #[error("{key} must not be empty")]
    EmptyValue { key: &'static str },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
