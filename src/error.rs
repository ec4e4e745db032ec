//! Top-level error type returned from `main`.

use std::fmt;

use crate::core::config::ConfigError;

#[derive(Debug)]
pub enum AppError {
    /// Reading or writing the save file failed.
    Io(std::io::Error),
    Config(ConfigError),
    /// The windowing backend could not start or crashed.
    Gui(eframe::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "save file error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Gui(e) => write!(f, "window error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<eframe::Error> for AppError {
    fn from(e: eframe::Error) -> Self {
        AppError::Gui(e)
    }
}
