//! Gesture session errors
//!
//! One error type shared by the hook, the dispatcher and the lifecycle controller.

use thiserror::Error;

/// Errors that can occur while capturing or acting on gestures
#[derive(Error, Debug)]
pub enum GestureError {
    #[error("Hook installation failed: {0}")]
    HookInstall(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Input synthesis failed: {0}")]
    Synthesis(String),

    #[error("Dispatch failed: {0}")]
    Dispatch(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for gesture operations
pub type GestureResult<T> = Result<T, GestureError>;
