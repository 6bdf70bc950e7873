//! Error types for word-to-pdf conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the word-to-pdf library.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Source directory missing or not a directory.
    #[error("Source directory does not exist or is not a directory: {0}")]
    SourceDirNotFound(PathBuf),

    /// Source directory could not be listed.
    #[error("Failed to read source directory '{path}': {message}")]
    SourceDirUnreadable { path: PathBuf, message: String },

    /// Target directory creation failed.
    #[error("Failed to create target directory '{path}': {message}")]
    TargetDirError { path: PathBuf, message: String },

    /// LibreOffice is not installed or not found in PATH.
    #[error("LibreOffice not found. Please install LibreOffice and ensure 'soffice' is in PATH")]
    LibreOfficeNotFound,

    /// Conversion process failed to start.
    #[error("Failed to start conversion process: {0}")]
    ProcessStartFailed(#[from] std::io::Error),

    /// A single document failed to convert.
    #[error("Conversion failed for '{path}': {message}")]
    ConversionFailed { path: PathBuf, message: String },

    /// Unsupported file format for the selected renderer.
    #[error("Unsupported file format: {extension}. Supported: .doc, .docx")]
    UnsupportedFormat { extension: String },

    /// Renderer session has been shut down.
    #[error("Renderer session has been shut down")]
    SessionClosed,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, ConversionError>;
