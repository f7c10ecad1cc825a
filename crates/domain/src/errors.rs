use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),

    #[error("File '{0}' not found.")]
    InputNotFound(String),

    #[error("'{0}' is not a file.")]
    NotAFile(String),

    #[error("No file path provided.")]
    NoInputPath,

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Failed to write report {0}: {1}")]
    ReportWriteError(String, String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
