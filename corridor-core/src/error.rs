use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CorridorReportError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("Request to '{url}' failed: {message}")]
    NetworkError { url: String, message: String },
    #[error("Failed to extract route details: {0}")]
    ExtractionError(String),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("Serializing report failed: {0}")]
    SerializationError(String),
    #[error("Error creating a runtime to handle async code: {0}")]
    TokioError(String),
    #[error("{0}")]
    InternalError(String),
}

impl CorridorReportError {
    /// helper for the common case of a failed request against a feed url.
    pub fn network<E: std::fmt::Display>(url: &str, error: E) -> Self {
        Self::NetworkError {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
