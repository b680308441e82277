use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid file type")]
    InvalidFileType,

    #[error("Upload failed: {0}")]
    Transfer(String),

    #[error("I/O error: {0}")]
    Io(String),
}
