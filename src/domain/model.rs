use bytes::Bytes;

/// Default filename suggested when saving the processed result.
pub const PROCESSED_FILENAME: &str = "processed_file.xlsx";

/// The user-chosen local file, held in memory for the session.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub contents: Bytes,
}

/// The processed result returned by the server, ready to be saved.
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    pub contents: Bytes,
    pub suggested_filename: String,
}

impl ProcessedFile {
    pub fn new(contents: Bytes) -> Self {
        Self {
            contents,
            suggested_filename: PROCESSED_FILENAME.to_string(),
        }
    }
}

/// Single source of truth for which controls are enabled and which
/// status indicator is shown. Exactly one value is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Uninstantiated,
    FileReceived,
    Processing,
    FileReady,
    Error,
}
