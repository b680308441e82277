use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::{
    api::ApiClient,
    domain::{AppError, ProcessedFile, SelectedFile},
    utils::has_accepted_extension,
};

#[derive(Clone)]
pub struct UploadCoordinator {
    api_client: ApiClient,
}

impl UploadCoordinator {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// Opens the file picker, restricted to a single CSV file.
    pub async fn choose_source_file(&self) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .add_filter("Spreadsheet (CSV)", &["csv"])
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    /// Reads the picked file into memory. The filename must already have
    /// passed the extension check; this only covers filesystem failures.
    pub async fn load_file(&self, path: PathBuf) -> Result<SelectedFile, AppError> {
        let name = file_name_of(&path)?;

        let contents = tokio::fs::read(&path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        Ok(SelectedFile {
            name,
            contents: Bytes::from(contents),
        })
    }

    /// Sends the file to the processing server and wraps the response as a
    /// saveable result.
    pub async fn upload(&self, file: SelectedFile) -> Result<ProcessedFile, AppError> {
        if !has_accepted_extension(&file.name) {
            return Err(AppError::InvalidFileType);
        }

        let contents = self
            .api_client
            .upload_file(&file.name, file.contents)
            .await
            .map_err(|e| AppError::Transfer(e.to_string()))?;

        Ok(ProcessedFile::new(contents))
    }

    /// Opens the save dialog with the suggested result filename.
    pub async fn choose_save_path(&self, suggested_filename: String) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .set_file_name(&suggested_filename)
            .save_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    /// Writes the processed bytes to the chosen path.
    pub async fn save_result(&self, path: PathBuf, contents: Bytes) -> Result<PathBuf, AppError> {
        tokio::fs::write(&path, &contents)
            .await
            .map_err(|e| AppError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

        Ok(path)
    }
}

fn file_name_of(path: &Path) -> Result<String, AppError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| AppError::Io(format!("Path {} has no usable filename", path.display())))
}
