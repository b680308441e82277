use std::path::PathBuf;

use iced::task::Handle;
use iced::Task;

use crate::api::{ApiClient, ApiConfig};
use crate::application::UploadCoordinator;
use crate::domain::{AppError, ProcessedFile, SelectedFile, Status};
use crate::ui::{UploadMessage, UploadView};

pub struct UploadApp {
    view: UploadView,
    coordinator: UploadCoordinator,
    selected: Option<SelectedFile>,
    processed: Option<ProcessedFile>,
    // Abort handle for the in-flight upload, if any
    upload_handle: Option<Handle>,
}

impl Default for UploadApp {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadApp {
    pub fn new() -> Self {
        let coordinator = UploadCoordinator::new(ApiClient::new(ApiConfig::load()));

        Self {
            view: UploadView::default(),
            coordinator,
            selected: None,
            processed: None,
            upload_handle: None,
        }
    }

    fn abort_upload(&mut self) {
        if let Some(handle) = self.upload_handle.take() {
            handle.abort();
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(UploadMessage),
    /// Result of the file picker dialog
    SourcePicked(Option<PathBuf>),
    /// Picked file read into memory
    FileLoaded(Result<SelectedFile, AppError>),
    /// Invalid-file alert closed
    AlertDismissed,
    /// Final result of the upload
    UploadFinished(Result<ProcessedFile, AppError>),
    /// Result of the save dialog
    SavePathSelected(Option<PathBuf>),
    SaveCompleted(Result<PathBuf, AppError>),
}

pub fn update(app: &mut UploadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => match ui_msg {
            UploadMessage::PickFilePressed => {
                let coordinator = app.coordinator.clone();

                return Task::perform(
                    async move { coordinator.choose_source_file().await },
                    Message::SourcePicked,
                );
            }
            UploadMessage::UploadPressed => {
                if app.view.status != Status::Processing {
                    if let Some(file) = app.selected.clone() {
                        // Drop any previous result before producing a new one
                        app.processed = None;
                        app.view.status = Status::Processing;
                        app.view.status_message = format!("Uploading {}…", file.name);

                        let coordinator = app.coordinator.clone();
                        let (task, handle) = Task::perform(
                            async move { coordinator.upload(file).await },
                            Message::UploadFinished,
                        )
                        .abortable();

                        app.upload_handle = Some(handle);
                        return task;
                    }
                }
            }
            UploadMessage::RemovePressed => {
                app.abort_upload();
                app.selected = None;
                app.processed = None;
                app.view.file_name = None;
                app.view.status = Status::Uninstantiated;
                app.view.status_message = "Select a CSV file to upload".to_string();
            }
            UploadMessage::SavePressed => {
                if app.view.save_enabled() {
                    if let Some(result) = &app.processed {
                        let coordinator = app.coordinator.clone();
                        let suggested = result.suggested_filename.clone();

                        return Task::perform(
                            async move { coordinator.choose_save_path(suggested).await },
                            Message::SavePathSelected,
                        );
                    }
                }
            }
        },
        Message::SourcePicked(Some(path)) => {
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();

            if !crate::utils::has_accepted_extension(filename) {
                // Rejection leaves the selection state untouched
                return invalid_file_alert();
            }

            let coordinator = app.coordinator.clone();

            return Task::perform(
                async move { coordinator.load_file(path).await },
                Message::FileLoaded,
            );
        }
        Message::SourcePicked(None) => {
            // User cancelled the picker
        }
        Message::FileLoaded(Ok(file)) => {
            // Replacing the selection invalidates any in-flight upload and
            // any previously produced result
            app.abort_upload();
            app.processed = None;
            app.view.file_name = Some(file.name.clone());
            app.view.status = Status::FileReceived;
            app.view.status_message = format!("{} ready to upload", file.name);
            app.selected = Some(file);
        }
        Message::FileLoaded(Err(e)) => {
            log::error!("Could not read selected file: {}", e);
            app.view.status_message = format!("Could not read file: {}", e);
        }
        Message::AlertDismissed => {}
        Message::UploadFinished(result) => {
            app.upload_handle = None;
            match result {
                Ok(processed) => {
                    app.view.status = Status::FileReady;
                    app.view.status_message =
                        format!("Processing complete, save as {}", processed.suggested_filename);
                    app.processed = Some(processed);
                }
                Err(e) => {
                    log::error!("Error uploading the file: {}", e);
                    app.view.status = Status::Error;
                    app.view.status_message = "Upload failed".to_string();
                }
            }
        }
        Message::SavePathSelected(Some(path)) => {
            if let Some(result) = &app.processed {
                let coordinator = app.coordinator.clone();
                let contents = result.contents.clone();

                return Task::perform(
                    async move { coordinator.save_result(path, contents).await },
                    Message::SaveCompleted,
                );
            }
        }
        Message::SavePathSelected(None) => {
            app.view.status_message = "Save cancelled".to_string();
        }
        Message::SaveCompleted(Ok(path)) => {
            app.view.status_message = format!("Saved: {}", path.display());
        }
        Message::SaveCompleted(Err(e)) => {
            log::error!("Could not save processed file: {}", e);
            app.view.status_message = format!("Could not save file: {}", e);
        }
    }
    Task::none()
}

pub fn view(app: &UploadApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}

fn invalid_file_alert() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("Invalid file type")
                .set_description("Only .csv files can be uploaded.")
                .show()
                .await;
        },
        |_| Message::AlertDismissed,
    )
}
