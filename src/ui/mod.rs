use iced::{
    widget::{button, column, row, text, Space},
    Element, Length,
};

use crate::domain::Status;

/// Main view state
pub struct UploadView {
    pub file_name: Option<String>,
    pub status: Status,
    pub status_message: String,
}

impl Default for UploadView {
    fn default() -> Self {
        Self {
            file_name: None,
            status: Status::Uninstantiated,
            status_message: "Select a CSV file to upload".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum UploadMessage {
    PickFilePressed,
    UploadPressed,
    RemovePressed,
    SavePressed,
}

impl UploadView {
    /// Upload is gated so a second submission cannot start while one is in
    /// flight.
    pub fn upload_enabled(&self) -> bool {
        self.file_name.is_some() && self.status != Status::Processing
    }

    pub fn save_enabled(&self) -> bool {
        self.status == Status::FileReady
    }

    fn status_indicator(&self) -> &'static str {
        match self.status {
            Status::Uninstantiated | Status::FileReceived => "",
            Status::Processing => "⏳ Processing…",
            Status::FileReady => "✅ Ready",
            Status::Error => "❌ Failed",
        }
    }

    pub fn view(&self) -> Element<'_, UploadMessage> {
        let mut content = column![
            text("Spreadsheet Upload & Download").size(32),
            Space::new().height(Length::Fixed(20.0)),
            row![
                button("Choose CSV File")
                    .on_press(UploadMessage::PickFilePressed)
                    .padding([10, 20]),
                button("Send")
                    .on_press_maybe(self.upload_enabled().then_some(UploadMessage::UploadPressed))
                    .padding([10, 20]),
            ]
            .spacing(10),
        ];

        if let Some(name) = &self.file_name {
            content = content.push(
                row![
                    text(name).size(16),
                    button("✕")
                        .on_press(UploadMessage::RemovePressed)
                        .padding([2, 8]),
                ]
                .spacing(10),
            );
        }

        content
            .push(Space::new().height(Length::Fixed(10.0)))
            .push(
                row![
                    button("Download Processed File")
                        .on_press_maybe(self.save_enabled().then_some(UploadMessage::SavePressed))
                        .padding([10, 20]),
                    text(self.status_indicator()).size(16),
                ]
                .spacing(10),
            )
            .push(text(&self.status_message).size(14))
            .padding(20)
            .spacing(10)
            .into()
    }
}
