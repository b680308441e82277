pub mod error;
pub mod model;

pub use error::AppError;
pub use model::{ProcessedFile, SelectedFile, Status, PROCESSED_FILENAME};
