pub mod upload_coordinator;

pub use upload_coordinator::UploadCoordinator;
