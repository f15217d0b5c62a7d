//! Application services

mod auth;
mod recording_service;
mod study_service;

pub use auth::verify_caller;
pub use recording_service::{ProcessedRecording, RecordingService};
pub use study_service::StudyService;
