use sgn_site::api::SubmissionService;
use sgn_site::common::{StorageError, SubmitError};
use sgn_site::models::*;
use sgn_site::state::{StyleScope, ThemeStore};

pub const THEME_KEY: &str = "theme";

pub fn get_filled_inquiry() -> AdmissionInquiry {
    AdmissionInquiry {
        parent_name: "Harpreet Sandhu".to_string(),
        email: "harpreet@example.com".to_string(),
        phone: "+91 98140 12345".to_string(),
        grade: Some(Grade::Primary),
    }
}

pub fn get_filled_message() -> ContactMessage {
    ContactMessage {
        name: "Gurleen Dhillon".to_string(),
        email: "gurleen@example.com".to_string(),
        subject: "Campus visit".to_string(),
        message: "Could we schedule a tour next Saturday?".to_string(),
    }
}

/// Records whether the dark marker is on and every theme it was handed.
#[derive(Debug, Default)]
pub struct RecordingScope {
    pub dark: bool,
    pub applied: Vec<Theme>,
}

impl StyleScope for RecordingScope {
    fn apply(&mut self, theme: Theme) {
        self.dark = theme.is_dark();
        self.applied.push(theme);
    }
}

/// A store whose every access fails, like a browser with storage disabled.
#[derive(Debug, Default)]
pub struct BrokenStore;

impl ThemeStore for BrokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn save(&mut self, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("quota exceeded".into()))
    }
}

/// Backend that turns every submission down.
#[derive(Debug, Default)]
pub struct RejectingBackend;

impl SubmissionService for RejectingBackend {
    fn submit_admission(&self, _inquiry: &AdmissionInquiry) -> Result<(), SubmitError> {
        Err(SubmitError::Rejected("admissions closed".into()))
    }

    fn submit_contact(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
        Err(SubmitError::Rejected("mailbox full".into()))
    }
}
