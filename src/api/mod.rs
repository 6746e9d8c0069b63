use serde::Serialize;

use crate::common::SubmitError;
use crate::models::{AdmissionInquiry, ContactMessage};

/// Where the site's two forms hand their data off.
/// A real backend would implement this; the site ships with [`SimulatedBackend`].
pub trait SubmissionService {
    fn submit_admission(&self, inquiry: &AdmissionInquiry) -> Result<(), SubmitError>;

    fn submit_contact(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// JSON body a backend would receive for `form`.
pub fn payload<T: Serialize>(form: &T) -> Result<String, SubmitError> {
    serde_json::to_string(form).map_err(|e| SubmitError::Rejected(e.to_string()))
}

/// Accepts every submission without sending it anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedBackend;

impl SubmissionService for SimulatedBackend {
    fn submit_admission(&self, inquiry: &AdmissionInquiry) -> Result<(), SubmitError> {
        // Mock implementation - nothing leaves the browser
        log::info!("Simulated admission inquiry accepted: {}", payload(inquiry)?);
        Ok(())
    }

    fn submit_contact(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        log::info!("Simulated contact message accepted: {}", payload(message)?);
        Ok(())
    }
}
