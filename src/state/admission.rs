use crate::api::SubmissionService;
use crate::common::FormError;
use crate::models::AdmissionInquiry;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum AdmissionState {
    #[default]
    Idle,
    Submitted,
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct AdmissionForm {
    fields: AdmissionInquiry,
    state: AdmissionState,
}

impl AdmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &AdmissionInquiry {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut AdmissionInquiry {
        &mut self.fields
    }

    pub fn state(&self) -> AdmissionState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == AdmissionState::Submitted
    }

    /// Hands the inquiry to `service`; the state only advances once it is accepted.
    pub fn submit<S>(&mut self, service: &S) -> Result<AdmissionState, FormError>
    where
        S: SubmissionService + ?Sized,
    {
        if self.is_submitted() {
            return Ok(self.state);
        }
        self.fields.validate()?;
        service.submit_admission(&self.fields)?;
        self.state = AdmissionState::Submitted;
        Ok(self.state)
    }

    /// "Submit another inquiry": back to an empty form.
    pub fn submit_another(&mut self) {
        *self = Self::default();
    }
}
