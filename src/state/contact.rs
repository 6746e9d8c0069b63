use crate::api::SubmissionService;
use crate::common::FormError;
use crate::config::DEFAULT_TOAST_MESSAGE;
use crate::models::ContactMessage;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum ContactState {
    #[default]
    Idle,
    Submitting,
}

/// Identifies one in-flight submission. Completing with a stale ticket is a no-op.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SubmitTicket(u64);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Toast {
    id: u64,
    message: String,
}

impl Toast {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ContactForm {
    fields: ContactMessage,
    state: ContactState,
    pending: Option<SubmitTicket>,
    toast: Option<Toast>,
    toast_message: String,
    next_id: u64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_MESSAGE)
    }
}

impl ContactForm {
    pub fn new(toast_message: impl Into<String>) -> Self {
        Self {
            fields: ContactMessage::default(),
            state: ContactState::Idle,
            pending: None,
            toast: None,
            toast_message: toast_message.into(),
            next_id: 0,
        }
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactMessage {
        &mut self.fields
    }

    pub fn state(&self) -> ContactState {
        self.state
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.state == ContactState::Submitting
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Starts a simulated submission. The caller finishes it with [`Self::complete`]
    /// once the delay has elapsed.
    pub fn submit(&mut self) -> Result<SubmitTicket, FormError> {
        if self.state == ContactState::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        self.fields.validate()?;

        let ticket = SubmitTicket(self.issue_id());
        self.pending = Some(ticket);
        self.state = ContactState::Submitting;
        Ok(ticket)
    }

    /// Finishes the submission `ticket` refers to and raises the success toast.
    /// Returns `Ok(None)` when the ticket was cancelled or superseded.
    pub fn complete<S>(
        &mut self,
        ticket: SubmitTicket,
        service: &S,
    ) -> Result<Option<Toast>, FormError>
    where
        S: SubmissionService + ?Sized,
    {
        if self.pending != Some(ticket) {
            log::debug!("Dropping stale contact submission {:?}", ticket);
            return Ok(None);
        }
        self.pending = None;
        self.state = ContactState::Idle;
        service.submit_contact(&self.fields)?;

        let toast = Toast {
            id: self.issue_id(),
            message: self.toast_message.clone(),
        };
        self.toast = Some(toast.clone());
        Ok(Some(toast))
    }

    /// Abandons any in-flight submission, e.g. when the page goes away.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.state = ContactState::Idle;
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Auto-dismiss for toast `id`. A newer toast is left alone.
    pub fn expire_toast(&mut self, id: u64) -> bool {
        match &self.toast {
            Some(toast) if toast.id == id => {
                self.toast = None;
                true
            }
            _ => false,
        }
    }

    fn issue_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
