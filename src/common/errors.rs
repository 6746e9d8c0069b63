use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Field {0:?} is required")]
    MissingField(&'static str),

    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Submission failed: {0}")]
    Submit(#[from] SubmitError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Local storage is unavailable")]
    Unavailable,

    #[error("Local storage access failed: {0}")]
    Access(String),
}
