use serde::Serialize;

use crate::common::FormError;
use crate::models::Grade;

/// Fields of the admission inquiry form.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct AdmissionInquiry {
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub grade: Option<Grade>,
}

impl AdmissionInquiry {
    pub fn validate(&self) -> Result<(), FormError> {
        require("parent_name", &self.parent_name)?;
        require("email", &self.email)?;
        check_email(&self.email)?;
        require("phone", &self.phone)?;
        self.grade.ok_or(FormError::MissingField("grade"))?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.parent_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.grade.is_none()
    }
}

/// Fields of the contact page message form.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        check_email(&self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)?;
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

// Same shape the browser accepts for `type="email"`: `local@domain`, no whitespace.
fn check_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(FormError::InvalidEmail(email.to_string()))
    }
}
