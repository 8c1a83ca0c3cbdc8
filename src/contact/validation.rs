use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?\(?[0-9]{1,4}\)?(?:[-\s.]?\(?[0-9]{1,4}\)?){0,3}[-\s.]?[0-9]{1,9}$")
        .expect("phone pattern compiles")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in your name and phone number!")]
    MissingRequired,
    #[error("Invalid phone number!")]
    InvalidPhone,
    #[error("Invalid email address!")]
    InvalidEmail,
}

/// Whitespace is ignored, so "+1 (555) 123-4567" is accepted.
pub fn validate_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A contact form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Lead {
    /// Checks the raw field values in form order and stops at the first
    /// problem. An empty email counts as not given.
    pub fn from_form(name: &str, phone: &str, email: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        let phone = phone.trim();
        let email = email.trim();

        if name.is_empty() || phone.is_empty() {
            return Err(ContactError::MissingRequired);
        }
        if !validate_phone(phone) {
            return Err(ContactError::InvalidPhone);
        }
        if !email.is_empty() && !validate_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
        })
    }
}
