//! Contact Form Validation
//!
//! Local checks only; nothing is sent anywhere.

use std::sync::OnceLock;

use regex::Regex;

use crate::notify::NotificationKind;

pub const MSG_EMPTY_FIELDS: &str = "Please fill in all fields!";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address!";
pub const MSG_SENT: &str = "Message sent successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    EmptyFields,
    InvalidEmail,
}

impl ContactError {
    pub fn message(&self) -> &'static str {
        match self {
            ContactError::EmptyFields => MSG_EMPTY_FIELDS,
            ContactError::InvalidEmail => MSG_INVALID_EMAIL,
        }
    }
}

/// Raw field values as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::EmptyFields);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Toast text and kind for a submit attempt
    pub fn submit_feedback(&self) -> (&'static str, NotificationKind) {
        match self.validate() {
            Ok(()) => (MSG_SENT, NotificationKind::Success),
            Err(e) => (e.message(), NotificationKind::Error),
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}
