//! Contact form validation.
//!
//! Validation only; delivering the message is the surrounding application's
//! concern.

use optique_core::{Email, EmailError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating a contact submission.
#[derive(Debug, Error, Clone)]
pub enum ContactError {
    /// A required field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// The email address is not structurally valid.
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Raw contact form submission, exactly as the form posts it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// A validated contact message, with trimmed fields and a parsed email.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Validated sender address.
    pub email: Email,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Validate the submission.
    ///
    /// All fields are trimmed and required; the email must parse.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, field order matching the form.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = required(&self.name, "name")?;
        let email = Email::parse(&self.email)?;
        let subject = required(&self.subject, "subject")?;
        let message = required(&self.message, "message")?;
        Ok(ContactMessage {
            name,
            email,
            subject,
            message,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "  Hanta R.  ".to_owned(),
            email: "Hanta@Example.MG".to_owned(),
            subject: "Commande".to_owned(),
            message: "Ma monture est-elle disponible en écaille ?".to_owned(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed_and_normalized() {
        let message = form().validate().unwrap();
        assert_eq!(message.name, "Hanta R.");
        assert_eq!(message.email.as_str(), "hanta@example.mg");
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        for field in ["name", "subject", "message"] {
            let mut f = form();
            match field {
                "name" => f.name = "   ".to_owned(),
                "subject" => f.subject = String::new(),
                _ => f.message = "\n".to_owned(),
            }
            assert!(matches!(
                f.validate(),
                Err(ContactError::MissingField(got)) if got == field
            ));
        }
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut f = form();
        f.email = "pas-une-adresse".to_owned();
        assert!(matches!(f.validate(), Err(ContactError::InvalidEmail(_))));
    }
}
