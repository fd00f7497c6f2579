use crate::contact::NewContact;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email";
pub const PHONE_REQUIRED: &str = "Phone is required";

/// Errors rejecting a new contact before it reaches the store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name, email, and phone are required")]
    MissingRequiredField,

    #[error("Enter a valid email")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
    ];
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContactField::Name => write!(f, "name"),
            ContactField::Email => write!(f, "email"),
            ContactField::Phone => write!(f, "phone"),
        }
    }
}

/// Per-field error messages of a draft, `None` meaning the field is fine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Phone => self.phone,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Checks the required fields of a draft, the way the form shows them.
pub fn validate_fields(name: &str, email: &str, phone: &str) -> FieldErrors {
    let email_error = if email.trim().is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    };
    FieldErrors {
        name: name.trim().is_empty().then_some(NAME_REQUIRED),
        email: email_error,
        phone: phone.trim().is_empty().then_some(PHONE_REQUIRED),
    }
}

/// Presence is checked before shape, so a request missing any required field
/// always gets the same answer.
pub fn validate_new_contact(new_contact: &NewContact) -> Result<(), ValidationError> {
    if new_contact.name.trim().is_empty()
        || new_contact.email.trim().is_empty()
        || new_contact.phone.trim().is_empty()
    {
        return Err(ValidationError::MissingRequiredField);
    }
    if !is_valid_email(&new_contact.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
