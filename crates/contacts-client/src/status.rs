use std::fmt;

pub const CONTACT_ADDED: &str = "Contact added successfully!";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";
pub const CONTACT_DELETED: &str = "Contact deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete";
pub const CONTACTS_REFRESHED: &str = "Contacts refreshed!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatusKind::Success => write!(f, "success"),
            StatusKind::Error => write!(f, "error"),
        }
    }
}

/// A transient banner message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn success(message: &str) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.to_owned(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.to_owned(),
        }
    }
}
