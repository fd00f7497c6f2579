use crate::util::date::DateTimeUtc;
use serde::{Deserialize, Serialize};

/// A persisted contact record, in the shape it travels over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned, immutable identifier
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    /// Assigned at creation, the only sort key (newest first)
    pub created_at: DateTimeUtc,
}

/// The fields of a contact before the store assigned `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NewContact {
    pub fn new(name: &str, email: &str, phone: &str, message: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            message: message.map(|m| m.to_owned()),
        }
    }

    /// Trims the required fields and drops a blank message.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            message: self.message.filter(|m| !m.trim().is_empty()),
        }
    }
}
