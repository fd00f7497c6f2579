use contacts_api::data::{Contact, NewContact};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub trait IntoWeb<T> {
    fn into_web(self) -> T;
}

pub trait FromWeb<T> {
    fn from_web(value: T) -> Self;
}

/// A response carrying only a human readable message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactWeb {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl IntoWeb<ContactWeb> for Contact {
    fn into_web(self) -> ContactWeb {
        ContactWeb {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

/// Missing fields become empty strings and are rejected by validation
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FromWeb<NewContactPayload> for NewContact {
    fn from_web(value: NewContactPayload) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            phone: value.phone.unwrap_or_default(),
            message: value.message,
        }
    }
}
