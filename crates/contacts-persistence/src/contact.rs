use super::Result;
use async_trait::async_trait;
use contacts_core::contact::{Contact, NewContact};

/// Durable storage of contacts. Implementations assign `id` and `created_at`.
#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Persists a new contact and returns the full record
    async fn create(&self, data: NewContact) -> Result<Contact>;
    /// All contacts, newest first
    async fn list_all(&self) -> Result<Vec<Contact>>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>>;
    /// Removes the contact, returns `false` if there was none with the given id
    async fn delete_by_id(&self, id: &str) -> Result<bool>;
}
