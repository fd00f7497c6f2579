use super::{Error, Result};
use crate::persistence::contact::ContactStoreApi;
use async_trait::async_trait;
use contacts_core::contact::{Contact, NewContact};
use contacts_core::validation::validate_new_contact;
use log::info;
use std::sync::Arc;

#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Returns all contacts, newest first
    async fn get_contacts(&self) -> Result<Vec<Contact>>;

    /// Returns the contact with the given id, or `Error::NotFound`
    async fn get_contact(&self, id: &str) -> Result<Contact>;

    /// Validates and persists a new contact. Nothing is stored if validation fails.
    async fn add_contact(&self, data: NewContact) -> Result<Contact>;

    /// Deletes the contact with the given id, or fails with `Error::NotFound`
    async fn delete(&self, id: &str) -> Result<()>;
}

/// The contact service is responsible for managing the contacts
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStoreApi>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.store.list_all().await?;
        Ok(contacts)
    }

    async fn get_contact(&self, id: &str) -> Result<Contact> {
        match self.store.find_by_id(id).await? {
            Some(contact) => Ok(contact),
            None => Err(Error::NotFound),
        }
    }

    async fn add_contact(&self, data: NewContact) -> Result<Contact> {
        validate_new_contact(&data)?;
        let contact = self.store.create(data.normalized()).await?;
        info!("Added contact {}", contact.id);
        Ok(contact)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.get_contact(id).await?;
        // it might have been removed by a concurrent request in the meantime
        if !self.store.delete_by_id(id).await? {
            return Err(Error::NotFound);
        }
        info!("Deleted contact {id}");
        Ok(())
    }
}
