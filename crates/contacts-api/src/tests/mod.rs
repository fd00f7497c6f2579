#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use contacts_core::contact::{Contact, NewContact};
    use contacts_persistence::{ContactStoreApi, Result};

    // Need to wrap mocks, because traits are in a different crate
    mockall::mock! {
        pub ContactStoreApiMock {}

        #[async_trait]
        impl ContactStoreApi for ContactStoreApiMock {
            async fn create(&self, data: NewContact) -> Result<Contact>;
            async fn list_all(&self) -> Result<Vec<Contact>>;
            async fn find_by_id(&self, id: &str) -> Result<Option<Contact>>;
            async fn delete_by_id(&self, id: &str) -> Result<bool>;
        }
    }

    pub fn get_baseline_contact() -> Contact {
        Contact {
            id: "00000000-0000-0000-0000-000000000000".to_string(),
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: "1234567890".to_string(),
            message: None,
            created_at: Utc.timestamp_opt(1731593928, 0).unwrap(),
        }
    }
}
