use super::super::{Error, Result};
use crate::constants::{DB_CREATED_AT, DB_TABLE};
use crate::contact::ContactStoreApi;
use async_trait::async_trait;
use contacts_core::{
    contact::{Contact, NewContact},
    util::date,
};
use log::info;
use serde::{Deserialize, Serialize};
use surrealdb::{
    Surreal,
    engine::any::Any,
    sql::{Datetime, Thing},
};
use uuid::Uuid;

#[derive(Clone)]
pub struct SurrealContactStore {
    db: Surreal<Any>,
}

impl SurrealContactStore {
    const TABLE: &'static str = "contacts";

    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactStoreApi for SurrealContactStore {
    async fn create(&self, data: NewContact) -> Result<Contact> {
        let id = Uuid::new_v4().to_string();
        let entity = ContactDb {
            id: None,
            name: data.name,
            email: data.email,
            phone: data.phone,
            message: data.message,
            created_at: Datetime::from(date::now()),
        };
        let created: Option<ContactDb> = self
            .db
            .create((Self::TABLE, id.clone()))
            .content(entity)
            .await?;
        match created {
            None => Err(Error::InsertFailed(format!("contact {id}"))),
            Some(c) => {
                info!("Created contact {id}");
                Ok(c.into())
            }
        }
    }

    async fn list_all(&self) -> Result<Vec<Contact>> {
        let result: Vec<ContactDb> = self
            .db
            .query(format!(
                "SELECT * FROM type::table($table) ORDER BY {DB_CREATED_AT} DESC"
            ))
            .bind((DB_TABLE, Self::TABLE))
            .await?
            .take(0)?;
        Ok(result.into_iter().map(|c| c.into()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>> {
        let result: Option<ContactDb> = self.db.select((Self::TABLE, id.to_owned())).await?;
        Ok(result.map(|c| c.into()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let deleted: Option<ContactDb> = self.db.delete((Self::TABLE, id.to_owned())).await?;
        Ok(deleted.is_some())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub created_at: Datetime,
}

impl From<ContactDb> for Contact {
    fn from(value: ContactDb) -> Self {
        Self {
            id: value.id.map(|t| t.id.to_raw()).unwrap_or_default(),
            name: value.name,
            email: value.email,
            phone: value.phone,
            message: value.message,
            created_at: value.created_at.0,
        }
    }
}
