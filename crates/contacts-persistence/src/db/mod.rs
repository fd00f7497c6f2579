use super::Result;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
};

pub mod contact;

/// Where and under which namespace/database the contacts live
#[derive(Debug, Clone)]
pub struct SurrealDbConfig {
    pub connection_string: String,
    pub namespace: String,
    pub database: String,
}

impl Default for SurrealDbConfig {
    fn default() -> Self {
        Self {
            connection_string: "ws://localhost:8800".to_string(),
            namespace: "default".to_string(),
            database: "contacts".to_string(),
        }
    }
}

impl SurrealDbConfig {
    pub fn new(connection_string: &str) -> Self {
        Self {
            connection_string: connection_string.to_owned(),
            ..Default::default()
        }
    }
}

pub async fn get_surreal_db(config: &SurrealDbConfig) -> Result<Surreal<Any>> {
    let db = connect(&config.connection_string).await?;
    db.use_ns(&config.namespace)
        .use_db(&config.database)
        .await?;
    Ok(db)
}

#[cfg(test)]
pub async fn get_memory_db(namespace: &str, database: &str) -> Result<Surreal<Any>> {
    let db = connect("mem://").await?;
    db.use_ns(namespace).use_db(database).await?;
    Ok(db)
}
