use crate::Config;
use contacts_persistence::{ContactStoreApi, SurrealContactStore, SurrealDbConfig, get_surreal_db};
use log::info;
use std::sync::Arc;

pub use contacts_persistence::contact;

/// A container for all persistence related dependencies.
#[derive(Clone)]
pub struct DbContext {
    pub contact_store: Arc<dyn ContactStoreApi>,
}

/// Creates a new instance of the DbContext with the given SurrealDB configuration.
pub async fn get_db_context(conf: &Config) -> contacts_persistence::Result<DbContext> {
    let surreal_db_config = SurrealDbConfig::new(&conf.surreal_db_connection);
    let db = get_surreal_db(&surreal_db_config).await?;
    info!(
        "Connected to SurrealDB at {} ({}/{})",
        surreal_db_config.connection_string,
        surreal_db_config.namespace,
        surreal_db_config.database
    );

    let contact_store = Arc::new(SurrealContactStore::new(db));

    Ok(DbContext { contact_store })
}
