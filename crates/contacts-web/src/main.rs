use anyhow::Result;
use clap::Parser;
use config::Config;
use contacts_api::get_db_context;
use contacts_api::service::create_service_context;
use log::info;

mod api_docs;
mod config;
mod constants;
mod data;
mod error;
mod handlers;
mod router;
#[cfg(test)]
mod tests;

// MAIN
#[macro_use]
extern crate lazy_static;
lazy_static! {
    pub static ref CONFIG: Config = Config::parse();
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let conf = CONFIG.clone();
    let api_config = contacts_api::Config {
        surreal_db_connection: conf.surreal_db_connection.clone(),
    };

    // the store connection has to be up before any route can serve traffic
    let db = get_db_context(&api_config).await?;
    let service_context = create_service_context(db).await?;

    router::rocket_main(conf, service_context)?.launch().await?;

    info!("web server was shut down...");
    Ok(())
}
