use anyhow::Result;
use clap::Parser;
use contacts_client::{
    api::HttpContactsApi,
    app::ContactApp,
    command::{Command, HELP},
    view::StateView,
};
use log::info;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
struct Config {
    /// Base url of the contacts API
    #[arg(default_value_t = String::from("http://localhost:5000"), long, env = "CONTACTS_API_URL")]
    api_url: String,
}

async fn show(app: &ContactApp) {
    println!("{}", StateView(&app.snapshot().await));
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let conf = Config::parse();
    info!("using contacts API at {}", conf.api_url);

    let app = ContactApp::new(Arc::new(HttpContactsApi::new(&conf.api_url)?));
    app.load_contacts().await;
    show(&app).await;
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match command {
            Command::Field(field, value) => {
                app.set_field(field, &value).await;
                app.blur(field).await;
            }
            Command::Message(value) => app.set_message(&value).await,
            Command::Blur(field) => app.blur(field).await,
            Command::Submit => app.submit().await,
            Command::Delete(row) => match app.contact_id_at(row).await {
                Some(id) => app.delete(&id).await,
                None => {
                    println!("no contact in row {row}");
                    continue;
                }
            },
            Command::Refresh => app.refresh().await,
            Command::Show => {}
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }
        show(&app).await;
    }
    Ok(())
}
