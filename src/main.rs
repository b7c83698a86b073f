use std::env::{args, var};
use std::sync::Arc;

use tracing::*;
use tracing_subscriber::fmt::format::FmtSpan;

use property_client::{Config, FileStore, PropertyApi};

use crate::cli::Command;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logs();

    let command = cli::parse_args(args().skip(1))?;
    let config = Config::from_env()?;
    info!("Starting property client : {}", config.api_url);

    let store = Arc::new(FileStore::new(&config.session_file));
    let api = PropertyApi::new(&config, store)?;

    match command {
        Command::Fetch(id) => {
            let property = api.fetch_property_by_id(&id).await?;
            println!("{}", serde_json::to_string_pretty(&property)?);
        }
        Command::Load(id) => {
            let loaded = api.load_property(&id).await?;
            info!("Property {} loaded from {:?}", id, loaded.source);
            println!("{}", serde_json::to_string_pretty(&loaded.property)?);
        }
        Command::Create(fields) => {
            let form = cli::build_form(fields).await?;
            let property = api.create_property(form).await?;
            println!("{}", serde_json::to_string_pretty(&property)?);
        }
    }

    Ok(())
}

fn init_logs() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(var("LOG_LEVEL").unwrap_or("hyper=info,reqwest=info,cookie_store=info,info".to_string()))
        .with_span_events(FmtSpan::CLOSE).init();
}
