use std::{io, path::PathBuf, sync::Arc};

use anyhow::Error;

use clap::Parser as _;

use roost_cli::{
    cli::{Args, parse_params},
    config::{Config, DEFAULT_CONFIG_PATH},
    http::{ApiClient, HttpTransport},
    module::run_command,
    output::Stdout,
};

use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // load config
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load(config_path)?;

    if config.api.access_token.is_empty() {
        tracing::warn!("no access token configured; set `ACCESS_TOKEN`");
    }

    let page_limit = config.api.page_limit();
    if page_limit.is_none() {
        tracing::warn!("page limit disabled; listings will follow every cursor");
    }

    let transport = HttpTransport::new(&config.api)?;
    let client = ApiClient::new(transport).max_pages(page_limit);

    let params = parse_params(&args.params);

    run_command(&args.module, Arc::new(client), Arc::new(Stdout), &params).await
}
