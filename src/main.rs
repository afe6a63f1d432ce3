use env_logger::Env;
use log::info;
use web::{DegenPicksServer, PicksAppData, WebConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = WebConfig::from_env()?;

    info!(
        "upstream: {}",
        config.fpl_api_url.as_deref().unwrap_or("<not configured>")
    );

    let data = PicksAppData::new(config)?;

    DegenPicksServer::new(data).run().await?;

    Ok(())
}
