//! Tavern host entry point.

use tavern::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), services::ServiceError> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(mongo = config.uses_mongo(), "starting tavern");

    if let Err(e) = tavern::run(&config).await {
        tracing::error!(error = %e, "order failed");
        return Err(e);
    }

    tracing::info!("tavern closed");
    Ok(())
}
