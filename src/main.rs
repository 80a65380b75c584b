//! users-api server: reads configuration from the environment (and `.env`), then serves.

use tracing_subscriber::EnvFilter;
use users_api::{bootstrap, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("users_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    bootstrap::run(config).await?;
    Ok(())
}
