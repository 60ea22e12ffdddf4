use anyhow::Result;
use tracing::info;

use pricelens::modules::pricing::{PricingConfig, PricingTools};
use pricelens::server::ToolServer;
use pricelens::shared::utils::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logging();

    let config = PricingConfig::from_env();
    info!(
        endpoint = %config.endpoint,
        default_currency = %config.default_currency,
        "starting pricing tool server"
    );

    let server = ToolServer::new(PricingTools::new(config));
    server.run_stdio().await?;
    Ok(())
}
