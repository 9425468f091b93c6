use std::path::PathBuf;
use tdx_client::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let Some(file) = std::env::args().nth(1).map(PathBuf::from) else {
        error!("usage: people_import <file>");
        return Ok(());
    };

    let config = Config::new();
    info!("Using TDX base URL {}", config.rest_api.base_url);
    let client = Client::new(config)?;

    if let Err(e) = client.login().await {
        error!("Login failed, try again on the next run: {e}");
        return Ok(());
    }

    let response = client.import_people_from_path(&file).await?;
    if response.is_success() {
        info!("✓ Import submitted: {}", response.body);
    } else {
        error!("Import rejected: {}", response);
    }

    Ok(())
}
