//! Shared helpers for CLI commands

use anyhow::{Context, Result};
use dashq_client::quicksight::QuickSightClient;
use dashq_core::config::Config;
use tracing::debug;

/// Load the saved config and build a QuickSight client from it.
pub async fn connect() -> Result<QuickSightClient> {
    let config = Config::load()?;
    debug!(
        account_id = %config.connection.aws_account_id,
        region = %config.connection.credentials.region,
        "loaded connection config"
    );
    let client = QuickSightClient::connect(&config.connection)
        .await
        .context("failed to build QuickSight client")?;
    Ok(client)
}
