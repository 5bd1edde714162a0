//! Connection check command
//!
//! Builds a client from the saved connection config and runs the single
//! ListDashboards probe against it.

use anyhow::Result;
use colored::Colorize;
use dashq_client::quicksight::QuickSightClient;
use dashq_core::config::Config;

pub async fn run() -> Result<()> {
    let config = Config::load()?;

    println!("{} {}", "Account:".bold(), config.connection.aws_account_id);
    println!(
        "{} {}",
        "Region:".bold(),
        config.connection.credentials.region
    );
    if let Some(ref profile) = config.connection.credentials.profile {
        println!("{} {}", "Profile:".bold(), profile);
    }
    if let Some(ref role_arn) = config.connection.credentials.assume_role_arn {
        println!("{} {}", "Assumed role:".bold(), role_arn.dimmed());
    }

    let client = QuickSightClient::connect(&config.connection).await?;

    print!("\n{} ", "QuickSight connection:".bold());
    match client.test_connection().await {
        Ok(()) => {
            println!("{}", "OK".green().bold());
            Ok(())
        }
        Err(err) => {
            println!("{}", "FAILED".red().bold());
            Err(err.into())
        }
    }
}
