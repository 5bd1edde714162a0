//! Interactive initialization command
//!
//! Collects the QuickSight account id, region, and optional profile, saves
//! them to the dashq config file, and offers to verify the connection with
//! the standard probe. Secrets are never written; static keys only work if
//! added to the config by hand.

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use dashq_client::quicksight::QuickSightClient;
use dashq_core::config::{AwsCredentials, Config, ConnectionConfig};

pub struct InitArgs {
    pub account_id: Option<String>,
    pub region: Option<String>,
    pub profile: Option<String>,
    pub yes: bool,
}

pub async fn run(args: InitArgs) -> Result<()> {
    let theme = ColorfulTheme::default();

    let account_id = match args.account_id {
        Some(id) => {
            println!("{} {}", "Using account:".bold(), id);
            id
        }
        None => Input::with_theme(&theme)
            .with_prompt("AWS account id")
            .interact_text()
            .context("account id prompt cancelled")?,
    };

    let region = match args.region {
        Some(region) => {
            println!("{} {}", "Using region:".bold(), region);
            region
        }
        None => Input::with_theme(&theme)
            .with_prompt("AWS region")
            .default("us-east-1".to_string())
            .interact_text()
            .context("region prompt cancelled")?,
    };

    let profile = match args.profile {
        Some(profile) => Some(profile),
        None => {
            let entered: String = Input::with_theme(&theme)
                .with_prompt("AWS profile (empty for the default credential chain)")
                .allow_empty(true)
                .interact_text()
                .context("profile prompt cancelled")?;
            if entered.is_empty() { None } else { Some(entered) }
        }
    };

    let mut credentials = AwsCredentials::new(region);
    credentials.profile = profile;

    let config = Config {
        connection: ConnectionConfig {
            aws_account_id: account_id,
            credentials,
        },
    };

    let config_path = config.save()?;
    println!(
        "\n{} Saved configuration to {}",
        "✓".green().bold(),
        config_path.display()
    );

    let verify = args.yes
        || Confirm::with_theme(&theme)
            .with_prompt("Verify the connection now?")
            .default(true)
            .interact()
            .context("verification prompt cancelled")?;

    if verify {
        let client = QuickSightClient::connect(&config.connection).await?;
        client.test_connection().await?;
        println!("{} Connection verified.", "✓".green().bold());
    } else {
        println!(
            "Run {} once your credentials are in place.",
            "dashq check".cyan().bold()
        );
    }

    Ok(())
}
