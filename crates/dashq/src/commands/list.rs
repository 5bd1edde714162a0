//! List command — one page of dashboards in the connected account

use anyhow::Result;
use colored::Colorize;

use super::common;
use crate::output::{OutputFormat, write_records};

pub struct ListArgs {
    pub output: Option<OutputFormat>,
    pub quiet: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let client = common::connect().await?;
    let dashboards = client.list_dashboards().await?;

    let format = args.output.unwrap_or_default();
    write_records(&mut std::io::stdout(), &dashboards, &format)?;

    if !args.quiet {
        eprintln!(
            "\n{} {} dashboard(s) in account {}",
            "Found:".dimmed(),
            dashboards.len(),
            client.account_id()
        );
    }

    Ok(())
}
