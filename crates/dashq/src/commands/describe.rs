//! Describe command — detail for a single dashboard

use anyhow::Result;

use super::common;
use crate::output::{OutputFormat, write_records};

pub struct DescribeArgs {
    pub dashboard_id: String,
    pub output: Option<OutputFormat>,
}

pub async fn run(args: DescribeArgs) -> Result<()> {
    let client = common::connect().await?;
    let detail = client.describe_dashboard(&args.dashboard_id).await?;

    let format = args.output.unwrap_or_default();
    write_records(&mut std::io::stdout(), &[detail], &format)?;

    Ok(())
}
