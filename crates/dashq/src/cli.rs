//! CLI argument definitions using clap

use anyhow::Result;
use clap::Parser;

use crate::output::OutputFormat;

/// A CLI to explore Amazon QuickSight dashboard metadata
#[derive(Parser)]
#[command(name = "dashq")]
#[command(author, version, about)]
#[command(long_about = "A CLI to explore Amazon QuickSight dashboard metadata.\n\n\
    Connect to a QuickSight account, verify the connection, and list or\n\
    describe its dashboards directly from the command line.")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Verify the configured QuickSight connection
    Check,

    /// List dashboards in the connected account (first page)
    List {
        /// Output format
        #[arg(long, short, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Show details for a single dashboard
    Describe {
        /// Dashboard id
        dashboard_id: String,

        /// Output format
        #[arg(long, short, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Initialize dashq with a QuickSight connection
    Init {
        /// AWS account id to scope dashboard calls to
        #[arg(long)]
        account_id: Option<String>,

        /// AWS region the QuickSight account lives in
        #[arg(long)]
        region: Option<String>,

        /// Named AWS profile to resolve credentials from
        #[arg(long)]
        profile: Option<String>,

        /// Auto-confirm prompts (e.g. the verification probe)
        #[arg(long, short)]
        yes: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Clone, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Check) => crate::commands::check::run().await,
            Some(Commands::List { output }) => {
                crate::commands::list::run(crate::commands::list::ListArgs {
                    output,
                    quiet: self.quiet,
                })
                .await
            }
            Some(Commands::Describe {
                dashboard_id,
                output,
            }) => {
                crate::commands::describe::run(crate::commands::describe::DescribeArgs {
                    dashboard_id,
                    output,
                })
                .await
            }
            Some(Commands::Init {
                account_id,
                region,
                profile,
                yes,
            }) => {
                crate::commands::init::run(crate::commands::init::InitArgs {
                    account_id,
                    region,
                    profile,
                    yes,
                })
                .await
            }
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::generate_completions(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => {
                // Show help when no subcommand is given
                use clap::CommandFactory;
                let mut cmd = Self::command();
                cmd.print_help()?;
                println!();
                Ok(())
            }
        }
    }
}
