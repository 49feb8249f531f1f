use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use moneyview::core::log::init_logging;
use moneyview::core::{IndexCategory, Interval};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct PageOptions {
    /// Category: india, us, europe, currency, crypto, futures or stock
    category: IndexCategory,

    /// Asset to select; defaults to the first asset of the category
    #[arg(short, long)]
    asset: Option<String>,

    /// Chart interval: day, month or year
    #[arg(short, long, default_value_t = Interval::Year)]
    interval: Interval,
}

impl From<PageOptions> for moneyview::PageArgs {
    fn from(opts: PageOptions) -> Self {
        moneyview::PageArgs {
            category: opts.category,
            asset: opts.asset,
            interval: opts.interval,
        }
    }
}

impl From<Commands> for moneyview::AppCommand {
    fn from(cmd: Commands) -> moneyview::AppCommand {
        match cmd {
            Commands::Catalog => moneyview::AppCommand::Catalog,
            Commands::Show(page) => moneyview::AppCommand::Show(page.into()),
            Commands::Watch { page, passes } => moneyview::AppCommand::Watch {
                page: page.into(),
                passes,
            },
            Commands::Chart { page, output } => moneyview::AppCommand::Chart {
                page: page.into(),
                output,
            },
            Commands::Download {
                category,
                asset,
                output,
            } => moneyview::AppCommand::Download {
                category,
                asset,
                output,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List categories and their assets
    Catalog,
    /// Render a category page once with live quotes
    Show(PageOptions),
    /// Render a category page and refresh it periodically
    Watch {
        #[command(flatten)]
        page: PageOptions,

        /// Stop after this many refreshes
        #[arg(long)]
        passes: Option<u64>,
    },
    /// Export the price chart of an asset as JSON
    Chart {
        #[command(flatten)]
        page: PageOptions,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Save the raw data file of an asset
    Download {
        category: IndexCategory,
        asset: String,

        /// Target file or directory; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => moneyview::cli::setup::setup(),
        Some(cmd) => moneyview::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
