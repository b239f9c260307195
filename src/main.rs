use anyhow::Result;
use clap::{Parser, Subcommand};

use bill_splitter::cli::{handle_split_command, SplitArgs, SplitView};
use bill_splitter::config::{paths::SplitterPaths, settings::Settings};
use bill_splitter::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "billsplit",
    version,
    about = "Split shared expenses and work out who pays whom",
    long_about = "billsplit reads a group file listing participants and the expenses \
                  they shared, computes everyone's net balance, and prints a short \
                  list of payments that settles the group."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print balances and the settlement plan for a group file
    Settle(SplitArgs),

    /// Print only the balances for a group file
    #[command(alias = "bal")]
    Balances(SplitArgs),

    /// Write a default config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SplitterPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings.log_filter);

    match cli.command {
        Some(Commands::Settle(args)) => {
            handle_split_command(&settings, args, SplitView::Settlements)?;
        }
        Some(Commands::Balances(args)) => {
            handle_split_command(&settings, args, SplitView::Balances)?;
        }
        Some(Commands::Init) => {
            println!("Initializing bill-splitter at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Wrote {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("bill-splitter Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Settle threshold: {}", settings.settle_threshold);
            println!("  Decimal places:   {}", settings.decimal_places);
            println!("  Log filter:       {}", settings.log_filter);
        }
        None => {
            println!("billsplit - Split shared expenses and settle up");
            println!();
            println!("Run 'billsplit --help' for usage information.");
            println!("Run 'billsplit settle <FILE>' to settle a group.");
        }
    }

    Ok(())
}
