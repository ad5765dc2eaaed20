use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use booth_budget::cli::{
    handle_income_command, handle_rent_command, handle_table_command, IncomeArgs, RentArgs,
    TableCommands,
};
use booth_budget::config::{paths::BoothPaths, settings::Settings};
use booth_budget::services::BudgetEngine;
use booth_budget::storage::{initialize_storage, needs_initialization, resolve_table};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "BOOTH_LOG";

#[derive(Parser)]
#[command(
    name = "booth",
    version,
    about = "Budget calculator for booth-renting beauty professionals",
    long_about = "booth turns a week's services, tips and retail sales, or a weekly \
                  booth rent, into an itemized budget with weekly, monthly and \
                  annual figures."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a budget from weekly income
    Income(IncomeArgs),

    /// Build a budget backwards from weekly booth rent
    Rent(RentArgs),

    /// Inspect the percentage table
    #[command(subcommand)]
    Table(TableCommands),

    /// Write default settings and an editable percentage table
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Initialize paths and settings
    let paths = BoothPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Income(args)) => {
            let (table, _) = resolve_table(&paths, &settings)?;
            let engine = BudgetEngine::new(&table).with_rent_policy(settings.rent_policy()?);
            handle_income_command(&engine, &settings, args)?;
        }
        Some(Commands::Rent(args)) => {
            let (table, _) = resolve_table(&paths, &settings)?;
            let engine = BudgetEngine::new(&table).with_rent_policy(settings.rent_policy()?);
            handle_rent_command(&engine, &settings, args)?;
        }
        Some(Commands::Table(cmd)) => {
            let (table, source) = resolve_table(&paths, &settings)?;
            handle_table_command(&table, &source, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing booth-budget at: {}", paths.base_dir().display());
            let created = initialize_storage(&paths)?;
            settings.save(&paths)?;
            if created {
                println!("Wrote default percentage table to {}", paths.table_file().display());
            } else {
                println!("Keeping existing table at {}", paths.table_file().display());
            }
            println!("Initialization complete!");
            println!();
            println!("Edit the table to match your business, then run 'booth table validate'.");
        }
        Some(Commands::Config) => {
            println!("booth-budget Configuration");
            println!("==========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            if needs_initialization(&paths) {
                println!(
                    "Table file:      {} (not written; run 'booth init')",
                    paths.table_file().display()
                );
            } else {
                println!("Table file:      {}", paths.table_file().display());
            }
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            match settings.default_cadence {
                Some(cadence) => println!("  Default cadence:  {}", cadence.label()),
                None => println!("  Default cadence:  all"),
            }
            println!("  Currency symbol:  {}", settings.currency_symbol);
            if let Some(path) = &settings.table_path {
                println!("  Table path:       {}", path.display());
            }
            match settings.rent_fallback_percent {
                Some(p) => println!("  Rent fallback:    {:.1}%", p * 100.0),
                None => println!("  Rent fallback:    none (Rent Expense line required)"),
            }
        }
        None => {
            println!("booth - budget calculator for booth renters");
            println!();
            println!("Run 'booth --help' for usage information.");
            println!("Run 'booth income --services 1000 --tips 200 --retail 300' to try it.");
        }
    }

    Ok(())
}
