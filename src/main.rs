use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use recipe_book::cli::{handle_export_command, handle_recipe_command, ExportArgs, RecipeCommands};
use recipe_book::config::{paths::RecipePaths, settings::Settings};
use recipe_book::logging::init_logging;
use recipe_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "recipes",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based recipe book",
    long_about = "Recipe Book keeps your recipes in a local SQLite file. Run it \
                  without arguments for the interactive interface, or use the \
                  subcommands to script it."
)]
struct Cli {
    /// Use this database file instead of the configured one
    #[arg(long, global = true, env = "RECIPE_BOOK_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Recipe(RecipeCommands),

    /// Export all recipes to a file
    Export(ExportArgs),

    /// Create the data directory, database and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = RecipePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings.log_level, &paths.log_dir())?;

    let storage = match cli.db {
        Some(db) => Storage::new(db),
        None => Storage::from_settings(&paths, &settings)?,
    };
    // The schema must exist before any screen or command touches it
    storage.initialize()?;

    match cli.command {
        None | Some(Commands::Tui) => {
            recipe_book::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Recipe(cmd)) => {
            handle_recipe_command(&storage, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Settings already exist: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
            }
            println!("Recipe book initialized at: {}", paths.base_dir().display());
            println!("Database: {}", storage.database_path().display());
            println!();
            println!("Run 'recipes add --help' to add your first recipe,");
            println!("or 'recipes' to open the interactive interface.");
        }
        Some(Commands::Config) => {
            let count = storage.recipes.count()?;
            println!("Recipe Book Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Database file:   {}", storage.database_path().display());
            println!("Log directory:   {}", paths.log_dir().display());
            println!();
            println!("Settings:");
            println!("  Log level:     {}", settings.log_level);
            println!("  Refresh delay: {} ms", settings.refresh_delay_ms);
            println!();
            println!("Recipes stored:  {}", count);
        }
    }

    Ok(())
}
