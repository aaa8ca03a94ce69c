//! Terrain Movement - Development Tools

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "terrain-tools")]
#[command(about = "Development tools for terrain movement data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate data files
    Validate {
        /// Path to data directory
        #[arg(default_value = "assets/data")]
        path: String,
    },
    /// Print per-kind, per-terrain costs for a data file
    Table {
        /// Path to a movement data file
        #[arg(default_value = "assets/data/movement.ron")]
        file: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating data files in: {path}");
            match terrain_tools::validate::validate_data_directory(Path::new(&path)) {
                Ok(count) => tracing::info!("Validation passed ({count} files)"),
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Table { file } => {
            match terrain_tools::table::cost_table_for_file(Path::new(&file)) {
                Ok(rows) => print!("{}", terrain_tools::table::render(&rows)),
                Err(e) => {
                    tracing::error!("Could not build cost table: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
