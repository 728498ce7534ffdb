use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use recipes::{Menu, RecipeDb};

#[derive(Parser)]
#[command(name = "recipes")]
#[command(about = "Create, list and select recipes from the console")]
struct Cli {
    /// Path to the SQLite database file (created if missing)
    #[arg(long, value_name = "PATH", env = "RECIPES_DATABASE", default_value = "recipes.db")]
    database: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so they never interleave with the menu on stdout.
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let db = RecipeDb::new(&args.database)
        .await
        .with_context(|| format!("Failed to open recipe database {:?}", args.database))?;
    info!(database = ?args.database, "starting recipe menu");

    let mut menu = Menu::new(db.clone(), io::stdin().lock(), io::stdout());
    let result = menu.run().await;
    db.close().await;
    result.context("Console I/O failed")
}
