//! CLI for running schema migrations outside the server startup path
//! (CI, operations).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use server_core::Config;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Parser)]
#[command(name = "migrate_cli")]
#[command(about = "Schema migration CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply all pending migrations
    Run,

    /// List known migrations
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            let config = Config::from_env().context("Failed to load configuration")?;
            let pool = PgPool::connect(&config.database_url)
                .await
                .context("Failed to connect to database")?;

            MIGRATOR
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            println!("Migrations applied");
        }
        Commands::List => {
            for migration in MIGRATOR.iter() {
                println!("{:>4}  {}", migration.version, migration.description);
            }
        }
    }

    Ok(())
}
