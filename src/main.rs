use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

mod bucket;
mod cli;
mod commands;
mod config;
mod confirm;
mod error;
mod s3_client;
mod utils;

use cli::{forced_versioning, Cli, Commands};
use config::StorageConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let config = StorageConfig::load_from_cli(&cli)?;

    match &cli.command {
        Commands::List {
            bucket,
            versioned,
            prefixes,
            exclude_prefixes,
        } => {
            commands::list::list_objects(
                bucket,
                *versioned,
                prefixes,
                exclude_prefixes,
                &config,
                cli.verbose,
            )
            .await
        }

        Commands::Delete {
            bucket,
            key,
            version_id,
        } => {
            commands::delete::delete_object(
                bucket,
                key,
                version_id.as_deref(),
                &config,
                cli.verbose,
                cli.yes,
            )
            .await
        }

        Commands::Clear {
            bucket,
            versioned,
            unversioned,
            prefixes,
            exclude_prefixes,
            max_cycles,
        } => {
            commands::clear::clear_bucket(
                bucket,
                forced_versioning(*versioned, *unversioned),
                prefixes,
                exclude_prefixes,
                *max_cycles,
                &config,
                cli.verbose,
                cli.yes,
            )
            .await
        }

        Commands::DeleteBucket {
            bucket,
            versioned,
            unversioned,
            max_cycles,
        } => {
            commands::delete_bucket::delete_bucket(
                bucket,
                forced_versioning(*versioned, *unversioned),
                *max_cycles,
                &config,
                cli.verbose,
                cli.yes,
            )
            .await
        }

        Commands::Policy { bucket } => {
            commands::policy::show_policy(bucket, &config, cli.verbose).await
        }
    }
}
