//! CLI administration tool for kv-shortener.
//!
//! Talks to the key-value store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- link create https://example.com
//!
//! # Look up a short code
//! cargo run --bin admin -- link get aB3xQ9
//!
//! # Delete a mapping
//! cargo run --bin admin -- link delete aB3xQ9
//!
//! # Check the store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORE_URL` or `STORE_HOST` / `STORE_PORT` / `STORE_PASSWORD` /
//! `STORE_DB`, plus `CODE_LENGTH`.

use kv_shortener::config::{self, StoreBackend};
use kv_shortener::server::connect_repository;
use kv_shortener::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing kv-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Key-value store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link for a URL
    Create {
        /// The URL to shorten
        url: String,
    },

    /// Show the URL stored under a short code
    Get {
        /// Short code to look up
        code: String,
    },

    /// Delete a short link
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Store diagnostic subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    if config.store_backend == StoreBackend::Memory {
        println!(
            "{}",
            "⚠️  STORE_BACKEND=memory: changes are discarded when this command exits".yellow()
        );
    }

    let repository = connect_repository(&config).await?;
    let state = AppState::new(repository, config.code_length);

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &state).await?,
        Commands::Store { action } => handle_store_action(action, &state).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, state: &AppState) -> Result<()> {
    match action {
        LinkAction::Create { url } => create_link(state, url).await?,
        LinkAction::Get { code } => get_link(state, &code).await?,
        LinkAction::Delete { code, yes } => delete_link(state, &code, yes).await?,
    }

    Ok(())
}

/// Creates a short link and prints its path.
async fn create_link(state: &AppState, url: String) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let mapping = state
        .link_service
        .shorten(url)
        .await
        .context("Failed to create short link")?;

    println!("  URL:       {}", mapping.long_url.cyan());
    println!("  Short URL: {}", mapping.short_path().bright_yellow().bold());
    println!();

    Ok(())
}

/// Prints the URL stored under `code`.
async fn get_link(state: &AppState, code: &str) -> Result<()> {
    match state.link_service.resolve(code).await {
        Ok(url) => {
            println!("  {} -> {}", code.bright_yellow(), url.cyan());
        }
        Err(kv_shortener::AppError::NotFound { .. }) => {
            println!("{}", format!("  No link found for '{}'", code).yellow());
        }
        Err(e) => return Err(e).context("Failed to look up short link"),
    }

    Ok(())
}

/// Deletes a mapping with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
/// - Reports codes that do not exist instead of failing
async fn delete_link(state: &AppState, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();

    let url = match state.link_service.resolve(code).await {
        Ok(url) => url,
        Err(kv_shortener::AppError::NotFound { .. }) => {
            println!("{}", "⚠️  Short link not found".yellow());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to look up short link"),
    };

    println!("  Code: {}", code.bright_yellow());
    println!("  URL:  {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = state
        .link_service
        .delete(code)
        .await
        .context("Failed to delete short link")?;

    println!();
    if deleted {
        println!("{}", "✅ Link deleted".green().bold());
    } else {
        println!("{}", "⚠️  Link was already gone".yellow());
    }
    println!();

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_store_action(action: StoreAction, state: &AppState) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!("{}", "🔍 Checking store connection...".bright_blue());

            if !state.link_service.is_store_healthy().await {
                anyhow::bail!("Store did not answer PING");
            }

            println!("{}", "✅ Store connection OK".green().bold());
        }
    }

    Ok(())
}
