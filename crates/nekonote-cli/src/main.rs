mod export;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nekonote_core::LocaleFallback;
use tracing_subscriber::EnvFilter;

use crate::export::{render, JsonldCommands, MetaCommands};

#[derive(Debug, Parser)]
#[command(name = "nekonote")]
#[command(about = "Site configuration, SEO metadata and JSON-LD export")]
struct Cli {
    /// Directory holding site.yaml, pages.yaml, copy.yaml, footer.yaml and faq.yaml
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    /// Base URL, overriding NEXT_PUBLIC_APP_URL
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Locale miss policy: exact or default
    #[arg(long, global = true)]
    fallback: Option<LocaleFallback>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the normalized site descriptor
    Site,
    /// Print the public address
    Address,
    /// Print SEO metadata
    Meta {
        #[command(subcommand)]
        command: MetaCommands,
    },
    /// Print structured data
    Jsonld {
        #[command(subcommand)]
        command: JsonldCommands,
    },
    /// Print the copy bundle for a locale
    Copy { locale: String },
    /// Print the footer strings for a locale
    Footer { locale: String },
    /// Print the assistant descriptor
    Ai,
    /// Load and validate the configuration
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let app_config = nekonote_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(app_config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("nekonote: run with --help to list commands");
        return Ok(());
    };

    let config_dir = cli.config_dir.unwrap_or(app_config.config_dir);
    let base_url = cli.base_url.or(app_config.base_url);
    let policy = cli.fallback.unwrap_or(app_config.locale_fallback);

    let config = nekonote_core::load_site_config(&config_dir, base_url.as_deref())?;
    let output = render(&command, &config, policy)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
