//! Command handlers. Each one turns the loaded [`SiteConfig`] into the JSON
//! value the page-rendering layer consumes.

use anyhow::Context;
use clap::Subcommand;
use nekonote_core::{
    faq_to_json_ld, LocaleFallback, LocaleTable, MetadataOverrides, PageKey, SiteConfig,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::Commands;

/// Sub-commands available under `meta`.
#[derive(Debug, Subcommand)]
pub enum MetaCommands {
    /// Site-wide default metadata
    Base,
    /// Metadata for one page
    Page {
        /// Page key (home, about, news, areasLocal, products, productsEC, projects, stores, faq)
        key: PageKey,
        /// JSON object whose top-level fields replace the page's own
        #[arg(long)]
        extra: Option<String>,
    },
}

/// Sub-commands available under `jsonld`.
#[derive(Debug, Subcommand)]
pub enum JsonldCommands {
    /// FAQPage from the default FAQ, or from a locale's area FAQ
    Faq {
        #[arg(long)]
        locale: Option<String>,
    },
    /// Business listing for the root layout
    Business,
}

/// Render `command` against `config`.
///
/// # Errors
///
/// Returns an error if `--extra` is not a valid overrides object or a
/// locale cannot be resolved under `policy`.
pub(crate) fn render(
    command: &Commands,
    config: &SiteConfig,
    policy: LocaleFallback,
) -> anyhow::Result<Value> {
    match command {
        Commands::Site => to_json(&config.site),
        Commands::Address => to_json(&config.address),
        Commands::Ai => to_json(&config.ai),
        Commands::Meta { command } => match command {
            MetaCommands::Base => to_json(&config.seo().base()),
            MetaCommands::Page { key, extra } => {
                let extra = extra.as_deref().map(parse_extra).transpose()?;
                to_json(&config.seo().page(*key, extra))
            }
        },
        Commands::Jsonld { command } => match command {
            JsonldCommands::Faq { locale: None } => to_json(&config.faq_json_ld()),
            JsonldCommands::Faq {
                locale: Some(locale),
            } => {
                let bundle = resolve(&config.copy, locale, policy)?;
                to_json(&faq_to_json_ld(&bundle.areas_local.faq))
            }
            JsonldCommands::Business => to_json(&config.local_business()),
        },
        Commands::Copy { locale } => to_json(resolve(&config.copy, locale, policy)?),
        Commands::Footer { locale } => to_json(resolve(&config.footer, locale, policy)?),
        Commands::Check => {
            let locales: Vec<&str> = config.copy.locales().collect();
            tracing::info!(
                pages = config.pages.iter().count(),
                locales = locales.len(),
                base_url = %config.site.base_url,
                "configuration ok"
            );
            Ok(json!({
                "ok": true,
                "baseUrl": config.site.base_url,
                "domain": config.site.domain,
                "pages": config.pages.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>(),
                "locales": locales,
                "defaultLocale": config.copy.default_locale(),
            }))
        }
    }
}

fn parse_extra(raw: &str) -> anyhow::Result<MetadataOverrides> {
    serde_json::from_str(raw).context("--extra must be a JSON metadata object")
}

fn resolve<'a, T>(
    table: &'a LocaleTable<T>,
    locale: &'a str,
    policy: LocaleFallback,
) -> anyhow::Result<&'a T> {
    let resolved = table.resolve(locale, policy).with_context(|| {
        format!("locale '{locale}' is not supported (fallback policy: {policy})")
    })?;
    if resolved.fell_back {
        tracing::info!(requested = %locale, used = %resolved.locale, "locale fell back to default");
    }
    Ok(resolved.entry)
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}
