//! Site configuration, SEO metadata and structured data for the
//! 家事代行ねこのーと marketing site.
//!
//! Everything is derived once from the YAML files under `config/` into a
//! [`SiteConfig`], which page renderers then read by reference.

pub mod address;
pub mod ai_site;
pub mod app_config;
pub mod config;
pub mod copy;
pub mod jsonld;
pub mod loader;
pub mod pages;
pub mod seo;
pub mod site;
pub mod template;

use thiserror::Error;

pub use address::{map_url_from_text, PostalAddress, PublicAddress};
pub use ai_site::AiSiteConfig;
pub use app_config::{AppConfig, LocaleFallback};
pub use config::{load_app_config, load_app_config_from_env};
pub use copy::{CopyBundle, FooterI18n, LocaleTable, Resolved};
pub use jsonld::{faq_to_json_ld, local_business, FaqItem, FaqPage, LocalBusiness, Qa};
pub use loader::{load_site_config, SiteConfig};
pub use pages::{PageDef, PageKey, PageTable};
pub use seo::{Metadata, MetadataOverrides, Seo};
pub use site::{Site, SiteOverrides, Socials};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("locale '{locale}' is allowed but has no entry in {table}")]
    MissingLocale { table: &'static str, locale: String },

    #[error("page '{0}' has no entry in pages.yaml")]
    MissingPage(PageKey),

    #[error("unknown page key: '{0}'")]
    UnknownPage(String),

    #[error("config validation error: {0}")]
    Validation(String),
}
