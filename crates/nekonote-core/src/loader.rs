use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::address::{AddressSource, PublicAddress};
use crate::ai_site::{AiSiteConfig, AiSource};
use crate::copy::{CopyBundle, FooterI18n, LocaleTable, LocalesFile};
use crate::jsonld::{self, BusinessConfig, FaqItem, FaqPage, LocalBusiness, Qa};
use crate::pages::{PageTable, PagesFile};
use crate::seo::Seo;
use crate::site::{Site, SiteOverrides};
use crate::template::{Expand, TemplateVars};
use crate::ConfigError;

pub const SITE_FILE: &str = "site.yaml";
pub const PAGES_FILE: &str = "pages.yaml";
pub const COPY_FILE: &str = "copy.yaml";
pub const FOOTER_FILE: &str = "footer.yaml";
pub const FAQ_FILE: &str = "faq.yaml";

/// Shape of `site.yaml`.
#[derive(Debug, Deserialize)]
pub struct SiteFile {
    pub site: SiteOverrides,
    pub address: AddressSource,
    #[serde(default)]
    pub business: BusinessConfig,
    pub ai: AiSource,
}

/// Shape of `faq.yaml`.
#[derive(Debug, Deserialize)]
pub struct FaqFile {
    pub faq: Vec<FaqItem>,
}

/// Parsed but not yet derived configuration files.
#[derive(Debug)]
pub struct SiteSources {
    pub site: SiteFile,
    pub pages: PagesFile,
    pub copy: LocalesFile<CopyBundle>,
    pub footer: LocalesFile<FooterI18n>,
    pub faq: FaqFile,
}

/// Everything the page renderers read, derived once at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub site: Site,
    pub address: PublicAddress,
    pub business: BusinessConfig,
    pub pages: PageTable,
    pub copy: LocaleTable<CopyBundle>,
    pub footer: LocaleTable<FooterI18n>,
    /// Default-locale FAQ used for the FAQ page structured data.
    pub faq: Vec<FaqItem>,
    pub ai: AiSiteConfig,
}

impl Expand for FaqItem {
    fn expand(&mut self, vars: &TemplateVars) {
        self.question.expand(vars);
        self.answer.expand(vars);
    }
}

/// Load, derive and validate the site configuration from `dir`.
///
/// `env_base_url` is the deployment base URL (`NEXT_PUBLIC_APP_URL`).
///
/// # Errors
///
/// Returns `ConfigError` if a file cannot be read or parsed, or the result
/// fails validation.
pub fn load_site_config(
    dir: &Path,
    env_base_url: Option<&str>,
) -> Result<SiteConfig, ConfigError> {
    let sources = SiteSources {
        site: read_yaml(&dir.join(SITE_FILE))?,
        pages: read_yaml(&dir.join(PAGES_FILE))?,
        copy: read_yaml(&dir.join(COPY_FILE))?,
        footer: read_yaml(&dir.join(FOOTER_FILE))?,
        faq: read_yaml(&dir.join(FAQ_FILE))?,
    };
    SiteConfig::from_sources(sources, env_base_url)
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

impl SiteConfig {
    /// Derive the configuration from already-parsed sources.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a page or locale is missing, or the
    /// configuration is otherwise inconsistent.
    pub fn from_sources(
        sources: SiteSources,
        env_base_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let SiteSources {
            site: site_file,
            pages,
            copy,
            footer,
            faq,
        } = sources;

        let site = Site::from_overrides(site_file.site, env_base_url);
        let vars = TemplateVars::for_site_name(&site.name);
        let default_locale = site_file.ai.languages.default.clone();

        let mut pages = PageTable::new(pages.pages)?;
        pages.expand(&vars);

        let mut copy = copy.locales;
        for bundle in copy.values_mut() {
            bundle.expand(&vars);
        }
        let mut footer = footer.locales;
        for strings in footer.values_mut() {
            strings.expand(&vars);
        }
        let mut faq = faq.faq;
        faq.expand(&vars);

        let config = Self {
            address: site_file.address.into(),
            business: site_file.business,
            pages,
            copy: LocaleTable::new(copy, default_locale.clone()),
            footer: LocaleTable::new(footer, default_locale),
            faq,
            ai: AiSiteConfig::from_source(site_file.ai, &site),
            site,
        };
        config.validate()?;

        tracing::debug!(
            base_url = %config.site.base_url,
            domain = %config.site.domain,
            locales = config.copy.len(),
            "site config loaded"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.address.text.trim().is_empty() {
            return Err(ConfigError::Validation(
                "public address text must be non-empty".to_string(),
            ));
        }

        let languages = &self.ai.languages;
        let mut seen = HashSet::new();
        for locale in &languages.allowed {
            if !seen.insert(locale.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate allowed locale: '{locale}'"
                )));
            }
        }
        if !seen.contains(languages.default.as_str()) {
            return Err(ConfigError::Validation(format!(
                "default locale '{}' is not in the allowed list",
                languages.default
            )));
        }

        for locale in &languages.allowed {
            if !self.copy.contains(locale) {
                return Err(ConfigError::MissingLocale {
                    table: COPY_FILE,
                    locale: locale.clone(),
                });
            }
            if !self.footer.contains(locale) {
                return Err(ConfigError::MissingLocale {
                    table: FOOTER_FILE,
                    locale: locale.clone(),
                });
            }
        }

        for locale in self.copy.locales().chain(self.footer.locales()) {
            if !seen.contains(locale) {
                tracing::warn!(locale = %locale, "locale has copy but is not in the allowed list");
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn seo(&self) -> Seo<'_> {
        Seo::new(&self.site, &self.pages)
    }

    /// FAQ page structured data from the default-locale FAQ items.
    #[must_use]
    pub fn faq_json_ld(&self) -> FaqPage {
        let items: Vec<Qa> = self.faq.iter().map(Qa::from).collect();
        jsonld::faq_to_json_ld(&items)
    }

    #[must_use]
    pub fn local_business(&self) -> LocalBusiness {
        jsonld::local_business(self)
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
