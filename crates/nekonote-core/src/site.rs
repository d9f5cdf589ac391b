use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::DEFAULT_BASE_URL;

/// Host used when neither the configured nor the environment base URL parses.
pub const FALLBACK_HOST: &str = "localhost:3000";

pub const DEFAULT_LOGO_PATH: &str = "/images/ogpLogo.png";

/// The per-deployment brand values, as authored in `site.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteOverrides {
    pub name: String,
    pub tagline: String,
    /// Shared by the SEO description and Open Graph.
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub tel: Option<String>,
    /// Logo and default OG image path.
    pub logo_path: Option<String>,
    pub google_site_verification: Option<String>,
    #[serde(default)]
    pub socials: SocialOverrides,
    /// Only set when this deployment must ignore `NEXT_PUBLIC_APP_URL`.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialOverrides {
    pub instagram: Option<String>,
    pub line: Option<String>,
    pub x: Option<String>,
    pub facebook: Option<String>,
    pub note: Option<String>,
}

/// Social links with every key present; unset links are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Socials {
    pub instagram: String,
    pub line: String,
    pub x: String,
    pub facebook: String,
    pub note: String,
}

impl From<SocialOverrides> for Socials {
    fn from(o: SocialOverrides) -> Self {
        Self {
            instagram: o.instagram.unwrap_or_default(),
            line: o.line.unwrap_or_default(),
            x: o.x.unwrap_or_default(),
            facebook: o.facebook.unwrap_or_default(),
            note: o.note.unwrap_or_default(),
        }
    }
}

/// Normalized site descriptor derived once from [`SiteOverrides`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub domain: String,
    /// Never ends with `/`.
    pub base_url: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub tel: String,
    pub logo_path: String,
    pub google_site_verification: String,
    pub socials: Socials,
    /// Parsed base URL, `None` when it is not a valid absolute URL.
    #[serde(skip)]
    pub metadata_base: Option<Url>,
}

impl Site {
    /// Derive the site descriptor.
    ///
    /// The base URL is taken from the overrides, then `env_base_url`, then
    /// [`DEFAULT_BASE_URL`]. This never fails: a base URL without a parseable
    /// host falls back to the environment URL's host and finally to
    /// [`FALLBACK_HOST`].
    #[must_use]
    pub fn from_overrides(overrides: SiteOverrides, env_base_url: Option<&str>) -> Self {
        let env_base = trim_trailing_slash(env_base_url.unwrap_or(DEFAULT_BASE_URL));
        let base_url = overrides
            .base_url
            .as_deref()
            .map_or_else(|| env_base.to_string(), |b| trim_trailing_slash(b).to_string());

        let domain = safe_host(&base_url).unwrap_or_else(|| {
            tracing::warn!(base_url = %base_url, "base URL has no parseable host; using fallback");
            safe_host(env_base).unwrap_or_else(|| FALLBACK_HOST.to_string())
        });
        let metadata_base = Url::parse(&base_url).ok();

        Self {
            domain,
            base_url,
            name: overrides.name,
            tagline: overrides.tagline,
            description: overrides.description,
            keywords: overrides.keywords,
            tel: overrides.tel.unwrap_or_default(),
            logo_path: overrides
                .logo_path
                .unwrap_or_else(|| DEFAULT_LOGO_PATH.to_string()),
            google_site_verification: overrides.google_site_verification.unwrap_or_default(),
            socials: overrides.socials.into(),
            metadata_base,
        }
    }

    /// Absolute URL of `path` under the base URL, with exactly one slash
    /// between them. An empty path is the site root.
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute OG image URL: the page's own image if it has one, else the logo.
    #[must_use]
    pub fn og_image(&self, path: Option<&str>) -> String {
        self.page_url(path.unwrap_or(&self.logo_path))
    }

    /// `"<name>｜<tagline>"`, the site-wide default title.
    #[must_use]
    pub fn default_title(&self) -> String {
        format!("{}｜{}", self.name, self.tagline)
    }
}

#[must_use]
pub fn trim_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// Host (with a non-default port) of `input`, or `None` if it is not an
/// absolute URL with a host.
#[must_use]
pub fn safe_host(input: &str) -> Option<String> {
    let parsed = Url::parse(input).ok()?;
    let host = parsed.host_str().filter(|h| !h.is_empty())?;
    Some(match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
