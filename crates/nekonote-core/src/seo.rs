//! Page metadata for search engines and link previews.
//!
//! [`Metadata`] serializes to the camelCase shape the page renderer injects
//! into `<head>`. Optional blocks that are unset are left out of the JSON.

use serde::{Deserialize, Serialize};

use crate::pages::{PageKey, PageTable};
use crate::site::Site;

pub const OG_LOCALE: &str = "ja_JP";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const TWITTER_CARD: &str = "summary_large_image";
pub const FAVICON_PATH: &str = "/favicon.ico?v=4";
pub const ICON_PATH: &str = "/icon.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternates: Option<Alternates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<Twitter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<Icons>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternates {
    pub canonical: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub google: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_bot: Option<GoogleBot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    /// `-1` means no limit.
    pub max_snippet: i32,
    pub max_image_preview: String,
    /// `-1` means no limit.
    pub max_video_preview: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<OgImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Twitter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icons {
    pub icon: Vec<IconLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconLink {
    pub url: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

/// Caller-supplied fields layered over page metadata.
///
/// Each field that is `Some` replaces the whole top-level field of the same
/// name. Nested blocks are not merged: an `open_graph` override drops every
/// Open Graph value the page would otherwise have had.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetadataOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub authors: Option<Vec<Author>>,
    pub metadata_base: Option<String>,
    pub alternates: Option<Alternates>,
    pub verification: Option<Verification>,
    pub robots: Option<Robots>,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<Twitter>,
    pub icons: Option<Icons>,
}

impl Metadata {
    /// Apply `extra` with per-top-level-field replacement.
    #[must_use]
    pub fn with_overrides(self, extra: MetadataOverrides) -> Self {
        let MetadataOverrides {
            title,
            description,
            keywords,
            authors,
            metadata_base,
            alternates,
            verification,
            robots,
            open_graph,
            twitter,
            icons,
        } = extra;

        Self {
            title: title.unwrap_or(self.title),
            description: description.unwrap_or(self.description),
            keywords: keywords.unwrap_or(self.keywords),
            authors: authors.or(self.authors),
            metadata_base: metadata_base.or(self.metadata_base),
            alternates: alternates.or(self.alternates),
            verification: verification.or(self.verification),
            robots: robots.or(self.robots),
            open_graph: open_graph.or(self.open_graph),
            twitter: twitter.or(self.twitter),
            icons: icons.or(self.icons),
        }
    }
}

/// Metadata builder over a loaded site and its page dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Seo<'a> {
    site: &'a Site,
    pages: &'a PageTable,
}

impl<'a> Seo<'a> {
    #[must_use]
    pub fn new(site: &'a Site, pages: &'a PageTable) -> Self {
        Self { site, pages }
    }

    /// Site-wide defaults for the root layout.
    #[must_use]
    pub fn base(&self) -> Metadata {
        let site = self.site;
        let title = site.default_title();
        let root = site.page_url("/");
        let logo = site.og_image(None);

        Metadata {
            title: title.clone(),
            description: site.description.clone(),
            keywords: site.keywords.clone(),
            authors: Some(vec![Author {
                name: site.name.clone(),
            }]),
            metadata_base: site.metadata_base.as_ref().map(ToString::to_string),
            alternates: Some(Alternates {
                canonical: root.clone(),
            }),
            verification: Some(site.google_site_verification.clone())
                .filter(|token| !token.is_empty())
                .map(|google| Verification { google }),
            robots: Some(Robots {
                index: true,
                follow: true,
                google_bot: Some(GoogleBot {
                    index: true,
                    follow: true,
                    max_snippet: -1,
                    max_image_preview: "large".to_string(),
                    max_video_preview: -1,
                }),
            }),
            open_graph: Some(OpenGraph {
                title: Some(title.clone()),
                description: Some(site.description.clone()),
                url: Some(root),
                site_name: Some(site.name.clone()),
                og_type: Some("website".to_string()),
                images: vec![OgImage {
                    url: logo.clone(),
                    width: Some(OG_IMAGE_WIDTH),
                    height: Some(OG_IMAGE_HEIGHT),
                    alt: Some(format!("{} OGP", site.name)),
                }],
                locale: Some(OG_LOCALE.to_string()),
            }),
            twitter: Some(Twitter {
                card: Some(TWITTER_CARD.to_string()),
                title: Some(title),
                description: Some(site.description.clone()),
                images: vec![logo],
            }),
            icons: Some(default_icons()),
        }
    }

    /// Metadata for one page, with `extra` layered on top.
    #[must_use]
    pub fn page(&self, key: PageKey, extra: Option<MetadataOverrides>) -> Metadata {
        let site = self.site;
        let def = self.pages.get(key);
        let url = site.page_url(&def.path);
        let image = site.og_image(def.og_image.as_deref());

        let metadata = Metadata {
            title: def.title.clone(),
            description: def.description.clone(),
            keywords: site.keywords.clone(),
            authors: None,
            metadata_base: None,
            alternates: Some(Alternates {
                canonical: url.clone(),
            }),
            verification: None,
            robots: None,
            open_graph: Some(OpenGraph {
                title: Some(def.title.clone()),
                description: Some(def.description.clone()),
                url: Some(url),
                site_name: Some(site.name.clone()),
                og_type: Some(def.og_type.clone()),
                images: vec![OgImage {
                    url: image.clone(),
                    width: Some(OG_IMAGE_WIDTH),
                    height: Some(OG_IMAGE_HEIGHT),
                    alt: Some(site.name.clone()),
                }],
                locale: Some(OG_LOCALE.to_string()),
            }),
            twitter: Some(Twitter {
                card: Some(TWITTER_CARD.to_string()),
                title: Some(def.title.clone()),
                description: Some(def.description.clone()),
                images: vec![image],
            }),
            icons: None,
        };

        match extra {
            Some(extra) => metadata.with_overrides(extra),
            None => metadata,
        }
    }
}

fn default_icons() -> Icons {
    Icons {
        icon: vec![
            IconLink {
                url: FAVICON_PATH.to_string(),
                mime_type: None,
                sizes: None,
            },
            IconLink {
                url: ICON_PATH.to_string(),
                mime_type: Some("image/png".to_string()),
                sizes: Some("any".to_string()),
            },
        ],
        apple: Some(ICON_PATH.to_string()),
        shortcut: Some(FAVICON_PATH.to_string()),
    }
}

#[cfg(test)]
#[path = "seo_test.rs"]
mod tests;
