use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::template::{Expand, TemplateVars};
use crate::ConfigError;

/// Closed set of pages that carry their own metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PageKey {
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "about")]
    About,
    #[serde(rename = "news")]
    News,
    #[serde(rename = "areasLocal")]
    AreasLocal,
    #[serde(rename = "products")]
    Products,
    #[serde(rename = "productsEC")]
    ProductsEc,
    #[serde(rename = "projects")]
    Projects,
    #[serde(rename = "stores")]
    Stores,
    #[serde(rename = "faq")]
    Faq,
}

impl PageKey {
    pub const ALL: [PageKey; 9] = [
        PageKey::Home,
        PageKey::About,
        PageKey::News,
        PageKey::AreasLocal,
        PageKey::Products,
        PageKey::ProductsEc,
        PageKey::Projects,
        PageKey::Stores,
        PageKey::Faq,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::About => "about",
            PageKey::News => "news",
            PageKey::AreasLocal => "areasLocal",
            PageKey::Products => "products",
            PageKey::ProductsEc => "productsEC",
            PageKey::Projects => "projects",
            PageKey::Stores => "stores",
            PageKey::Faq => "faq",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PageKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownPage(s.to_string()))
    }
}

/// Metadata seed for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageDef {
    /// Route path, e.g. `/areas/local`.
    pub path: String,
    pub title: String,
    pub description: String,
    /// Open Graph `type`, `website` or `article`.
    pub og_type: String,
    /// Page-specific OG image path; the site logo is used when absent.
    #[serde(default)]
    pub og_image: Option<String>,
}

impl Expand for PageDef {
    fn expand(&mut self, vars: &TemplateVars) {
        self.title.expand(vars);
        self.description.expand(vars);
    }
}

/// Shape of `pages.yaml`.
#[derive(Debug, Deserialize)]
pub struct PagesFile {
    pub pages: BTreeMap<PageKey, PageDef>,
}

/// One [`PageDef`] for every [`PageKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTable {
    defs: Vec<PageDef>,
}

impl PageTable {
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingPage`] for the first key without a definition.
    pub fn new(mut defs: BTreeMap<PageKey, PageDef>) -> Result<Self, ConfigError> {
        let defs = PageKey::ALL
            .into_iter()
            .map(|key| defs.remove(&key).ok_or(ConfigError::MissingPage(key)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { defs })
    }

    #[must_use]
    pub fn get(&self, key: PageKey) -> &PageDef {
        &self.defs[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageKey, &PageDef)> {
        PageKey::ALL.into_iter().zip(&self.defs)
    }
}

impl Expand for PageTable {
    fn expand(&mut self, vars: &TemplateVars) {
        self.defs.expand(vars);
    }
}
