use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::site::Site;

/// Descriptor handed to the site assistant. Brand and URL follow the
/// [`Site`]; everything else passes through from `site.yaml` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSiteConfig {
    pub brand: String,
    pub url: String,
    pub areas_by_lang: BTreeMap<String, String>,
    pub services_by_lang: BTreeMap<String, Vec<String>>,
    pub retail: bool,
    pub product_page_route: String,
    pub languages: Languages,
    pub limits: AiLimits,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Languages {
    pub default: String,
    pub allowed: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AiLimits {
    pub qa_base: u32,
    pub qa_owner: u32,
    pub qa_learned: u32,
    pub menu_lines: u32,
    pub product_lines: u32,
    pub keywords: u32,
}

/// `ai` block of `site.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AiSource {
    #[serde(default)]
    pub areas_by_lang: BTreeMap<String, String>,
    #[serde(default)]
    pub services_by_lang: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub retail: bool,
    pub product_page_route: String,
    pub languages: Languages,
    pub limits: AiLimits,
}

impl AiSiteConfig {
    #[must_use]
    pub fn from_source(src: AiSource, site: &Site) -> Self {
        Self {
            brand: site.name.clone(),
            url: site.base_url.clone(),
            areas_by_lang: src.areas_by_lang,
            services_by_lang: src.services_by_lang,
            retail: src.retail,
            product_page_route: src.product_page_route,
            languages: src.languages,
            limits: src.limits,
        }
    }

    #[must_use]
    pub fn is_allowed(&self, locale: &str) -> bool {
        self.languages.allowed.iter().any(|l| l == locale)
    }
}
