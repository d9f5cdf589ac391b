//! schema.org JSON-LD objects embedded in `<script type="application/ld+json">`.

use serde::{Deserialize, Serialize};

use crate::address::PostalAddress;
use crate::loader::SiteConfig;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Question/answer pair as used in the locale copy bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Qa {
    pub q: String,
    pub a: String,
}

/// Default-locale FAQ entry from `faq.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl From<&FaqItem> for Qa {
    fn from(item: &FaqItem) -> Self {
        Self {
            q: item.question.clone(),
            a: item.answer.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub text: String,
}

/// Map question/answer pairs 1:1, in order, onto an `FAQPage`.
#[must_use]
pub fn faq_to_json_ld(faq: &[Qa]) -> FaqPage {
    FaqPage {
        context: SCHEMA_CONTEXT,
        schema_type: "FAQPage",
        main_entity: faq
            .iter()
            .map(|item| Question {
                schema_type: "Question",
                name: item.q.clone(),
                accepted_answer: Answer {
                    schema_type: "Answer",
                    text: item.a.clone(),
                },
            })
            .collect(),
    }
}

/// `business` block of `site.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessConfig {
    /// schema.org type of the listing, e.g. `CleaningService`.
    #[serde(default = "default_business_type")]
    pub schema_type: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            schema_type: default_business_type(),
        }
    }
}

fn default_business_type() -> String {
    "LocalBusiness".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Place {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
}

/// Business listing emitted by the root layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub url: String,
    pub image: String,
    pub description: String,
    pub area_served: Vec<Place>,
    pub service_type: Vec<String>,
    pub address: PostalAddress,
    pub has_map: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
}

/// Build the business listing from the site, its public address and the
/// default-locale service list.
#[must_use]
pub fn local_business(config: &SiteConfig) -> LocalBusiness {
    let site = &config.site;
    let postal = &config.address.postal;
    let service_type = config
        .ai
        .services_by_lang
        .get(&config.ai.languages.default)
        .cloned()
        .unwrap_or_default();

    LocalBusiness {
        context: SCHEMA_CONTEXT,
        schema_type: config.business.schema_type.clone(),
        name: site.name.clone(),
        url: site.page_url("/"),
        image: site.og_image(None),
        description: site.description.clone(),
        area_served: vec![
            Place {
                schema_type: "AdministrativeArea",
                name: postal.address_region.clone(),
            },
            Place {
                schema_type: "City",
                name: postal.address_locality.clone(),
            },
        ],
        service_type,
        address: postal.clone(),
        has_map: config.address.has_map.clone(),
        telephone: Some(site.tel.clone()).filter(|t| !t.is_empty()),
    }
}
