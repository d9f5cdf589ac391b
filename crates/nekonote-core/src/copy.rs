use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::app_config::LocaleFallback;
use crate::template::{Expand, TemplateVars};

/// Every display string one locale needs. All fields are required; a bundle
/// missing any of them fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct CopyBundle {
    pub home: HomeCopy,
    pub stores: StoresCopy,
    pub areas_local: AreasLocalCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeCopy {
    pub headline: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct StoresCopy {
    pub hero_title: String,
    pub hero_areas: String,
    pub hero_lead: String,
    pub hero_tail: String,
    pub hero_intro_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct AreasLocalCopy {
    pub h1: String,
    pub lead: String,
    pub services: Vec<ServiceCopy>,
    pub coverage_title: String,
    pub coverage_body: String,
    pub faq: Vec<crate::jsonld::Qa>,
    pub contact_title: String,
    pub contact_text: String,
    pub to_products_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceCopy {
    pub title: String,
    pub bullets: Vec<String>,
}

/// Footer strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct FooterI18n {
    pub cta: String,
    pub sns_aria: String,
    pub instagram_alt: String,
    pub line_alt: String,
    pub site_aria: String,
    pub site_alt: String,
    pub area_link_text: String,
    pub rights: String,
}

impl Expand for CopyBundle {
    fn expand(&mut self, vars: &TemplateVars) {
        let HomeCopy {
            headline,
            description,
        } = &mut self.home;
        headline.expand(vars);
        description.expand(vars);

        let s = &mut self.stores;
        for field in [
            &mut s.hero_title,
            &mut s.hero_areas,
            &mut s.hero_lead,
            &mut s.hero_tail,
            &mut s.hero_intro_line,
        ] {
            field.expand(vars);
        }

        let a = &mut self.areas_local;
        for field in [
            &mut a.h1,
            &mut a.lead,
            &mut a.coverage_title,
            &mut a.coverage_body,
            &mut a.contact_title,
            &mut a.contact_text,
            &mut a.to_products_text,
        ] {
            field.expand(vars);
        }
        for service in &mut a.services {
            service.title.expand(vars);
            service.bullets.expand(vars);
        }
        for qa in &mut a.faq {
            qa.q.expand(vars);
            qa.a.expand(vars);
        }
    }
}

impl Expand for FooterI18n {
    fn expand(&mut self, vars: &TemplateVars) {
        for field in [
            &mut self.cta,
            &mut self.sns_aria,
            &mut self.instagram_alt,
            &mut self.line_alt,
            &mut self.site_aria,
            &mut self.site_alt,
            &mut self.area_link_text,
            &mut self.rights,
        ] {
            field.expand(vars);
        }
    }
}

/// Shape of `copy.yaml` and `footer.yaml`.
#[derive(Debug, Deserialize)]
pub struct LocalesFile<T> {
    pub locales: BTreeMap<String, T>,
}

/// Entry picked by [`LocaleTable::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a, T> {
    /// Locale the entry actually belongs to.
    pub locale: &'a str,
    pub entry: &'a T,
    /// `true` when the requested locale had no entry and the default was used.
    pub fell_back: bool,
}

/// Per-locale table keyed by locale code (`ja`, `zh-TW`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable<T> {
    entries: BTreeMap<String, T>,
    default_locale: String,
}

impl<T> LocaleTable<T> {
    #[must_use]
    pub fn new(entries: BTreeMap<String, T>, default_locale: impl Into<String>) -> Self {
        Self {
            entries,
            default_locale: default_locale.into(),
        }
    }

    /// Exact lookup. An unsupported locale is `None`; no fallback happens here.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&T> {
        self.entries.get(locale)
    }

    /// Two-step resolution: the exact locale first, then, only under
    /// [`LocaleFallback::Default`], the default locale.
    #[must_use]
    pub fn resolve<'a>(
        &'a self,
        locale: &'a str,
        policy: LocaleFallback,
    ) -> Option<Resolved<'a, T>> {
        if let Some(entry) = self.entries.get(locale) {
            return Some(Resolved {
                locale,
                entry,
                fell_back: false,
            });
        }
        match policy {
            LocaleFallback::Exact => None,
            LocaleFallback::Default => {
                let (default, entry) = self.entries.get_key_value(&self.default_locale)?;
                tracing::debug!(
                    requested = %locale,
                    fallback = %default,
                    "locale not found; using default"
                );
                Some(Resolved {
                    locale: default,
                    entry,
                    fell_back: true,
                })
            }
        }
    }

    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.entries.contains_key(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Serialize> Serialize for LocaleTable<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
#[path = "copy_test.rs"]
mod tests;
