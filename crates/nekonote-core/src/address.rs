use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// schema.org `PostalAddress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    #[serde(rename = "@type", default = "postal_address_type", skip_deserializing)]
    pub schema_type: String,
    #[serde(rename(serialize = "addressCountry"))]
    pub address_country: String,
    #[serde(rename(serialize = "addressRegion"))]
    pub address_region: String,
    #[serde(rename(serialize = "addressLocality"))]
    pub address_locality: String,
    #[serde(rename(serialize = "streetAddress"))]
    pub street_address: String,
    #[serde(
        rename(serialize = "postalCode"),
        skip_serializing_if = "Option::is_none"
    )]
    pub postal_code: Option<String>,
}

fn postal_address_type() -> String {
    "PostalAddress".to_string()
}

/// The address that may be published. The owner's private address is never
/// part of the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAddress {
    /// Display form.
    pub text: String,
    pub postal: PostalAddress,
    /// Google Maps search URL for `text`.
    pub has_map: String,
}

/// `site.yaml` form of the address; `has_map` is always derived.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressSource {
    pub text: String,
    pub postal: PostalAddress,
}

impl From<AddressSource> for PublicAddress {
    fn from(src: AddressSource) -> Self {
        let has_map = map_url_from_text(&src.text);
        Self {
            text: src.text,
            postal: src.postal,
            has_map,
        }
    }
}

/// Google Maps search URL with `text` encoded like `encodeURIComponent`.
#[must_use]
pub fn map_url_from_text(text: &str) -> String {
    format!(
        "{MAP_SEARCH_BASE}{}",
        utf8_percent_encode(text, URI_COMPONENT)
    )
}
