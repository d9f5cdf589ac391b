use super::*;

fn overrides(base_url: Option<&str>) -> SiteOverrides {
    SiteOverrides {
        name: "家事代行ねこのーと".to_string(),
        tagline: "家事代行・ハウスクリーニング（高槻）".to_string(),
        description: "desc".to_string(),
        keywords: vec!["家事代行".to_string()],
        base_url: base_url.map(str::to_string),
        ..SiteOverrides::default()
    }
}

#[test]
fn base_url_trailing_slash_is_stripped() {
    let site = Site::from_overrides(overrides(Some("https://example.com/")), None);
    assert_eq!(site.base_url, "https://example.com");
    assert_eq!(site.domain, "example.com");
}

#[test]
fn env_base_url_used_when_no_override() {
    let site = Site::from_overrides(overrides(None), Some("https://meg-nekoneote.com/"));
    assert_eq!(site.base_url, "https://meg-nekoneote.com");
    assert_eq!(site.domain, "meg-nekoneote.com");
}

#[test]
fn default_base_url_when_nothing_configured() {
    let site = Site::from_overrides(overrides(None), None);
    assert_eq!(site.base_url, "http://localhost:3000");
    assert_eq!(site.domain, "localhost:3000");
    assert!(site.metadata_base.is_some());
}

#[test]
fn override_wins_over_env() {
    let site = Site::from_overrides(
        overrides(Some("https://override.example")),
        Some("https://env.example"),
    );
    assert_eq!(site.base_url, "https://override.example");
    assert_eq!(site.domain, "override.example");
}

#[test]
fn non_default_port_is_part_of_domain() {
    let site = Site::from_overrides(overrides(Some("http://127.0.0.1:8080")), None);
    assert_eq!(site.domain, "127.0.0.1:8080");
}

#[test]
fn default_port_is_not_part_of_domain() {
    let site = Site::from_overrides(overrides(Some("https://example.com:443")), None);
    assert_eq!(site.domain, "example.com");
}

#[test]
fn malformed_base_url_falls_back_to_env_host() {
    for bad in ["not a url", "example.com", "://", "mailto:someone"] {
        let site = Site::from_overrides(overrides(Some(bad)), Some("https://env.example"));
        assert_eq!(site.domain, "env.example", "input: {bad:?}");
    }
}

#[test]
fn malformed_base_url_falls_back_to_fixed_host() {
    for bad in ["not a url", "example.com", "http://", ""] {
        let site = Site::from_overrides(overrides(Some(bad)), Some("also bad"));
        assert_eq!(site.domain, FALLBACK_HOST, "input: {bad:?}");
    }
}

#[test]
fn malformed_base_url_has_no_metadata_base() {
    let site = Site::from_overrides(overrides(Some("not a url")), None);
    assert!(site.metadata_base.is_none());
    assert_eq!(site.base_url, "not a url");
}

#[test]
fn page_url_joins_with_exactly_one_slash() {
    for base in ["https://example.com", "https://example.com/", "https://example.com//"] {
        let site = Site::from_overrides(overrides(Some(base)), None);
        for (path, expected) in [
            ("/about", "https://example.com/about"),
            ("about", "https://example.com/about"),
            ("/", "https://example.com/"),
            ("", "https://example.com/"),
            ("/areas/local", "https://example.com/areas/local"),
        ] {
            assert_eq!(site.page_url(path), expected, "base {base:?} path {path:?}");
        }
    }
}

#[test]
fn page_url_keeps_base_path_prefix() {
    let site = Site::from_overrides(overrides(Some("https://example.com/site/")), None);
    assert_eq!(site.page_url("news"), "https://example.com/site/news");
}

#[test]
fn optional_fields_default() {
    let site = Site::from_overrides(overrides(None), None);
    assert_eq!(site.tel, "");
    assert_eq!(site.google_site_verification, "");
    assert_eq!(site.logo_path, DEFAULT_LOGO_PATH);
    assert_eq!(site.socials, Socials::default());
}

#[test]
fn partial_socials_fill_missing_keys() {
    let mut o = overrides(None);
    o.socials.line = Some("https://lin.ee/25fxWSm".to_string());
    let site = Site::from_overrides(o, None);
    assert_eq!(site.socials.line, "https://lin.ee/25fxWSm");
    assert_eq!(site.socials.instagram, "");
    assert_eq!(site.socials.x, "");
    assert_eq!(site.socials.facebook, "");
    assert_eq!(site.socials.note, "");
}

#[test]
fn og_image_prefers_page_image() {
    let site = Site::from_overrides(overrides(Some("https://example.com")), None);
    assert_eq!(
        site.og_image(Some("/images/products.png")),
        "https://example.com/images/products.png"
    );
    assert_eq!(site.og_image(None), "https://example.com/images/ogpLogo.png");
}

#[test]
fn default_title_uses_fullwidth_bar() {
    let site = Site::from_overrides(overrides(None), None);
    assert_eq!(
        site.default_title(),
        "家事代行ねこのーと｜家事代行・ハウスクリーニング（高槻）"
    );
}

#[test]
fn site_serializes_camel_case_without_metadata_base() {
    let site = Site::from_overrides(overrides(Some("https://example.com")), None);
    let json = serde_json::to_value(&site).unwrap();
    assert_eq!(json["baseUrl"], "https://example.com");
    assert_eq!(json["logoPath"], "/images/ogpLogo.png");
    assert_eq!(json["socials"]["note"], "");
    assert!(json.get("metadataBase").is_none());
}
