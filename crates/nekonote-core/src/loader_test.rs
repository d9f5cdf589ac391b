use std::path::PathBuf;

use super::*;
use crate::app_config::LocaleFallback;
use crate::pages::PageKey;

fn config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
}

fn real_sources() -> SiteSources {
    let dir = config_dir();
    SiteSources {
        site: read_yaml(&dir.join(SITE_FILE)).unwrap(),
        pages: read_yaml(&dir.join(PAGES_FILE)).unwrap(),
        copy: read_yaml(&dir.join(COPY_FILE)).unwrap(),
        footer: read_yaml(&dir.join(FOOTER_FILE)).unwrap(),
        faq: read_yaml(&dir.join(FAQ_FILE)).unwrap(),
    }
}

fn real_config() -> SiteConfig {
    let dir = config_dir();
    assert!(
        dir.join(SITE_FILE).exists(),
        "config/site.yaml missing at {dir:?}; required for this test"
    );
    let result = load_site_config(&dir, Some("https://meg-nekoneote.com/"));
    assert!(result.is_ok(), "failed to load config: {result:?}");
    result.unwrap()
}

#[test]
fn loads_real_config() {
    let cfg = real_config();
    assert_eq!(cfg.site.name, "家事代行ねこのーと");
    assert_eq!(cfg.site.base_url, "https://meg-nekoneote.com");
    assert_eq!(cfg.site.domain, "meg-nekoneote.com");
    assert_eq!(cfg.site.tel, "+81 70-8354-6929");
    assert_eq!(cfg.site.socials.line, "https://lin.ee/25fxWSm");
    assert_eq!(cfg.site.socials.x, "");
    assert_eq!(cfg.faq.len(), 5);
}

#[test]
fn every_allowed_locale_has_copy_and_footer() {
    let cfg = real_config();
    assert_eq!(cfg.ai.languages.allowed.len(), 16);
    for locale in &cfg.ai.languages.allowed {
        assert!(cfg.copy.get(locale).is_some(), "copy missing {locale}");
        assert!(cfg.footer.get(locale).is_some(), "footer missing {locale}");
    }
}

#[test]
fn placeholders_are_expanded_everywhere() {
    let cfg = real_config();
    for (key, def) in cfg.pages.iter() {
        assert!(!def.title.contains('{'), "page {key} title: {}", def.title);
        assert!(!def.description.contains('{'), "page {key} description");
    }
    let json = serde_json::to_string(&cfg.copy).unwrap();
    assert!(!json.contains("{name}"));
    let json = serde_json::to_string(&cfg.footer).unwrap();
    assert!(!json.contains("{site_alt}") && !json.contains("{name}"));
}

#[test]
fn copy_strings_follow_site_name() {
    let cfg = real_config();
    assert_eq!(cfg.copy.get("ja").unwrap().home.headline, "家事代行ねこのーと");
    assert_eq!(
        cfg.copy.get("en").unwrap().stores.hero_title,
        "家事代行ねこのーと ─ Locations"
    );
    assert_eq!(cfg.footer.get("zh").unwrap().site_alt, "家事代行ねこのーと 官方网站");
    assert_eq!(cfg.footer.get("fr").unwrap().site_alt, "家事代行ねこのーと");
    assert_eq!(
        cfg.pages.get(PageKey::News).title,
        "お知らせ｜家事代行ねこのーと"
    );
}

#[test]
fn unsupported_locale_is_absent_without_fallback() {
    let cfg = real_config();
    assert!(cfg.copy.get("sv").is_none());
    assert!(cfg.footer.get("sv").is_none());
    assert!(cfg.copy.resolve("sv", LocaleFallback::Exact).is_none());
    let hit = cfg.copy.resolve("sv", LocaleFallback::Default).unwrap();
    assert_eq!(hit.locale, "ja");
    assert!(hit.fell_back);
}

#[test]
fn address_map_url_is_derived() {
    let cfg = real_config();
    assert_eq!(cfg.address.text, "大阪府高槻市柱本新町1-B26-502");
    assert_eq!(
        cfg.address.has_map,
        crate::address::map_url_from_text("大阪府高槻市柱本新町1-B26-502")
    );
}

#[test]
fn ai_site_follows_site() {
    let cfg = real_config();
    assert_eq!(cfg.ai.brand, cfg.site.name);
    assert_eq!(cfg.ai.url, "https://meg-nekoneote.com");
    assert_eq!(cfg.ai.languages.default, "ja");
}

#[test]
fn products_page_metadata_from_real_config() {
    let cfg = real_config();
    let meta = cfg.seo().page(PageKey::Products, None);
    assert_eq!(meta.title, "サービス一覧｜家事代行ねこのーと");
    assert_eq!(
        meta.alternates.unwrap().canonical,
        "https://meg-nekoneote.com/products"
    );
    assert_eq!(
        meta.open_graph.unwrap().images[0].url,
        "https://meg-nekoneote.com/images/ogpLogo.png"
    );
}

#[test]
fn faq_json_ld_uses_default_items() {
    let cfg = real_config();
    let page = cfg.faq_json_ld();
    assert_eq!(page.main_entity.len(), cfg.faq.len());
    assert_eq!(page.main_entity[0].name, "対応エリアはどこですか？");
    assert_eq!(page.main_entity[4].name, cfg.faq[4].question);
}

#[test]
fn local_business_listing() {
    let cfg = real_config();
    let json = serde_json::to_value(cfg.local_business()).unwrap();
    assert_eq!(json["@context"], "https://schema.org");
    assert_eq!(json["@type"], "CleaningService");
    assert_eq!(json["name"], "家事代行ねこのーと");
    assert_eq!(json["url"], "https://meg-nekoneote.com/");
    assert_eq!(json["image"], "https://meg-nekoneote.com/images/ogpLogo.png");
    assert_eq!(json["areaServed"][0]["@type"], "AdministrativeArea");
    assert_eq!(json["areaServed"][0]["name"], "大阪府");
    assert_eq!(json["areaServed"][1]["@type"], "City");
    assert_eq!(json["areaServed"][1]["name"], "高槻市");
    assert_eq!(json["serviceType"], serde_json::json!(["家事代行", "ハウスクリーニング"]));
    assert_eq!(json["address"]["postalCode"], "569-0846");
    assert_eq!(json["telephone"], "+81 70-8354-6929");
}

#[test]
fn local_business_omits_empty_telephone() {
    let mut sources = real_sources();
    sources.site.site.tel = None;
    let cfg = SiteConfig::from_sources(sources, None).unwrap();
    let json = serde_json::to_value(cfg.local_business()).unwrap();
    assert!(json.get("telephone").is_none());
}

#[test]
fn missing_copy_locale_is_rejected() {
    let mut sources = real_sources();
    sources.copy.locales.remove("ko");
    let err = SiteConfig::from_sources(sources, None).unwrap_err();
    assert!(
        matches!(err, ConfigError::MissingLocale { table, ref locale } if table == COPY_FILE && locale == "ko"),
        "got {err:?}"
    );
}

#[test]
fn missing_footer_locale_is_rejected() {
    let mut sources = real_sources();
    sources.footer.locales.remove("zh-TW");
    let err = SiteConfig::from_sources(sources, None).unwrap_err();
    assert!(
        matches!(err, ConfigError::MissingLocale { table, ref locale } if table == FOOTER_FILE && locale == "zh-TW"),
        "got {err:?}"
    );
}

#[test]
fn default_locale_must_be_allowed() {
    let mut sources = real_sources();
    sources.site.ai.languages.default = "sv".to_string();
    let err = SiteConfig::from_sources(sources, None).unwrap_err();
    assert!(err.to_string().contains("default locale 'sv'"), "{err}");
}

#[test]
fn duplicate_allowed_locale_is_rejected() {
    let mut sources = real_sources();
    sources.site.ai.languages.allowed.push("en".to_string());
    let err = SiteConfig::from_sources(sources, None).unwrap_err();
    assert!(err.to_string().contains("duplicate allowed locale"), "{err}");
}

#[test]
fn empty_address_is_rejected() {
    let mut sources = real_sources();
    sources.site.address.text = "  ".to_string();
    let err = SiteConfig::from_sources(sources, None).unwrap_err();
    assert!(err.to_string().contains("address"), "{err}");
}

#[test]
fn missing_page_is_rejected() {
    let mut sources = real_sources();
    sources.pages.pages.remove(&PageKey::Faq);
    let err = SiteConfig::from_sources(sources, None).unwrap_err();
    assert!(matches!(err, ConfigError::MissingPage(PageKey::Faq)));
}

#[test]
fn malformed_env_base_url_does_not_fail_load() {
    let cfg = SiteConfig::from_sources(real_sources(), Some("::not-a-url::")).unwrap();
    assert_eq!(cfg.site.domain, crate::site::FALLBACK_HOST);
}

#[test]
fn empty_site_name_uses_fallback_alt() {
    let mut sources = real_sources();
    sources.site.site.name = String::new();
    let cfg = SiteConfig::from_sources(sources, None).unwrap();
    assert_eq!(cfg.footer.get("en").unwrap().site_alt, "Official Website");
    assert_eq!(cfg.footer.get("ja").unwrap().site_alt, "");
}

#[test]
fn missing_file_reports_path() {
    let err = load_site_config(Path::new("/nonexistent/config"), None).unwrap_err();
    assert!(matches!(err, ConfigError::Io { ref path, .. } if path.ends_with(SITE_FILE)));
}
