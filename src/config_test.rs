use super::*;

#[test]
fn empty_block_yields_defaults() {
    assert_eq!(SiteConfig::from_json("").unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_json("   \n").unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn defaults_match_shipped_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.selectors.header, ".site-header");
    assert_eq!(config.selectors.contact_form, ".contact form");
    assert_eq!(config.selectors.main_content_id, "main-content");
    assert_eq!(config.scroll.header_offset, 50.0);
    assert_eq!(config.scroll.back_to_top_offset, 300.0);
    assert_eq!(config.form.submit_delay_ms, 1500);
    assert_eq!(config.form.banner_ttl_ms, 5000);
    assert_eq!(config.reveal.threshold, 0.1);
    assert_eq!(config.reveal.root_margin, "0px 0px -100px 0px");
    assert_eq!(config.year_token.as_str(), "2025");
    assert_eq!(config.theme.storage_key, "theme");
    assert!(!config.theme.toggle_enabled);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn partial_block_overrides_only_named_fields() {
    let raw = r#"{
        "log_level": "debug",
        "scroll": { "header_offset": 80 },
        "theme": { "toggle_enabled": true },
        "year_token": "2024"
    }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.scroll.header_offset, 80.0);
    assert_eq!(config.scroll.back_to_top_offset, 300.0);
    assert!(config.theme.toggle_enabled);
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.year_token.as_str(), "2024");
    assert_eq!(config.form, FormConfig::default());
}

#[test]
fn malformed_block_is_a_config_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));

    let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn log_level_maps_onto_log_facade() {
    assert_eq!(log::Level::from(LogLevel::Warn), log::Level::Warn);
    assert_eq!(log::Level::from(LogLevel::Trace), log::Level::Trace);
}
