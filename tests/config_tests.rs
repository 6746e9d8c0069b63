#[cfg(test)]
pub mod config_tests {
    use std::time::Duration;

    use sgn_site::config::*;

    #[test]
    fn test_config_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.submit_delay(), Duration::from_millis(1200));
        assert_eq!(config.toast_duration(), Duration::from_millis(5000));
        assert_eq!(config.toast_message, DEFAULT_TOAST_MESSAGE);
        assert_eq!(config.scroll_threshold_px, 50);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_config_from_json_partial_override() {
        let config =
            SiteConfig::from_json(r#"{ "toast_duration_ms": 250, "log_level": "debug" }"#).unwrap();
        assert_eq!(config.toast_duration(), Duration::from_millis(250));
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.contact_submit_delay_ms, 1200);
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn test_config_from_json_fails_on_malformed_document() {
        assert!(SiteConfig::from_json("{ toast_duration_ms: }").is_err());
        assert!(SiteConfig::from_json(r#"{ "toast_duration_ms": "soon" }"#).is_err());
    }

    #[test]
    fn test_config_unknown_log_level_falls_back_to_info() {
        let config = SiteConfig {
            log_level: "chatty".into(),
            ..SiteConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
