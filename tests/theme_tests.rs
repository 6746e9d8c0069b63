mod common;

#[cfg(test)]
pub mod theme_tests {
    use sgn_site::models::Theme;
    use sgn_site::state::{MemoryThemeStore, ThemeController};

    use super::common::*;

    #[test]
    fn test_theme_defaults_to_light_without_stored_value() {
        let controller = ThemeController::init(MemoryThemeStore::new(THEME_KEY), RecordingScope::default());
        assert_eq!(controller.theme(), Theme::Light);
        assert!(!controller.scope().dark);
        assert_eq!(controller.store().get(THEME_KEY), Some("light"));
    }

    #[test]
    fn test_theme_restores_stored_value() {
        let store = MemoryThemeStore::with_value(THEME_KEY, "dark");
        let controller = ThemeController::init(store, RecordingScope::default());
        assert_eq!(controller.theme(), Theme::Dark);
        assert!(controller.scope().dark);
    }

    #[test]
    fn test_theme_ignores_garbage_stored_value() {
        let store = MemoryThemeStore::with_value(THEME_KEY, "solarized");
        let controller = ThemeController::init(store, RecordingScope::default());
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.store().get(THEME_KEY), Some("light"));
    }

    #[test]
    fn test_theme_toggle_persists_and_applies() {
        let mut controller = ThemeController::init(MemoryThemeStore::new(THEME_KEY), RecordingScope::default());

        assert_eq!(controller.toggle(), Theme::Dark);
        assert!(controller.scope().dark);
        assert_eq!(controller.store().get(THEME_KEY), Some("dark"));
    }

    #[test]
    fn test_theme_toggle_twice_restores_original_state() {
        for stored in ["light", "dark"] {
            let store = MemoryThemeStore::with_value(THEME_KEY, stored);
            let mut controller = ThemeController::init(store, RecordingScope::default());
            let original = controller.theme();
            let original_marker = controller.scope().dark;

            controller.toggle();
            controller.toggle();

            assert_eq!(controller.theme(), original);
            assert_eq!(controller.scope().dark, original_marker);
            assert_eq!(controller.store().get(THEME_KEY), Some(stored));
        }
    }

    #[test]
    fn test_theme_survives_reload() {
        let mut controller = ThemeController::init(MemoryThemeStore::new(THEME_KEY), RecordingScope::default());
        controller.toggle();

        // A fresh controller over the same storage plays the part of a page reload.
        let storage = controller.store().clone();
        let reloaded = ThemeController::init(storage, RecordingScope::default());
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert!(reloaded.scope().dark);
    }

    #[test]
    fn test_theme_uses_configured_key() {
        let mut controller = ThemeController::init(MemoryThemeStore::new("sgn-theme"), RecordingScope::default());
        controller.toggle();
        assert_eq!(controller.store().get("sgn-theme"), Some("dark"));
        assert_eq!(controller.store().get(THEME_KEY), None);
    }

    #[test]
    fn test_theme_marker_follows_every_change() {
        let mut controller = ThemeController::init(MemoryThemeStore::new(THEME_KEY), RecordingScope::default());
        controller.toggle();
        controller.set(Theme::Dark);
        controller.toggle();
        assert_eq!(
            controller.scope().applied,
            [Theme::Light, Theme::Dark, Theme::Dark, Theme::Light]
        );
    }

    #[test]
    fn test_theme_toggle_works_with_broken_storage() {
        let mut controller = ThemeController::init(BrokenStore, RecordingScope::default());
        assert_eq!(controller.theme(), Theme::Light);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert!(controller.scope().dark);
    }
}
