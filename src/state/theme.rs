use std::collections::HashMap;

use crate::common::StorageError;
use crate::models::Theme;

/// Key-value persistence for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError>;

    fn save(&mut self, value: &str) -> Result<(), StorageError>;
}

/// Whatever carries the visible light/dark styling.
pub trait StyleScope {
    fn apply(&mut self, theme: Theme);
}

/// In-process [`ThemeStore`], used outside the browser.
#[derive(Debug, Default, Clone)]
pub struct MemoryThemeStore {
    key: String,
    entries: HashMap<String, String>,
}

impl MemoryThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: HashMap::new(),
        }
    }

    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new(key);
        store.entries.insert(store.key.clone(), value.into());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(&self.key).cloned())
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        self.entries.insert(self.key.clone(), value.to_string());
        Ok(())
    }
}

/// Owns the current theme and keeps the style scope and the store in step with it.
#[derive(Debug, Clone)]
pub struct ThemeController<S, V> {
    theme: Theme,
    store: S,
    scope: V,
}

impl<S: ThemeStore, V: StyleScope> ThemeController<S, V> {
    /// Restores the persisted theme, falling back to light, and applies it.
    pub fn init(store: S, scope: V) -> Self {
        let theme = match store.load() {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                log::warn!("Ignoring stored theme: {}", e);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                crate::log_err!("loading theme preference", e);
                Theme::default()
            }
        };

        let mut controller = Self {
            theme,
            store,
            scope,
        };
        controller.commit();
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scope(&self) -> &V {
        &self.scope
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        log::debug!("Switching theme from {} to {}", self.theme, theme);
        self.theme = theme;
        self.commit();
    }

    fn commit(&mut self) {
        self.scope.apply(self.theme);
        if let Err(e) = self.store.save(self.theme.as_str()) {
            crate::log_err!("persisting theme preference", e);
        }
    }
}
