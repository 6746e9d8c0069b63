//! Thin adapters over the browser APIs the app touches.

use crate::common::StorageError;
use crate::models::{Theme, DARK_CLASS};
use crate::state::{StyleScope, ThemeStore};

fn js_err(e: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access(format!("{:?}", e))
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(js_err)?
        .ok_or(StorageError::Unavailable)
}

/// Theme preference kept in `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalThemeStore {
    key: String,
}

impl LocalThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(&self.key).map_err(js_err)
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(&self.key, value).map_err(js_err)
    }
}

/// Toggles the `dark` class on `<html>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStyleScope;

impl StyleScope for DocumentStyleScope {
    fn apply(&mut self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            log::warn!("No document root to apply the {} theme to", theme);
            return;
        };

        if let Err(e) = root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark())
        {
            crate::log_err!("applying theme class", format!("{:?}", e));
        }
    }
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
