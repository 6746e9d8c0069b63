use crate::models::Page;

/// Which page is on screen and whether the mobile menu is open.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Navigator {
    current: Page,
    menu_open: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Shows `target` and closes the mobile menu. Returns whether the page changed.
    pub fn navigate_to(&mut self, target: Page) -> bool {
        self.menu_open = false;
        if self.current == target {
            return false;
        }
        log::debug!("Navigating from {} to {}", self.current, target);
        self.current = target;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
