//! Local view state
//!
//! Which screen is showing is owned by the storefront, not by the store.
//! Navigating never dispatches.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Product listing
    #[default]
    Plants,
    Cart,
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub screen: Screen,
    pub running: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Plants,
            running: true,
        }
    }

    pub fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            log::debug!("Navigating {:?} -> {:?}", self.screen, screen);
        }
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
