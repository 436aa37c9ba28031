//! TUI application state and global key handling

use crossterm::event::{KeyCode, KeyModifiers};
use quickdeliver_core::screen::nav_item_for_shortcut;
use quickdeliver_core::{ColorScheme, Preferences, Storefront};
use std::cell::Cell;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::screens::PageScroll;

/// Lines moved per PageUp / PageDown
pub const PAGE_SCROLL: i32 = 10;

/// TUI Application state
pub struct App {
    /// Session owning the router, cart and per-session data
    pub storefront: Storefront,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Message shown in the status bar until Esc or the next one
    pub status_message: Option<String>,

    /// Where preferences are persisted; `None` keeps them in memory
    data_dir: Option<PathBuf>,

    /// Last preferences written to disk
    saved_preferences: Preferences,

    /// Force the monochrome palette
    pub no_color: bool,

    /// Furthest offset the last rendered page can scroll to
    scroll_limit: Cell<u16>,
}

impl App {
    pub fn new(storefront: Storefront, data_dir: Option<PathBuf>) -> Self {
        let saved_preferences = storefront.preferences;
        Self {
            storefront,
            should_quit: false,
            status_message: None,
            data_dir,
            saved_preferences,
            no_color: false,
            scroll_limit: Cell::new(u16::MAX),
        }
    }

    /// Scroll state for the main page of the active screen
    pub fn page_scroll(&self) -> PageScroll<'_> {
        PageScroll::tracked(self.storefront.navigator().scroll_offset(), &self.scroll_limit)
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.storefront.preferences.color_scheme
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Handle keyboard input
    /// Returns true if the key was handled as a global key
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::PageDown => {
                self.storefront.scroll_by(PAGE_SCROLL);
                self.storefront.clamp_scroll(self.scroll_limit.get());
                true
            }
            KeyCode::PageUp => {
                self.storefront.scroll_by(-PAGE_SCROLL);
                true
            }
            KeyCode::Esc if self.status_message.is_some() => {
                self.status_message = None;
                true
            }
            // Chrome shortcuts only exist while the chrome is drawn
            KeyCode::Char(c) if self.storefront.navigator().shows_chrome() => {
                match nav_item_for_shortcut(c) {
                    Some(item) => {
                        self.storefront.go(item.screen);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Write preferences if a screen changed them since the last save
    pub fn persist_preferences(&mut self) {
        let current = self.storefront.preferences;
        if current == self.saved_preferences {
            return;
        }
        self.saved_preferences = current;

        let Some(dir) = self.data_dir.as_deref() else {
            return;
        };
        match current.save(dir) {
            Ok(()) => debug!(path = %dir.display(), "preferences saved"),
            Err(e) => {
                warn!(error = %e, "failed to save preferences");
                self.status_message = Some(format!("Could not save preferences: {e}"));
            }
        }
    }
}
