//! Home screen: search box, categories, offers and nearby stores

use super::{heading, muted, render_page, row, store_spans, Selection};
use crate::app::App;
use crate::components::TextInput;
use crossterm::event::KeyCode;
use quickdeliver_core::{catalog, NavigationPayload, ScreenId};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

pub struct HomeScreen {
    search: TextInput,
    /// Categories first, then stores
    selection: Selection,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            search: TextInput::new("Search for stores or products..."),
            selection: Selection::default(),
        }
    }

    fn entry_count() -> usize {
        catalog::categories().len() + catalog::stores().len()
    }

    pub fn enter(&mut self) {
        self.search.clear();
        self.search.active = false;
        self.selection.reset();
    }

    pub fn is_editing(&self) -> bool {
        self.search.active
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        if self.search.active {
            match key {
                KeyCode::Enter => {
                    self.search.active = false;
                    let query = self.search.value.trim().to_string();
                    app.storefront.open(NavigationPayload::search(query));
                }
                KeyCode::Esc => self.search.active = false,
                other => {
                    self.search.handle_key(other);
                }
            }
            return;
        }

        match key {
            KeyCode::Char('/') => self.search.active = true,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
                self.selection.next(Self::entry_count())
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
                self.selection.prev()
            }
            KeyCode::Char('n') => app.storefront.go(ScreenId::Notifications),
            KeyCode::Enter => {
                let idx = self.selection.get();
                let categories = catalog::categories();
                if let Some(category) = categories.get(idx) {
                    app.storefront
                        .open(NavigationPayload::browse(category.name.clone()));
                } else if let Some(store) = catalog::stores().get(idx - categories.len()) {
                    app.storefront.open(NavigationPayload::store(store.id));
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme();
        let profile = catalog::user_profile();
        let first_name = profile.name.split_whitespace().next().unwrap_or_default();

        let mut lines = vec![
            heading(format!("Hello, {first_name}!")),
            Line::from(muted("Deliver to: 123 Main Street, Downtown")),
            Line::from(""),
            self.search.line("Search", self.search.active),
            Line::from(""),
            heading("Categories"),
        ];

        for (idx, category) in catalog::categories().iter().enumerate() {
            lines.push(row(
                self.selection.is(idx),
                vec![Span::raw(category.name.clone())],
                scheme,
            ));
        }

        lines.push(Line::from(""));
        lines.push(heading("Special Offers"));
        for offer in catalog::offers() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<14}", offer.title),
                    Style::default().fg(Color::Magenta),
                ),
                muted(offer.description.clone()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(heading("Nearby Stores"));
        let offset = catalog::categories().len();
        for (idx, store) in catalog::stores().iter().enumerate() {
            lines.push(row(
                self.selection.is(offset + idx),
                store_spans(store, scheme),
                scheme,
            ));
        }

        render_page(
            frame,
            area,
            ScreenId::Home.title(),
            lines,
            app.page_scroll(),
            scheme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::Storefront;

    fn signed_in() -> App {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        app
    }

    #[test]
    fn test_search_submits_payload() {
        let mut app = signed_in();
        let mut screen = HomeScreen::new();
        screen.handle_key(KeyCode::Char('/'), &mut app);
        assert!(screen.is_editing());
        for c in "pizza".chars() {
            screen.handle_key(KeyCode::Char(c), &mut app);
        }
        screen.handle_key(KeyCode::Enter, &mut app);

        assert_eq!(app.storefront.active(), ScreenId::Search);
        assert_eq!(app.storefront.search_query(), "pizza");
    }

    #[test]
    fn test_category_opens_browse() {
        let mut app = signed_in();
        let mut screen = HomeScreen::new();
        screen.handle_key(KeyCode::Down, &mut app);
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Browse);
        assert_eq!(app.storefront.browse_category(), Some("Food"));
    }

    #[test]
    fn test_store_card_opens_store() {
        let mut app = signed_in();
        let mut screen = HomeScreen::new();
        for _ in 0..catalog::categories().len() + 1 {
            screen.handle_key(KeyCode::Down, &mut app);
        }
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Store);
        assert_eq!(app.storefront.store_in_view().name, "Pizza Paradise");
    }
}
