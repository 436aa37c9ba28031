//! Browse screen: stores by category and area, grid or list

use super::{muted, render_page, row, store_spans, PageScroll, Selection};
use crate::app::App;
use crate::empty_state;
use crossterm::event::KeyCode;
use quickdeliver_core::search::{RatingThreshold, ViewMode};
use quickdeliver_core::{catalog, NavigationPayload, ScreenId, StoreFilter, Storefront};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub struct BrowseScreen {
    filter: StoreFilter,
    view: ViewMode,
    selection: Selection,
}

impl Default for BrowseScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Next value in a cycle that starts and ends at `None`
pub(crate) fn cycle<T: Clone + PartialEq>(current: &Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => {
            let pos = options.iter().position(|o| o == value);
            pos.and_then(|p| options.get(p + 1)).cloned()
        }
    }
}

pub(crate) fn cycle_rating(current: RatingThreshold) -> RatingThreshold {
    let presets = RatingThreshold::PRESETS;
    match presets.iter().position(|p| *p == current) {
        None => presets[0],
        Some(p) => presets.get(p + 1).copied().unwrap_or(RatingThreshold::ANY),
    }
}

impl BrowseScreen {
    pub fn new() -> Self {
        Self {
            filter: StoreFilter::default(),
            view: ViewMode::default(),
            selection: Selection::default(),
        }
    }

    /// Preselect the category handed over by home
    pub fn enter(&mut self, session: &Storefront) {
        self.filter = match session.browse_category() {
            Some(category) => StoreFilter::with_category(category),
            None => StoreFilter::default(),
        };
        self.selection.reset();
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    fn categories() -> Vec<String> {
        catalog::filter_categories()
            .iter()
            .skip(1)
            .map(|c| c.to_string())
            .collect()
    }

    fn areas() -> Vec<String> {
        catalog::areas().iter().map(|a| a.to_string()).collect()
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        let results = self.filter.run();
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.selection.next(results.len()),
            KeyCode::Up | KeyCode::Char('k') => self.selection.prev(),
            KeyCode::Char('c') => {
                self.filter.category = cycle(&self.filter.category, &Self::categories());
                self.selection.reset();
            }
            KeyCode::Char('a') => {
                self.filter.area = cycle(&self.filter.area, &Self::areas());
                self.selection.reset();
            }
            KeyCode::Char('r') => {
                self.filter.min_rating = cycle_rating(self.filter.min_rating);
                self.selection.reset();
            }
            KeyCode::Char('v') => self.view = self.view.toggled(),
            KeyCode::Char('x') => {
                self.filter = StoreFilter::default();
                self.selection.reset();
            }
            KeyCode::Char('/') => app.storefront.open(NavigationPayload::search("")),
            KeyCode::Enter => {
                if let Some(store) = results.get(self.selection.get()) {
                    app.storefront.open(NavigationPayload::store(store.id));
                }
            }
            _ => {}
        }
    }

    fn chip(label: &str, value: String) -> Vec<Span<'static>> {
        vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
            Span::styled(
                value,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
        ]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme();
        let results = self.filter.run();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let mut chips = Self::chip(
            "Category",
            self.filter.category.clone().unwrap_or_else(|| "All".to_string()),
        );
        chips.extend(Self::chip(
            "Area",
            self.filter.area.clone().unwrap_or_else(|| "All".to_string()),
        ));
        chips.extend(Self::chip("Rating", self.filter.min_rating.to_string()));
        chips.extend(Self::chip(
            "View",
            match self.view {
                ViewMode::Grid => "Grid".to_string(),
                ViewMode::List => "List".to_string(),
            },
        ));
        render_page(
            frame,
            chunks[0],
            "Filters",
            vec![Line::from(chips)],
            PageScroll::TOP,
            scheme,
        );

        if results.is_empty() {
            frame.render_widget(empty_state::no_stores_in_area(), chunks[1]);
            return;
        }

        let mut lines = vec![Line::from(muted(format!("{} stores found", results.len())))];
        match self.view {
            ViewMode::List => {
                for (idx, store) in results.iter().enumerate() {
                    lines.push(row(self.selection.is(idx), store_spans(store, scheme), scheme));
                    lines.push(Line::from(muted(format!("      {}", store.address))));
                }
            }
            ViewMode::Grid => {
                // Two cards per row
                for (pair_idx, pair) in results.chunks(2).enumerate() {
                    let mut spans = Vec::new();
                    for (offset, store) in pair.iter().enumerate() {
                        let idx = pair_idx * 2 + offset;
                        let selected = self.selection.is(idx);
                        let style = if selected {
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        spans.push(Span::raw(if selected { "▸ " } else { "  " }));
                        spans.push(Span::styled(format!("{:<22}", store.name), style));
                        spans.push(Span::styled(
                            format!("★ {:.1}  {:<10}", store.rating, store.delivery_time),
                            Style::default().fg(Color::Yellow),
                        ));
                    }
                    lines.push(Line::from(spans));
                }
            }
        }

        render_page(
            frame,
            chunks[1],
            ScreenId::Browse.title(),
            lines,
            app.page_scroll(),
            scheme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_uses_payload_category() {
        let mut session = Storefront::new();
        session.open(NavigationPayload::browse("Groceries"));
        let mut screen = BrowseScreen::new();
        screen.enter(&session);
        assert_eq!(screen.filter.run().len(), 2);

        session.go(ScreenId::Browse);
        screen.enter(&session);
        assert_eq!(screen.filter.run().len(), 4);
    }

    #[test]
    fn test_cycle_wraps_through_none() {
        let options = vec!["a".to_string(), "b".to_string()];
        let first = cycle(&None, &options);
        assert_eq!(first.as_deref(), Some("a"));
        let second = cycle(&first, &options);
        assert_eq!(second.as_deref(), Some("b"));
        assert_eq!(cycle(&second, &options), None);
    }

    #[test]
    fn test_rating_cycle() {
        let r = cycle_rating(RatingThreshold::ANY);
        assert_eq!(r.value(), 4.5);
        let r = cycle_rating(cycle_rating(r));
        assert_eq!(r.value(), 3.5);
        assert!(cycle_rating(r).is_any());
    }

    #[test]
    fn test_area_filter_and_open_store() {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.go(ScreenId::Browse);
        let mut screen = BrowseScreen::new();
        screen.enter(&app.storefront);

        // Downtown
        screen.handle_key(KeyCode::Char('a'), &mut app);
        assert_eq!(screen.filter.run().len(), 2);

        screen.handle_key(KeyCode::Down, &mut app);
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.store_in_view().name, "HealthPlus Pharmacy");
    }

    #[test]
    fn test_view_toggle() {
        let mut app = App::new(Storefront::new(), None);
        let mut screen = BrowseScreen::new();
        screen.handle_key(KeyCode::Char('v'), &mut app);
        assert_eq!(screen.view(), ViewMode::List);
    }
}
