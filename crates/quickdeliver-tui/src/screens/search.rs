//! Search screen: query box, filter chips and matching stores

use super::browse::{cycle, cycle_rating};
use super::{muted, rating, render_page, row, PageScroll, Selection};
use crate::app::App;
use crate::components::{highlight_matches, TextInput};
use crate::empty_state;
use crossterm::event::KeyCode;
use quickdeliver_core::search::DeliveryBucket;
use quickdeliver_core::{catalog, NavigationPayload, ScreenId, StoreFilter, Storefront};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    Frame,
};

pub struct SearchScreen {
    input: TextInput,
    filter: StoreFilter,
    selection: Selection,
}

impl Default for SearchScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchScreen {
    pub fn new() -> Self {
        Self {
            input: TextInput::new("Search stores..."),
            filter: StoreFilter::default(),
            selection: Selection::default(),
        }
    }

    /// Prefill the query handed over by home; an empty one starts editing
    pub fn enter(&mut self, session: &Storefront) {
        let query = session.search_query().to_string();
        self.input.active = query.is_empty();
        self.input.value = query.clone();
        self.filter = StoreFilter::with_query(query);
        self.selection.reset();
    }

    pub fn is_editing(&self) -> bool {
        self.input.active
    }

    pub fn results(&self) -> Vec<&'static catalog::Store> {
        self.filter.run()
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        if self.input.active {
            match key {
                KeyCode::Enter | KeyCode::Esc => self.input.active = false,
                other => {
                    if self.input.handle_key(other) {
                        self.filter.query = self.input.value.clone();
                        self.selection.reset();
                    }
                }
            }
            return;
        }

        let results = self.results();
        match key {
            KeyCode::Char('/') => self.input.active = true,
            KeyCode::Down | KeyCode::Char('j') => self.selection.next(results.len()),
            KeyCode::Up | KeyCode::Char('k') => self.selection.prev(),
            KeyCode::Char('c') => {
                let categories: Vec<String> = catalog::filter_categories()
                    .iter()
                    .skip(1)
                    .map(|c| c.to_string())
                    .collect();
                self.filter.category = cycle(&self.filter.category, &categories);
                self.selection.reset();
            }
            KeyCode::Char('r') => {
                self.filter.min_rating = cycle_rating(self.filter.min_rating);
                self.selection.reset();
            }
            KeyCode::Char('d') => {
                self.filter.delivery = cycle(&self.filter.delivery, DeliveryBucket::all());
                self.selection.reset();
            }
            KeyCode::Char('x') => {
                self.filter.clear();
                self.selection.reset();
            }
            KeyCode::Enter => {
                if let Some(store) = results.get(self.selection.get()) {
                    app.storefront.open(NavigationPayload::store(store.id));
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme();
        let results = self.results();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let filters = Line::from(vec![
            muted("Category: "),
            Span::raw(self.filter.category.clone().unwrap_or_else(|| "All".into())),
            muted("   Rating: "),
            Span::raw(self.filter.min_rating.to_string()),
            muted("   Delivery: "),
            Span::raw(self.filter.delivery.map_or("Any", |b| b.label())),
        ]);
        render_page(
            frame,
            chunks[0],
            ScreenId::Search.title(),
            vec![self.input.line("Search", self.input.active), filters],
            PageScroll::TOP,
            scheme,
        );

        if results.is_empty() {
            frame.render_widget(empty_state::no_search_results(&self.input.value), chunks[1]);
            return;
        }

        let mut lines = vec![Line::from(muted(format!("{} results", results.len())))];
        for (idx, store) in results.iter().enumerate() {
            let mut spans = highlight_matches(&store.name, &self.filter.query);
            spans.push(Span::raw("  "));
            spans.extend(rating(store.rating, store.review_count, scheme));
            spans.push(muted(format!(
                "  {}  {}  {:.1} km",
                store.category, store.delivery_time, store.distance_km
            )));
            lines.push(row(self.selection.is(idx), spans, scheme));
        }

        render_page(
            frame,
            chunks[1],
            "Results",
            lines,
            app.page_scroll(),
            scheme,
        );
    }
}
