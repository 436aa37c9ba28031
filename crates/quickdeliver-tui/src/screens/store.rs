//! Store profile: header, products, reviews and store info

use super::{heading, muted, price, rating, render_page, row, Selection};
use crate::app::App;
use crossterm::event::KeyCode;
use quickdeliver_core::catalog::{self, ReviewSubject};
use quickdeliver_core::review::stars;
use quickdeliver_core::{NavigationPayload, ScreenId};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreSection {
    #[default]
    Products,
    Reviews,
    Info,
}

impl StoreSection {
    const ALL: [StoreSection; 3] = [StoreSection::Products, StoreSection::Reviews, StoreSection::Info];

    fn label(&self) -> &'static str {
        match self {
            StoreSection::Products => "Products",
            StoreSection::Reviews => "Reviews",
            StoreSection::Info => "Info",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    fn shifted(&self, delta: isize) -> StoreSection {
        let len = Self::ALL.len() as isize;
        Self::ALL[(self.index() as isize + delta).rem_euclid(len) as usize]
    }
}

#[derive(Default)]
pub struct StoreScreen {
    section: StoreSection,
    selection: Selection,
}

impl StoreScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.section = StoreSection::Products;
        self.selection.reset();
    }

    pub fn section(&self) -> StoreSection {
        self.section
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        let store = app.storefront.store_in_view();
        let products = catalog::products_for(store.id);

        match key {
            KeyCode::Right | KeyCode::Char('l') => self.section = self.section.shifted(1),
            KeyCode::Left | KeyCode::Char('h') => self.section = self.section.shifted(-1),
            KeyCode::Down | KeyCode::Char('j') => self.selection.next(products.len()),
            KeyCode::Up | KeyCode::Char('k') => self.selection.prev(),
            KeyCode::Enter if self.section == StoreSection::Products => {
                if let Some(product) = products.get(self.selection.get()) {
                    app.storefront.open(NavigationPayload::product(product.id));
                }
            }
            KeyCode::Char('a') if self.section == StoreSection::Products => {
                if let Some(product) = products.get(self.selection.get()) {
                    app.storefront.add_to_cart(product.id, 1);
                    app.notify(format!("Added {} to cart", product.name));
                }
            }
            KeyCode::Char('c') => app.storefront.go(ScreenId::Cart),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme();
        let store = app.storefront.store_in_view();

        let mut header = vec![Span::styled(
            store.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        header.push(Span::raw("  "));
        header.extend(rating(store.rating, store.review_count, scheme));

        let mut lines = vec![
            Line::from(header),
            Line::from(muted(format!(
                "{}  ·  {}  ·  {:.1} km  ·  {}",
                store.category, store.delivery_time, store.distance_km, store.area
            ))),
            Line::from(""),
        ];

        let tabs: Vec<Span> = StoreSection::ALL
            .iter()
            .map(|section| {
                let style = if *section == self.section {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Span::styled(format!(" {} ", section.label()), style)
            })
            .collect();
        lines.push(Line::from(tabs));
        lines.push(Line::from(""));

        match self.section {
            StoreSection::Products => {
                for (idx, product) in catalog::products_for(store.id).iter().enumerate() {
                    let in_cart = app.storefront.cart().quantity_of(product.id);
                    let mut spans = vec![
                        Span::raw(format!("{:<20}", product.name)),
                        price(format!("{:>8}", product.price), scheme),
                        muted(format!(" / {}", product.unit)),
                    ];
                    if in_cart > 0 {
                        spans.push(Span::styled(
                            format!("  · {in_cart} in cart"),
                            Style::default().fg(Color::Green),
                        ));
                    }
                    lines.push(row(self.selection.is(idx), spans, scheme));
                }
            }
            StoreSection::Reviews => {
                for review in catalog::reviews_for(ReviewSubject::Store(store.id)) {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{} ", stars(review.rating)),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::styled(review.author.clone(), Style::default().add_modifier(Modifier::BOLD)),
                        muted(format!("  {}", review.date)),
                    ]));
                    lines.push(Line::from(format!("  {}", review.comment)));
                    lines.push(Line::from(""));
                }
            }
            StoreSection::Info => {
                lines.push(heading("Address"));
                lines.push(Line::from(format!("  {}", store.address)));
                lines.push(heading("Phone"));
                lines.push(Line::from(format!("  {}", store.phone)));
                lines.push(heading("Hours"));
                lines.push(Line::from(format!("  {}", store.hours)));
            }
        }

        render_page(
            frame,
            area,
            ScreenId::Store.title(),
            lines,
            app.page_scroll(),
            scheme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::{StoreId, Storefront};

    fn at_store(id: u32) -> App {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.open(NavigationPayload::store(StoreId::new(id)));
        app
    }

    #[test]
    fn test_section_cycles() {
        let mut app = at_store(1);
        let mut screen = StoreScreen::new();
        screen.handle_key(KeyCode::Left, &mut app);
        assert_eq!(screen.section(), StoreSection::Info);
        screen.handle_key(KeyCode::Right, &mut app);
        assert_eq!(screen.section(), StoreSection::Products);
    }

    #[test]
    fn test_add_and_open_product() {
        let mut app = at_store(2);
        let mut screen = StoreScreen::new();
        let before = app.storefront.cart().item_count();

        screen.handle_key(KeyCode::Char('a'), &mut app);
        assert_eq!(app.storefront.cart().item_count(), before + 1);
        assert!(app.status_message.is_some());

        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Product);
        assert_eq!(app.storefront.product_in_view().name, "Margherita Pizza");
    }
}
