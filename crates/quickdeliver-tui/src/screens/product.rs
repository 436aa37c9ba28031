//! Product detail: description, quantity picker and reviews

use super::{heading, muted, price, rating, render_page};
use crate::app::App;
use crate::components::button_line;
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

pub struct ProductScreen {
    quantity: u32,
}

impl Default for ProductScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductScreen {
    pub fn new() -> Self {
        Self { quantity: 1 }
    }

    pub fn enter(&mut self) {
        self.quantity = 1;
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        let product = app.storefront.product_in_view();
        match key {
            KeyCode::Char('+') | KeyCode::Right => self.quantity = self.quantity.saturating_add(1),
            KeyCode::Char('-') | KeyCode::Left => self.quantity = (self.quantity - 1).max(1),
            KeyCode::Enter | KeyCode::Char('a') => {
                app.storefront.add_to_cart(product.id, self.quantity);
                app.notify(format!("Added {} × {} to cart", self.quantity, product.name));
                self.quantity = 1;
            }
            KeyCode::Char('b') => app.storefront.open(NavigationPayload::store(product.store_id)),
            KeyCode::Char('c') => app.storefront.go(ScreenId::Cart),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme();
        let product = app.storefront.product_in_view();
        let store = catalog::store_or_default(Some(product.store_id));

        let mut rating_line = rating(product.rating, product.review_count, scheme);
        rating_line.push(muted(format!("  ·  {}  ·  {}", product.category, store.name)));

        let mut lines = vec![
            Line::from(Span::styled(
                product.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(rating_line),
            Line::from(vec![
                price(product.price, scheme),
                muted(format!(" / {}", product.unit)),
            ]),
            Line::from(""),
            heading("Description"),
            Line::from(product.description.clone()),
            Line::from(""),
            Line::from(vec![
                Span::raw("Quantity:  "),
                Span::styled("[-] ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    self.quantity.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" [+]", Style::default().fg(Color::Cyan)),
                muted(format!("   {}", product.price.times(self.quantity))),
            ]),
            button_line("Add to Cart", true),
            Line::from(""),
            heading("Reviews"),
        ];

        let reviews = catalog::reviews_for(ReviewSubject::Product(product.id));
        if reviews.is_empty() {
            lines.push(Line::from(muted("No reviews yet")));
        }
        for review in reviews {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", stars(review.rating)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(review.author.clone()),
                muted(format!("  {}", review.date)),
            ]));
            lines.push(Line::from(format!("  {}", review.comment)));
        }

        render_page(
            frame,
            area,
            ScreenId::Product.title(),
            lines,
            app.page_scroll(),
            scheme,
        );
    }
}
