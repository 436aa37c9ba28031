//! Cart: line items, delivery tier, coupon and order summary

use super::{heading, muted, price, render_page, row, PageScroll, Selection};
use crate::app::App;
use crate::components::{button_line, TextInput};
use crate::empty_state;
use crossterm::event::KeyCode;
use quickdeliver_core::pricing::OrderTotals;
use quickdeliver_core::{ColorScheme, DeliveryTier, ScreenId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub struct CartScreen {
    selection: Selection,
    coupon: TextInput,
}

impl Default for CartScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Subtotal / fee / discount / total block shared with checkout
pub fn summary_lines(totals: &OrderTotals, scheme: ColorScheme) -> Vec<Line<'static>> {
    let entry = |label: &str, value: String| {
        Line::from(vec![Span::raw(format!("{label:<16}")), Span::raw(value)])
    };
    let mut lines = vec![
        heading("Order Summary"),
        entry(
            &format!("Subtotal ({})", totals.item_count),
            totals.subtotal.to_string(),
        ),
        entry("Delivery Fee", totals.delivery_fee.to_string()),
    ];
    if totals.has_discount() {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<16}", "Discount")),
            Span::styled(format!("-{}", totals.discount), Style::default().fg(Color::Green)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<16}", "Total"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        price(totals.total, scheme),
    ]));
    lines
}

impl CartScreen {
    pub fn new() -> Self {
        Self {
            selection: Selection::default(),
            coupon: TextInput::new("Enter coupon code"),
        }
    }

    pub fn enter(&mut self, app: &App) {
        self.selection.reset();
        self.coupon.active = false;
        self.coupon.value = app.storefront.cart().coupon_code().to_string();
    }

    pub fn is_editing(&self) -> bool {
        self.coupon.active
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        if self.coupon.active {
            match key {
                KeyCode::Enter | KeyCode::Esc => {
                    self.coupon.active = false;
                    app.storefront
                        .cart_mut()
                        .set_coupon_code(self.coupon.value.trim());
                }
                other => {
                    self.coupon.handle_key(other);
                }
            }
            return;
        }

        let selected = app
            .storefront
            .cart()
            .items()
            .get(self.selection.get())
            .map(|item| item.id);
        let len = app.storefront.cart().items().len();

        match key {
            KeyCode::Down | KeyCode::Char('j') => self.selection.next(len),
            KeyCode::Up | KeyCode::Char('k') => self.selection.prev(),
            KeyCode::Char('+') | KeyCode::Right => {
                if let Some(id) = selected {
                    app.storefront.cart_mut().increment(id);
                }
            }
            KeyCode::Char('-') | KeyCode::Left => {
                if let Some(id) = selected {
                    app.storefront.cart_mut().decrement(id);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = selected {
                    app.storefront.cart_mut().remove(id);
                    self.selection.clamp(len - 1);
                }
            }
            KeyCode::Char('t') => {
                let tier = app.storefront.cart().tier().toggled();
                app.storefront.cart_mut().set_tier(tier);
            }
            KeyCode::Char('p') => self.coupon.active = true,
            KeyCode::Char('b') => app.storefront.go(ScreenId::Browse),
            KeyCode::Enter => {
                if !app.storefront.cart().is_empty() {
                    app.storefront.go(ScreenId::Checkout);
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme();
        let cart = app.storefront.cart();

        if cart.is_empty() {
            render_page(
                frame,
                area,
                ScreenId::Cart.title(),
                Vec::new(),
                PageScroll::TOP,
                scheme,
            );
            let inner = Rect {
                x: area.x + 1,
                y: area.y + 1,
                width: area.width.saturating_sub(2),
                height: area.height.saturating_sub(2),
            };
            frame.render_widget(empty_state::empty_cart(), inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let mut items = Vec::new();
        for (idx, item) in cart.items().iter().enumerate() {
            items.push(row(
                self.selection.is(idx),
                vec![
                    Span::styled(
                        format!("{:<18}", item.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" [-] {:>2} [+] ", item.quantity)),
                    price(format!("{:>9}", item.line_total()), scheme),
                ],
                scheme,
            ));
            items.push(Line::from(muted(format!(
                "    {} · {} each",
                item.store, item.unit_price
            ))));
        }
        render_page(
            frame,
            chunks[0],
            &format!("{} ({} items)", ScreenId::Cart.title(), cart.item_count()),
            items,
            app.page_scroll(),
            scheme,
        );

        let mut side = vec![heading("Delivery")];
        for tier in DeliveryTier::all() {
            let chosen = *tier == cart.tier();
            side.push(Line::from(vec![
                Span::styled(
                    if chosen { "(•) " } else { "( ) " },
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(tier.to_string()),
                muted(format!("  {}", tier.fee())),
            ]));
        }
        side.push(Line::from(""));
        side.push(self.coupon.line("Coupon", self.coupon.active));
        side.push(Line::from(""));
        side.extend(summary_lines(&cart.totals(), scheme));
        side.push(Line::from(""));
        side.push(button_line("Proceed to Checkout", true));

        render_page(frame, chunks[1], "Summary", side, PageScroll::TOP, scheme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::{Money, ProductId, Storefront};

    fn in_cart() -> (App, CartScreen) {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        app.storefront.go(ScreenId::Cart);
        let mut screen = CartScreen::new();
        screen.enter(&app);
        (app, screen)
    }

    #[test]
    fn test_quantity_keys_use_calculator_rules() {
        let (mut app, mut screen) = in_cart();
        screen.handle_key(KeyCode::Down, &mut app);
        // Fresh Bread at 1 cannot go lower
        screen.handle_key(KeyCode::Char('-'), &mut app);
        assert_eq!(app.storefront.cart().quantity_of(ProductId::new(2)), 1);
        screen.handle_key(KeyCode::Char('+'), &mut app);
        assert_eq!(app.storefront.cart().quantity_of(ProductId::new(2)), 2);
    }

    #[test]
    fn test_tier_toggle_changes_total() {
        let (mut app, mut screen) = in_cart();
        screen.handle_key(KeyCode::Char('t'), &mut app);
        assert_eq!(app.storefront.cart().totals().total, Money::from_cents(3743));
    }

    #[test]
    fn test_coupon_stored_without_discount() {
        let (mut app, mut screen) = in_cart();
        screen.handle_key(KeyCode::Char('p'), &mut app);
        assert!(screen.is_editing());
        for c in "SAVE10".chars() {
            screen.handle_key(KeyCode::Char(c), &mut app);
        }
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.cart().coupon_code(), "SAVE10");
        assert_eq!(app.storefront.cart().totals().discount, Money::ZERO);
    }

    #[test]
    fn test_remove_all_then_checkout_is_blocked() {
        let (mut app, mut screen) = in_cart();
        for _ in 0..3 {
            screen.handle_key(KeyCode::Char('d'), &mut app);
        }
        assert!(app.storefront.cart().is_empty());
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Cart);
    }

    #[test]
    fn test_enter_proceeds_to_checkout() {
        let (mut app, mut screen) = in_cart();
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Checkout);
    }
}
