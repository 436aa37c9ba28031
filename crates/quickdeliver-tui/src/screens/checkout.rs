//! Checkout: delivery address, payment and order summary

use super::cart::summary_lines;
use super::{heading, muted, render_page, PageScroll, Selection};
use crate::app::App;
use crate::components::{button_line, TextInput};
use crossterm::event::KeyCode;
use quickdeliver_core::checkout::{CheckoutField, CheckoutForm, PaymentMethod};
use quickdeliver_core::ScreenId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Field(CheckoutField),
    Payment,
    PlaceOrder,
}

fn entries(form: &CheckoutForm) -> Vec<Entry> {
    let mut entries = Vec::new();
    for field in form.visible_fields() {
        if field == CheckoutField::CardNumber || field == CheckoutField::Instructions {
            // Payment selector sits above the card block
            if !entries.contains(&Entry::Payment) {
                entries.push(Entry::Payment);
            }
        }
        entries.push(Entry::Field(field));
    }
    entries.push(Entry::PlaceOrder);
    entries
}

#[derive(Default)]
pub struct CheckoutScreen {
    selection: Selection,
    editing: bool,
}

impl CheckoutScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.selection.reset();
        self.editing = false;
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        let list = entries(&app.storefront.checkout);
        let current = list.get(self.selection.get()).copied();

        if self.editing {
            match (key, current) {
                (KeyCode::Enter | KeyCode::Esc, _) => self.editing = false,
                (other, Some(Entry::Field(field))) => {
                    TextInput::edit(app.storefront.checkout.field_mut(field), other);
                }
                _ => self.editing = false,
            }
            return;
        }

        match key {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => self.selection.next(list.len()),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => self.selection.prev(),
            KeyCode::Enter => match current {
                Some(Entry::Field(_)) => self.editing = true,
                Some(Entry::Payment) => {
                    let form = &mut app.storefront.checkout;
                    form.payment = form.payment.toggled();
                    self.selection.clamp(entries(form).len());
                }
                Some(Entry::PlaceOrder) => {
                    if app.storefront.cart().is_empty() {
                        app.notify("Your cart is empty");
                        return;
                    }
                    let id = app.storefront.place_order();
                    app.notify(format!("Order {id} placed"));
                }
                None => {}
            },
            KeyCode::Char('b') => app.storefront.go(ScreenId::Cart),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme();
        let form = &app.storefront.checkout;
        let cart = app.storefront.cart();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let mut lines = vec![heading("Delivery Address")];
        for (idx, entry) in entries(form).iter().enumerate() {
            let focused = self.selection.is(idx);
            match entry {
                Entry::Field(field) => {
                    if *field == CheckoutField::Instructions {
                        lines.push(Line::from(""));
                    }
                    lines.push(TextInput::render_line(
                        field.label(),
                        form.field(*field),
                        "",
                        *field == CheckoutField::Cvv,
                        focused,
                        focused && self.editing,
                    ));
                }
                Entry::Payment => {
                    lines.push(Line::from(""));
                    lines.push(heading("Payment Method"));
                    let mut spans = vec![Span::raw(if focused { "▸ " } else { "  " })];
                    for method in [PaymentMethod::Card, PaymentMethod::CashOnDelivery] {
                        let mark = if method == form.payment { "(•) " } else { "( ) " };
                        spans.push(Span::styled(mark, Style::default().fg(Color::Cyan)));
                        spans.push(Span::raw(format!("{}   ", method.label())));
                    }
                    lines.push(Line::from(spans));
                }
                Entry::PlaceOrder => {
                    lines.push(Line::from(""));
                    lines.push(button_line(
                        &format!("Place Order · {}", cart.totals().total),
                        focused,
                    ));
                }
            }
        }
        render_page(
            frame,
            chunks[0],
            ScreenId::Checkout.title(),
            lines,
            app.page_scroll(),
            scheme,
        );

        let mut side = vec![heading("Items")];
        for item in cart.items() {
            side.push(Line::from(vec![
                Span::raw(format!("{} × {:<16}", item.quantity, item.name)),
                Span::raw(item.line_total().to_string()),
            ]));
        }
        side.push(Line::from(muted(format!("Delivery: {}", cart.tier()))));
        side.push(Line::from(""));
        side.extend(summary_lines(&cart.totals(), scheme));
        render_page(frame, chunks[1], "Summary", side, PageScroll::TOP, scheme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::{NavigationPayload, OrderId, Storefront};

    fn at_checkout() -> (App, CheckoutScreen) {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        app.storefront.go(ScreenId::Checkout);
        (app, CheckoutScreen::new())
    }

    #[test]
    fn test_entry_layout_follows_payment() {
        let mut form = CheckoutForm::default();
        let card = entries(&form);
        assert_eq!(card.len(), 12);
        assert_eq!(card[6], Entry::Payment);

        form.payment = PaymentMethod::CashOnDelivery;
        let cash = entries(&form);
        assert_eq!(cash.len(), 9);
        assert!(!cash.contains(&Entry::Field(CheckoutField::Cvv)));
    }

    #[test]
    fn test_typing_fills_form() {
        let (mut app, mut screen) = at_checkout();
        screen.handle_key(KeyCode::Enter, &mut app);
        for c in "Jane".chars() {
            screen.handle_key(KeyCode::Char(c), &mut app);
        }
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.checkout.first_name, "Jane");
    }

    #[test]
    fn test_place_order_lands_on_tracking() {
        let (mut app, mut screen) = at_checkout();
        for _ in 0..20 {
            screen.handle_key(KeyCode::Down, &mut app);
        }
        screen.handle_key(KeyCode::Enter, &mut app);

        assert_eq!(app.storefront.active(), ScreenId::Tracking);
        assert_eq!(
            app.storefront.payload(),
            Some(&NavigationPayload::tracking(OrderId::new(12347)))
        );
        assert!(app.storefront.cart().is_empty());
    }

    #[test]
    fn test_payment_toggle() {
        let (mut app, mut screen) = at_checkout();
        for _ in 0..6 {
            screen.handle_key(KeyCode::Down, &mut app);
        }
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.checkout.payment, PaymentMethod::CashOnDelivery);
    }
}
