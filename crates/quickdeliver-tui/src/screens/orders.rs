//! Order history: active orders first, then past orders

use super::{heading, muted, price, render_page, row, Selection};
use crate::app::App;
use crate::theme::OrderStatusColor;
use crossterm::event::KeyCode;
use quickdeliver_core::catalog::Order;
use quickdeliver_core::{NavigationPayload, OrderId, ScreenId, Storefront};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

#[derive(Default)]
pub struct OrdersScreen {
    selection: Selection,
}

/// Selectable rows in display order, with whether each is still active
fn listed(session: &Storefront) -> Vec<(OrderId, bool)> {
    session
        .active_orders()
        .map(|o| (o.id, true))
        .chain(session.past_orders().map(|o| (o.id, false)))
        .collect()
}

impl OrdersScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.selection.reset();
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        let rows = listed(&app.storefront);
        let current = rows.get(self.selection.get()).copied();

        match (key, current) {
            (KeyCode::Down | KeyCode::Char('j'), _) => self.selection.next(rows.len()),
            (KeyCode::Up | KeyCode::Char('k'), _) => self.selection.prev(),
            (KeyCode::Enter | KeyCode::Char('t'), Some((id, true))) => {
                app.storefront.open(NavigationPayload::tracking(id));
            }
            (KeyCode::Char('r'), Some((id, false))) => {
                app.storefront.open(NavigationPayload::review(id));
            }
            (KeyCode::Char('o'), Some((id, _))) => {
                app.storefront.reorder(id);
                app.notify(format!("Items from order {id} added to cart"));
            }
            _ => {}
        }
    }

    fn order_lines(&self, idx: usize, order: &Order, app: &App) -> Vec<Line<'static>> {
        let scheme = app.color_scheme();
        let totals = order.totals();
        vec![
            row(
                self.selection.is(idx),
                vec![
                    Span::styled(
                        format!("{:<8}", order.id),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{:<22}", order.store)),
                    Span::styled(
                        format!("{:<18}", order.status.label()),
                        Style::default().fg(OrderStatusColor::to_color(order.status, scheme)),
                    ),
                    price(totals.total, scheme),
                ],
                scheme,
            ),
            Line::from(muted(format!(
                "    {}  ·  {} items  ·  {}",
                order.placed_on_display(),
                totals.item_count,
                match (&order.eta, &order.delivered_at) {
                    (_, Some(at)) => format!("delivered {at}"),
                    (Some(eta), None) => format!("arriving in {eta}"),
                    (None, None) => order.tier.label().to_string(),
                }
            ))),
        ]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let session = &app.storefront;
        let mut lines = vec![heading("Active Orders")];
        let mut idx = 0;

        let active: Vec<&Order> = session.active_orders().collect();
        if active.is_empty() {
            lines.push(Line::from(muted("  No orders on the way")));
        }
        for order in active {
            lines.extend(self.order_lines(idx, order, app));
            idx += 1;
        }

        lines.push(Line::from(""));
        lines.push(heading("Past Orders"));
        for order in session.past_orders() {
            lines.extend(self.order_lines(idx, order, app));
            idx += 1;
        }

        render_page(
            frame,
            area,
            ScreenId::Orders.title(),
            lines,
            app.page_scroll(),
            app.color_scheme(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_orders() -> (App, OrdersScreen) {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        app.storefront.go(ScreenId::Orders);
        (app, OrdersScreen::new())
    }

    #[test]
    fn test_active_order_opens_tracking() {
        let (mut app, mut screen) = at_orders();
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Tracking);
        assert_eq!(app.storefront.tracked_order().id, OrderId::new(12346));
    }

    #[test]
    fn test_past_order_review_and_reorder() {
        let (mut app, mut screen) = at_orders();
        screen.handle_key(KeyCode::Down, &mut app);

        // Past orders cannot be tracked
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Orders);

        screen.handle_key(KeyCode::Char('r'), &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Review);
        assert_eq!(
            app.storefront.review_order().map(|o| o.id),
            Some(OrderId::new(12345))
        );
    }

    #[test]
    fn test_reorder_fills_cart() {
        let (mut app, mut screen) = at_orders();
        app.storefront.cart_mut().clear();
        for _ in 0..3 {
            screen.handle_key(KeyCode::Down, &mut app);
        }
        // #12343: one Vitamin C
        screen.handle_key(KeyCode::Char('o'), &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Cart);
        assert_eq!(app.storefront.cart().item_count(), 1);
    }

    #[test]
    fn test_placed_order_listed_first() {
        let (mut app, _) = at_orders();
        let id = app.storefront.place_order();
        assert_eq!(listed(&app.storefront)[0], (id, true));
    }
}
