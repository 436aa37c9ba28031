//! Order tracking: status timeline, courier card and order details

use super::cart::summary_lines;
use super::{heading, muted, render_page, PageScroll};
use crate::app::App;
use crate::theme::{OrderStatusColor, StepColor};
use crossterm::event::KeyCode;
use quickdeliver_core::catalog::tracking_steps;
use quickdeliver_core::ScreenId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

#[derive(Default)]
pub struct TrackingScreen;

impl TrackingScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        match key {
            KeyCode::Char('h') => app.storefront.go(ScreenId::Home),
            KeyCode::Char('o') => app.storefront.go(ScreenId::Orders),
            KeyCode::Char('c') => {
                let courier = app
                    .storefront
                    .tracked_order()
                    .courier
                    .as_ref()
                    .map(|c| format!("Calling {} at {}", c.name, c.phone));
                app.notify(courier.unwrap_or_else(|| "No courier assigned yet".to_string()));
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme();
        let order = app.storefront.tracked_order();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("Order {}", order.id),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    order.status.label(),
                    Style::default().fg(OrderStatusColor::to_color(order.status, scheme)),
                ),
            ]),
            Line::from(muted(format!(
                "{}  ·  placed {}",
                order.store,
                order.placed_on_display()
            ))),
        ];
        if let Some(eta) = &order.eta {
            lines.push(Line::from(vec![
                muted("Estimated arrival: "),
                Span::styled(eta.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(heading("Order Status"));

        for step in tracking_steps(order.status) {
            let color = StepColor::to_color(step.state, scheme);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", StepColor::icon(step.state)),
                    Style::default().fg(color),
                ),
                Span::styled(format!("{:<18}", step.label), Style::default().fg(color)),
                muted(step.time),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(heading("Delivery Partner"));
        match &order.courier {
            Some(courier) => {
                lines.push(Line::from(format!("  {}", courier.name)));
                lines.push(Line::from(muted(format!("  {}", courier.vehicle))));
                lines.push(Line::from(muted(format!("  {}", courier.phone))));
            }
            None => lines.push(Line::from(muted("  Assigned once your order is picked up"))),
        }

        render_page(
            frame,
            chunks[0],
            ScreenId::Tracking.title(),
            lines,
            app.page_scroll(),
            scheme,
        );

        let mut side = vec![heading(format!("Items ({})", order.line_count()))];
        for item in &order.lines {
            side.push(Line::from(vec![
                Span::raw(format!("{} × {:<16}", item.quantity, item.name)),
                Span::raw(item.line_total().to_string()),
            ]));
        }
        side.push(Line::from(muted(format!("Delivery: {}", order.tier))));
        side.push(Line::from(""));
        side.extend(summary_lines(&order.totals(), scheme));
        render_page(frame, chunks[1], "Details", side, PageScroll::TOP, scheme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::{NavigationPayload, OrderId, Storefront};

    #[test]
    fn test_call_courier_reports_phone() {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.go(ScreenId::Tracking);
        TrackingScreen::new().handle_key(KeyCode::Char('c'), &mut app);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Calling Mike Johnson at +1 (555) 987-6543")
        );
    }

    #[test]
    fn test_no_courier_for_delivered_order() {
        let mut app = App::new(Storefront::new(), None);
        app.storefront
            .open(NavigationPayload::tracking(OrderId::new(12343)));
        TrackingScreen::new().handle_key(KeyCode::Char('c'), &mut app);
        assert_eq!(app.status_message.as_deref(), Some("No courier assigned yet"));
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.go(ScreenId::Tracking);
        let mut screen = TrackingScreen::new();
        screen.handle_key(KeyCode::Char('o'), &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Orders);
    }
}
