//! Rate and review a delivered order

use super::{heading, muted, render_page};
use crate::app::App;
use crate::components::{button_line, TextInput};
use crossterm::event::KeyCode;
use quickdeliver_core::review::{stars, MAX_RATING};
use quickdeliver_core::ScreenId;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

#[derive(Default)]
pub struct ReviewScreen {
    editing: bool,
}

impl ReviewScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.editing = false;
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        let draft = &mut app.storefront.review;

        if self.editing {
            match key {
                KeyCode::Enter | KeyCode::Esc => self.editing = false,
                other => {
                    TextInput::edit(&mut draft.comment, other);
                }
            }
            return;
        }

        match key {
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('l') => {
                draft.set_rating(draft.rating().saturating_add(1))
            }
            KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => {
                draft.set_rating(draft.rating().saturating_sub(1))
            }
            KeyCode::Char('e') => self.editing = true,
            KeyCode::Char('s') => app.storefront.go(ScreenId::Orders),
            KeyCode::Enter => {
                if app.storefront.submit_review() {
                    app.notify("Thanks for your feedback!");
                } else {
                    app.notify("Select a rating first");
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let draft = &app.storefront.review;

        let mut lines = Vec::new();
        match app.storefront.review_order() {
            Some(order) => {
                lines.push(Line::from(Span::styled(
                    order.store.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(muted(format!(
                    "Order {}  ·  {}  ·  {}",
                    order.id,
                    order.placed_on_display(),
                    order.totals().total
                ))));
            }
            None => lines.push(Line::from(muted("Tell us about your last delivery"))),
        }

        lines.push(Line::from(""));
        lines.push(heading("How was your experience?"));
        lines.push(Line::from(vec![
            Span::styled(
                stars(draft.rating()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            muted(format!("  {}/{MAX_RATING}", draft.rating())),
        ]));
        if let Some(label) = draft.label() {
            lines.push(Line::from(Span::styled(label, Style::default().fg(Color::Yellow))));
        }

        lines.push(Line::from(""));
        lines.push(TextInput::render_line(
            "Comment",
            &draft.comment,
            "Share details of your experience (optional)",
            false,
            self.editing,
            self.editing,
        ));
        lines.push(Line::from(""));
        lines.push(button_line("Submit Review", draft.can_submit()));

        render_page(
            frame,
            area,
            ScreenId::Review.title(),
            lines,
            app.page_scroll(),
            app.color_scheme(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::{NavigationPayload, OrderId, Storefront};

    fn reviewing() -> (App, ReviewScreen) {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        app.storefront
            .open(NavigationPayload::review(OrderId::new(12345)));
        (app, ReviewScreen::new())
    }

    #[test]
    fn test_submit_requires_rating() {
        let (mut app, mut screen) = reviewing();
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Review);
        assert_eq!(app.status_message.as_deref(), Some("Select a rating first"));
    }

    #[test]
    fn test_rate_comment_and_submit() {
        let (mut app, mut screen) = reviewing();
        for _ in 0..7 {
            screen.handle_key(KeyCode::Right, &mut app);
        }
        screen.handle_key(KeyCode::Left, &mut app);
        screen.handle_key(KeyCode::Char('+'), &mut app);
        assert_eq!(app.storefront.review.rating(), 5);

        screen.handle_key(KeyCode::Char('e'), &mut app);
        for c in "Fast".chars() {
            screen.handle_key(KeyCode::Char(c), &mut app);
        }
        screen.handle_key(KeyCode::Esc, &mut app);
        screen.handle_key(KeyCode::Enter, &mut app);

        assert_eq!(app.storefront.active(), ScreenId::Orders);
        let submitted = &app.storefront.submitted_reviews()[0];
        assert_eq!(submitted.order_id, Some(OrderId::new(12345)));
        assert_eq!(submitted.comment, "Fast");
    }

    #[test]
    fn test_skip_goes_to_orders() {
        let (mut app, mut screen) = reviewing();
        screen.handle_key(KeyCode::Char('s'), &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Orders);
    }
}
