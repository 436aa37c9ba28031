//! Notification feed with read state

use super::{muted, render_page, row, Selection};
use crate::app::App;
use crate::empty_state;
use crate::theme::NotificationColor;
use crossterm::event::KeyCode;
use quickdeliver_core::ScreenId;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

#[derive(Default)]
pub struct NotificationsScreen {
    selection: Selection,
}

impl NotificationsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.selection.reset();
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        let selected = app
            .storefront
            .notifications()
            .get(self.selection.get())
            .map(|n| n.id);
        let len = app.storefront.notifications().len();

        match key {
            KeyCode::Down | KeyCode::Char('j') => self.selection.next(len),
            KeyCode::Up | KeyCode::Char('k') => self.selection.prev(),
            KeyCode::Enter => {
                if let Some(id) = selected {
                    app.storefront.open_notification(id);
                }
            }
            KeyCode::Char('m') => {
                if let Some(id) = selected {
                    app.storefront.mark_read(id);
                }
            }
            KeyCode::Char('a') => {
                app.storefront.mark_all_read();
                app.notify("All notifications marked as read");
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme();
        let notifications = app.storefront.notifications();

        if notifications.is_empty() {
            frame.render_widget(empty_state::no_notifications(), area);
            return;
        }

        let unread = app.storefront.unread_count();
        let mut lines = vec![
            Line::from(muted(if unread == 0 {
                "You're all caught up".to_string()
            } else {
                format!("{unread} unread")
            })),
            Line::from(""),
        ];

        for (idx, n) in notifications.iter().enumerate() {
            let title_style = if n.read {
                Style::default()
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(row(
                self.selection.is(idx),
                vec![
                    Span::styled(
                        format!("{} ", NotificationColor::icon(n.kind)),
                        Style::default().fg(NotificationColor::to_color(n.kind, scheme)),
                    ),
                    Span::styled(n.title.clone(), title_style),
                    Span::styled(
                        if n.read { "" } else { "  •" },
                        Style::default().fg(NotificationColor::to_color(n.kind, scheme)),
                    ),
                    muted(format!("  {}", n.time)),
                ],
                scheme,
            ));
            lines.push(Line::from(muted(format!("    {}", n.message))));
        }

        render_page(
            frame,
            area,
            ScreenId::Notifications.title(),
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

    fn at_notifications() -> (App, NotificationsScreen) {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        app.storefront.go(ScreenId::Notifications);
        (app, NotificationsScreen::new())
    }

    #[test]
    fn test_open_order_notification_tracks_order() {
        let (mut app, mut screen) = at_notifications();
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Tracking);
        assert_eq!(app.storefront.unread_count(), 2);
    }

    #[test]
    fn test_offer_marks_read_without_leaving() {
        let (mut app, mut screen) = at_notifications();
        screen.handle_key(KeyCode::Down, &mut app);
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Notifications);
        assert_eq!(app.storefront.unread_count(), 2);
    }

    #[test]
    fn test_mark_all_read() {
        let (mut app, mut screen) = at_notifications();
        screen.handle_key(KeyCode::Char('a'), &mut app);
        assert_eq!(app.storefront.unread_count(), 0);
    }
}
