//! Profile: account details, saved addresses and cards, settings

use super::{heading, muted, render_page, row, Selection};
use crate::app::App;
use crossterm::event::KeyCode;
use quickdeliver_core::catalog::user_profile;
use quickdeliver_core::{ColorScheme, Preferences, ScreenId};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Setting {
    Theme,
    DefaultTier,
    OrderUpdates,
    Promotions,
    NewStores,
    LogOut,
}

const SETTINGS: [Setting; 6] = [
    Setting::Theme,
    Setting::DefaultTier,
    Setting::OrderUpdates,
    Setting::Promotions,
    Setting::NewStores,
    Setting::LogOut,
];

impl Setting {
    fn label(&self) -> &'static str {
        match self {
            Setting::Theme => "Theme",
            Setting::DefaultTier => "Default delivery",
            Setting::OrderUpdates => "Order updates",
            Setting::Promotions => "Promotions & offers",
            Setting::NewStores => "New stores nearby",
            Setting::LogOut => "Log Out",
        }
    }

    fn value(&self, prefs: &Preferences) -> String {
        let switch = |on: bool| if on { "[on]" } else { "[off]" }.to_string();
        match self {
            Setting::Theme => match prefs.color_scheme {
                ColorScheme::Dark => "Dark".to_string(),
                ColorScheme::Light => "Light".to_string(),
            },
            Setting::DefaultTier => prefs.default_tier.label().to_string(),
            Setting::OrderUpdates => switch(prefs.notifications.order_updates),
            Setting::Promotions => switch(prefs.notifications.promotions),
            Setting::NewStores => switch(prefs.notifications.new_stores),
            Setting::LogOut => String::new(),
        }
    }
}

#[derive(Default)]
pub struct ProfileScreen {
    selection: Selection,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.selection.reset();
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.selection.next(SETTINGS.len()),
            KeyCode::Up | KeyCode::Char('k') => self.selection.prev(),
            KeyCode::Char('l') => app.storefront.log_out(),
            KeyCode::Char('o') => app.storefront.go(ScreenId::Orders),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let prefs = &mut app.storefront.preferences;
                match SETTINGS[self.selection.get()] {
                    Setting::Theme => prefs.color_scheme = prefs.color_scheme.toggled(),
                    Setting::DefaultTier => prefs.default_tier = prefs.default_tier.toggled(),
                    Setting::OrderUpdates => {
                        prefs.notifications.order_updates = !prefs.notifications.order_updates
                    }
                    Setting::Promotions => {
                        prefs.notifications.promotions = !prefs.notifications.promotions
                    }
                    Setting::NewStores => {
                        prefs.notifications.new_stores = !prefs.notifications.new_stores
                    }
                    Setting::LogOut => app.storefront.log_out(),
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme();
        let profile = user_profile();
        let prefs = &app.storefront.preferences;

        let mut lines = vec![
            Line::from(Span::styled(
                profile.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(muted(format!("{}  ·  {}", profile.email, profile.phone))),
            Line::from(muted(format!(
                "{} orders  ·  {} reviews written",
                app.storefront.orders().count(),
                app.storefront.submitted_reviews().len()
            ))),
            Line::from(""),
            heading("Saved Addresses"),
        ];
        for address in &profile.addresses {
            let mut spans = vec![
                Span::styled(format!("  {:<6}", address.label), Style::default().fg(Color::Cyan)),
                Span::raw(address.address.clone()),
            ];
            if address.is_default {
                spans.push(muted("  (default)"));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(heading("Payment Methods"));
        for card in &profile.cards {
            let mut spans = vec![
                Span::raw(format!("  {} •••• {}", card.brand, card.last4)),
                muted(format!("  expires {}", card.expiry)),
            ];
            if card.is_default {
                spans.push(muted("  (default)"));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(heading("Settings"));
        for (idx, setting) in SETTINGS.iter().enumerate() {
            let label_style = if *setting == Setting::LogOut {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            lines.push(row(
                self.selection.is(idx),
                vec![
                    Span::styled(format!("{:<22}", setting.label()), label_style),
                    Span::styled(setting.value(prefs), Style::default().fg(Color::Cyan)),
                ],
                scheme,
            ));
        }

        render_page(
            frame,
            area,
            ScreenId::Profile.title(),
            lines,
            app.page_scroll(),
            scheme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::{DeliveryTier, Storefront};

    fn at_profile() -> (App, ProfileScreen) {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        app.storefront.go(ScreenId::Profile);
        (app, ProfileScreen::new())
    }

    #[test]
    fn test_settings_toggle_preferences() {
        let (mut app, mut screen) = at_profile();
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.color_scheme(), ColorScheme::Light);

        screen.handle_key(KeyCode::Down, &mut app);
        screen.handle_key(KeyCode::Char(' '), &mut app);
        assert_eq!(app.storefront.preferences.default_tier, DeliveryTier::Express);

        screen.handle_key(KeyCode::Down, &mut app);
        screen.handle_key(KeyCode::Enter, &mut app);
        assert!(!app.storefront.preferences.notifications.order_updates);
    }

    #[test]
    fn test_log_out_returns_to_login() {
        let (mut app, mut screen) = at_profile();
        for _ in 0..SETTINGS.len() {
            screen.handle_key(KeyCode::Down, &mut app);
        }
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Login);
        assert!(!app.storefront.navigator().shows_chrome());
    }
}
