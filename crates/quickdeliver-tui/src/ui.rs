//! TUI rendering logic

use crate::app::App;
use crate::components::NavBar;
use crate::screens::{
    BrowseScreen, CartScreen, CheckoutScreen, ForgotPasswordScreen, HomeScreen, LoginScreen,
    NotificationsScreen, OrdersScreen, ProductScreen, ProfileScreen, RegisterScreen, ReviewScreen,
    SearchScreen, StoreScreen, TrackingScreen,
};
use crossterm::event::KeyCode;
use quickdeliver_core::ScreenId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::debug;

/// Main UI renderer, one state holder per screen
pub struct Ui {
    login: LoginScreen,
    register: RegisterScreen,
    forgot_password: ForgotPasswordScreen,
    home: HomeScreen,
    browse: BrowseScreen,
    search: SearchScreen,
    store: StoreScreen,
    product: ProductScreen,
    cart: CartScreen,
    checkout: CheckoutScreen,
    tracking: TrackingScreen,
    orders: OrdersScreen,
    profile: ProfileScreen,
    notifications: NotificationsScreen,
    review: ReviewScreen,
    /// Router transition count the screens were last reset for
    synced_transition: Option<u64>,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            login: LoginScreen::new(),
            register: RegisterScreen::new(),
            forgot_password: ForgotPasswordScreen::new(),
            home: HomeScreen::new(),
            browse: BrowseScreen::new(),
            search: SearchScreen::new(),
            store: StoreScreen::new(),
            product: ProductScreen::new(),
            cart: CartScreen::new(),
            checkout: CheckoutScreen::new(),
            tracking: TrackingScreen::new(),
            orders: OrdersScreen::new(),
            profile: ProfileScreen::new(),
            notifications: NotificationsScreen::new(),
            review: ReviewScreen::new(),
            synced_transition: None,
        }
    }

    /// Reset the active screen's local state after every router transition
    pub fn sync(&mut self, app: &App) {
        let count = app.storefront.navigator().transition_count();
        if self.synced_transition == Some(count) {
            return;
        }
        self.synced_transition = Some(count);

        let active = app.storefront.active();
        debug!(screen = %active, "entering screen");
        match active {
            ScreenId::Login => self.login.enter(),
            ScreenId::Register => self.register.enter(),
            ScreenId::ForgotPassword => self.forgot_password.enter(),
            ScreenId::Home => self.home.enter(),
            ScreenId::Browse => self.browse.enter(&app.storefront),
            ScreenId::Search => self.search.enter(&app.storefront),
            ScreenId::Store => self.store.enter(),
            ScreenId::Product => self.product.enter(),
            ScreenId::Cart => self.cart.enter(app),
            ScreenId::Checkout => self.checkout.enter(),
            ScreenId::Tracking => {}
            ScreenId::Orders => self.orders.enter(),
            ScreenId::Profile => self.profile.enter(),
            ScreenId::Notifications => self.notifications.enter(),
            ScreenId::Review => self.review.enter(),
        }
    }

    /// Whether the active screen is capturing keystrokes as text
    pub fn is_editing(&self, app: &App) -> bool {
        match app.storefront.active() {
            ScreenId::Login => self.login.is_editing(),
            ScreenId::Register => self.register.is_editing(),
            ScreenId::ForgotPassword => self.forgot_password.is_editing(),
            ScreenId::Home => self.home.is_editing(),
            ScreenId::Search => self.search.is_editing(),
            ScreenId::Cart => self.cart.is_editing(),
            ScreenId::Checkout => self.checkout.is_editing(),
            ScreenId::Review => self.review.is_editing(),
            _ => false,
        }
    }

    /// Handle key input for the active screen
    pub fn handle_screen_key(&mut self, key: KeyCode, app: &mut App) {
        self.sync(app);
        match app.storefront.active() {
            ScreenId::Login => self.login.handle_key(key, app),
            ScreenId::Register => self.register.handle_key(key, app),
            ScreenId::ForgotPassword => self.forgot_password.handle_key(key, app),
            ScreenId::Home => self.home.handle_key(key, app),
            ScreenId::Browse => self.browse.handle_key(key, app),
            ScreenId::Search => self.search.handle_key(key, app),
            ScreenId::Store => self.store.handle_key(key, app),
            ScreenId::Product => self.product.handle_key(key, app),
            ScreenId::Cart => self.cart.handle_key(key, app),
            ScreenId::Checkout => self.checkout.handle_key(key, app),
            ScreenId::Tracking => self.tracking.handle_key(key, app),
            ScreenId::Orders => self.orders.handle_key(key, app),
            ScreenId::Profile => self.profile.handle_key(key, app),
            ScreenId::Notifications => self.notifications.handle_key(key, app),
            ScreenId::Review => self.review.handle_key(key, app),
        }
        self.sync(app);
    }

    /// Render the full UI
    pub fn render(&mut self, frame: &mut Frame, app: &App) {
        self.sync(app);
        let size = frame.area();
        let chrome = app.storefront.navigator().shows_chrome();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if chrome { 2 } else { 0 }), // Nav bar
                Constraint::Min(0),                             // Screen
                Constraint::Length(1),                          // Status bar
            ])
            .split(size);

        if chrome {
            NavBar::render(frame, chunks[0], &app.storefront);
        }
        self.render_screen(frame, chunks[1], app);
        self.render_status_bar(frame, chunks[2], app);

        if app.no_color {
            for cell in frame.buffer_mut().content.iter_mut() {
                cell.set_fg(Color::Reset).set_bg(Color::Reset);
            }
        }
    }

    fn render_screen(&self, frame: &mut Frame, area: Rect, app: &App) {
        match app.storefront.active() {
            ScreenId::Login => self.login.render(frame, area, app),
            ScreenId::Register => self.register.render(frame, area, app),
            ScreenId::ForgotPassword => self.forgot_password.render(frame, area, app),
            ScreenId::Home => self.home.render(frame, area, app),
            ScreenId::Browse => self.browse.render(frame, area, app),
            ScreenId::Search => self.search.render(frame, area, app),
            ScreenId::Store => self.store.render(frame, area, app),
            ScreenId::Product => self.product.render(frame, area, app),
            ScreenId::Cart => self.cart.render(frame, area, app),
            ScreenId::Checkout => self.checkout.render(frame, area, app),
            ScreenId::Tracking => self.tracking.render(frame, area, app),
            ScreenId::Orders => self.orders.render(frame, area, app),
            ScreenId::Profile => self.profile.render(frame, area, app),
            ScreenId::Notifications => self.notifications.render(frame, area, app),
            ScreenId::Review => self.review.render(frame, area, app),
        }
    }

    fn hint(&self, app: &App) -> &'static str {
        if self.is_editing(app) {
            return "type to edit │ Enter/Esc done";
        }
        match app.storefront.active() {
            ScreenId::Login | ScreenId::Register | ScreenId::ForgotPassword => {
                "↑↓ move │ Enter edit/press"
            }
            ScreenId::Home => "/ search │ ↑↓ select │ Enter open │ n alerts",
            ScreenId::Browse => "c category │ a area │ r rating │ v view │ x clear │ / search",
            ScreenId::Search => "/ edit │ c category │ r rating │ d delivery │ x clear",
            ScreenId::Store => "←→ section │ ↑↓ select │ Enter open │ a add │ c cart",
            ScreenId::Product => "+/- quantity │ Enter add │ b store │ c cart",
            ScreenId::Cart => "+/- qty │ d remove │ t tier │ p coupon │ Enter checkout",
            ScreenId::Checkout => "↑↓ move │ Enter edit/toggle │ b back to cart",
            ScreenId::Tracking => "c call courier │ o orders │ h home",
            ScreenId::Orders => "Enter track │ r review │ o reorder",
            ScreenId::Profile => "↑↓ select │ Enter toggle │ l log out",
            ScreenId::Notifications => "Enter open │ m mark read │ a mark all",
            ScreenId::Review => "←→ rating │ e comment │ Enter submit │ s skip",
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, app: &App) {
        let status = if let Some(ref msg) = app.status_message {
            Line::from(vec![
                Span::styled(
                    " ● ",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)),
            ])
        } else {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", app.storefront.active().title()),
                    Style::default().fg(Color::White),
                ),
                Span::styled("│", Style::default().fg(Color::Gray)),
                Span::styled(
                    " q",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" quit ", Style::default().fg(Color::Gray)),
                Span::styled("│", Style::default().fg(Color::Gray)),
                Span::styled(format!(" {}", self.hint(app)), Style::default().fg(Color::Gray)),
            ])
        };

        let bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::Storefront;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(ui: &mut Ui, app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui.render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_login_has_no_chrome() {
        let mut ui = Ui::new();
        let app = App::new(Storefront::new(), None);
        let text = screen_text(&mut ui, &app);
        assert!(text.contains("Welcome Back"));
        assert!(!text.contains("QuickDeliver"));
    }

    #[test]
    fn test_chrome_after_sign_in() {
        let mut ui = Ui::new();
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        let text = screen_text(&mut ui, &app);
        assert!(text.contains("QuickDeliver"));
        assert!(text.contains("Cart (6)"));
    }

    #[test]
    fn test_every_screen_renders() {
        let mut ui = Ui::new();
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        for screen in ScreenId::all() {
            app.storefront.go(*screen);
            let text = screen_text(&mut ui, &app);
            assert!(text.contains(screen.title()), "{screen} missing title");
        }
    }

    #[test]
    fn test_screen_state_resets_on_transition() {
        let mut ui = Ui::new();
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        app.storefront.go(ScreenId::Orders);
        ui.handle_screen_key(KeyCode::Down, &mut app);
        ui.handle_screen_key(KeyCode::Char('r'), &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Review);

        ui.handle_screen_key(KeyCode::Char('e'), &mut app);
        assert!(ui.is_editing(&app));

        app.storefront.go(ScreenId::Review);
        ui.sync(&app);
        assert!(!ui.is_editing(&app));
    }

    #[test]
    fn test_no_color_strips_palette() {
        let mut ui = Ui::new();
        let mut app = App::new(Storefront::new(), None);
        app.no_color = true;
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui.render(f, &app)).unwrap();
        assert!(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .all(|cell| cell.fg == Color::Reset && cell.bg == Color::Reset));
    }

    #[test]
    fn test_page_down_keeps_last_line_visible() {
        let mut ui = Ui::new();
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        let mut terminal = Terminal::new(TestBackend::new(120, 16)).unwrap();
        terminal.draw(|f| ui.render(f, &app)).unwrap();

        for _ in 0..20 {
            app.handle_key(KeyCode::PageDown, crossterm::event::KeyModifiers::NONE);
            terminal.draw(|f| ui.render(f, &app)).unwrap();
        }
        assert!(app.storefront.navigator().scroll_offset() < 200);

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        let last_store = &quickdeliver_core::catalog::stores().last().unwrap().name;
        assert!(text.contains(last_store.as_str()));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut ui = Ui::new();
        let mut app = App::new(Storefront::new(), None);
        app.storefront.sign_in();
        app.notify("Added Avocados to cart");
        let text = screen_text(&mut ui, &app);
        assert!(text.contains("Added Avocados to cart"));
    }
}
