//! Login, register and forgot-password screens
//!
//! No credentials are checked: submitting any form moves on.

use super::{heading, muted, render_page};
use crate::app::App;
use crate::components::{Form, FormEvent, TextInput};
use crossterm::event::KeyCode;
use quickdeliver_core::ScreenId;
use ratatui::{layout::Rect, text::Line, Frame};

pub struct LoginScreen {
    form: Form,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    const SIGN_IN: usize = 2;
    const FORGOT: usize = 3;
    const SIGN_UP: usize = 4;

    pub fn new() -> Self {
        Self {
            form: Form::new()
                .field("Email", TextInput::new("you@example.com"))
                .field("Password", TextInput::new("Enter your password").masked())
                .button("Sign In")
                .link("Forgot password?")
                .link("Don't have an account? Sign up"),
        }
    }

    pub fn enter(&mut self) {
        self.form.reset();
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        match self.form.handle_key(key) {
            FormEvent::Pressed(Self::SIGN_IN) => app.storefront.sign_in(),
            FormEvent::Pressed(Self::FORGOT) => app.storefront.go(ScreenId::ForgotPassword),
            FormEvent::Pressed(Self::SIGN_UP) => app.storefront.go(ScreenId::Register),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let mut lines = vec![
            Line::from(""),
            heading("Welcome Back"),
            Line::from(muted("Sign in to continue ordering")),
            Line::from(""),
        ];
        lines.extend(self.form.lines());
        render_page(
            frame,
            area,
            ScreenId::Login.title(),
            lines,
            app.page_scroll(),
            app.color_scheme(),
        );
    }
}

pub struct RegisterScreen {
    form: Form,
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterScreen {
    const CREATE: usize = 5;
    const SIGN_IN: usize = 6;

    pub fn new() -> Self {
        Self {
            form: Form::new()
                .field("Full Name", TextInput::new("John Doe"))
                .field("Email", TextInput::new("you@example.com"))
                .field("Phone", TextInput::new("+1 (555) 000-0000"))
                .field("Password", TextInput::new("Create a password").masked())
                .field("Confirm Password", TextInput::new("Repeat the password").masked())
                .button("Create Account")
                .link("Already have an account? Sign in"),
        }
    }

    pub fn enter(&mut self) {
        self.form.reset();
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        match self.form.handle_key(key) {
            FormEvent::Pressed(Self::CREATE) => app.storefront.sign_in(),
            FormEvent::Pressed(Self::SIGN_IN) => app.storefront.go(ScreenId::Login),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let mut lines = vec![
            Line::from(""),
            heading("Create Account"),
            Line::from(muted("Sign up to start ordering")),
            Line::from(""),
        ];
        lines.extend(self.form.lines());
        render_page(
            frame,
            area,
            ScreenId::Register.title(),
            lines,
            app.page_scroll(),
            app.color_scheme(),
        );
    }
}

pub struct ForgotPasswordScreen {
    form: Form,
    /// Reset link "sent" to this address
    sent_to: Option<String>,
}

impl Default for ForgotPasswordScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgotPasswordScreen {
    const SEND: usize = 1;
    const BACK: usize = 2;

    pub fn new() -> Self {
        Self {
            form: Form::new()
                .field("Email", TextInput::new("you@example.com"))
                .button("Send Reset Link")
                .link("Back to login"),
            sent_to: None,
        }
    }

    pub fn enter(&mut self) {
        self.form.reset();
        self.sent_to = None;
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) {
        match self.form.handle_key(key) {
            FormEvent::Pressed(Self::SEND) => {
                self.sent_to = Some(self.form.value(0).to_string());
            }
            FormEvent::Pressed(Self::BACK) => app.storefront.go(ScreenId::Login),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let mut lines = vec![Line::from(""), heading("Reset Password"), Line::from("")];

        match &self.sent_to {
            Some(email) => {
                lines.push(heading("Check your email"));
                let target = if email.is_empty() { "your inbox" } else { email };
                lines.push(Line::from(muted(format!(
                    "We've sent a password reset link to {target}"
                ))));
                lines.push(Line::from(""));
            }
            None => {
                lines.push(Line::from(muted(
                    "Enter your email and we'll send you a reset link",
                )));
                lines.push(Line::from(""));
            }
        }
        lines.extend(self.form.lines());

        render_page(
            frame,
            area,
            ScreenId::ForgotPassword.title(),
            lines,
            app.page_scroll(),
            app.color_scheme(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::Storefront;

    fn press(screen: &mut LoginScreen, app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            screen.handle_key(*key, app);
        }
    }

    #[test]
    fn test_sign_in_goes_home_without_credentials() {
        let mut app = App::new(Storefront::new(), None);
        let mut screen = LoginScreen::new();
        press(&mut screen, &mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.storefront.active(), ScreenId::Home);
        assert!(app.storefront.navigator().is_authenticated());
    }

    #[test]
    fn test_login_links() {
        let mut app = App::new(Storefront::new(), None);
        let mut screen = LoginScreen::new();
        press(&mut screen, &mut app, &[KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.storefront.active(), ScreenId::Register);

        let mut register = RegisterScreen::new();
        register.handle_key(KeyCode::Up, &mut app);
        register.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Login);
    }

    #[test]
    fn test_forgot_password_returns_to_login() {
        let mut app = App::new(Storefront::new(), None);
        app.storefront.go(ScreenId::ForgotPassword);
        let mut screen = ForgotPasswordScreen::new();

        screen.handle_key(KeyCode::Down, &mut app);
        screen.handle_key(KeyCode::Enter, &mut app);
        assert!(screen.sent_to.is_some());
        assert_eq!(app.storefront.active(), ScreenId::ForgotPassword);

        screen.handle_key(KeyCode::Down, &mut app);
        screen.handle_key(KeyCode::Enter, &mut app);
        assert_eq!(app.storefront.active(), ScreenId::Login);
    }
}
