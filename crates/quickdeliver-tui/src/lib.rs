//! quickdeliver-tui - terminal storefront for QuickDeliver using Ratatui

pub mod app;
pub mod components;
pub mod empty_state;
pub mod screens;
pub mod theme;
pub mod ui;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quickdeliver_core::Storefront;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Run the TUI application until the user quits
pub fn run(storefront: Storefront, data_dir: Option<PathBuf>, no_color: bool) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(storefront, data_dir);
    app.no_color = no_color;
    let mut ui = ui::Ui::new();
    info!(screen = %app.storefront.active(), "tui started");

    let result = run_loop(&mut terminal, &mut app, &mut ui);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(
        transitions = app.storefront.navigator().transition_count(),
        "tui stopped"
    );
    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, ui: &mut ui::Ui) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui.render(f, app))?;

        // Handle input with timeout for event polling
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    dispatch_key(app, ui, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Route one key press: global keys first unless a text field owns the keyboard
pub fn dispatch_key(app: &mut App, ui: &mut ui::Ui, code: KeyCode, modifiers: KeyModifiers) {
    let ctrl_c = modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c');
    let handled = if ui.is_editing(app) && !ctrl_c {
        false
    } else {
        app.handle_key(code, modifiers)
    };

    if !handled {
        ui.handle_screen_key(code, app);
    }
    app.persist_preferences();
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::{Preferences, ScreenId};
    use tempfile::TempDir;

    fn press(app: &mut App, ui: &mut ui::Ui, keys: &[KeyCode]) {
        for key in keys {
            dispatch_key(app, ui, *key, KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_typing_q_in_field_does_not_quit() {
        let mut app = App::new(Storefront::new(), None);
        let mut ui = ui::Ui::new();
        press(&mut app, &mut ui, &[KeyCode::Enter, KeyCode::Char('q')]);
        assert!(!app.should_quit);
        press(&mut app, &mut ui, &[KeyCode::Esc, KeyCode::Char('q')]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = App::new(Storefront::new(), None);
        let mut ui = ui::Ui::new();
        press(&mut app, &mut ui, &[KeyCode::Enter]);
        dispatch_key(&mut app, &mut ui, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_sign_in_and_shop_through_keys() {
        let mut app = App::new(Storefront::new(), None);
        let mut ui = ui::Ui::new();

        // Email, Password, then the Sign In button
        press(&mut app, &mut ui, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.storefront.active(), ScreenId::Home);

        press(&mut app, &mut ui, &[KeyCode::Char('3')]);
        assert_eq!(app.storefront.active(), ScreenId::Cart);

        press(&mut app, &mut ui, &[KeyCode::Char('t'), KeyCode::Enter]);
        assert_eq!(app.storefront.active(), ScreenId::Checkout);
    }

    #[test]
    fn test_profile_toggle_is_persisted() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Storefront::new(), Some(dir.path().to_path_buf()));
        let mut ui = ui::Ui::new();
        app.storefront.sign_in();

        press(&mut app, &mut ui, &[KeyCode::Char('5'), KeyCode::Enter]);
        let saved = Preferences::read(dir.path()).unwrap();
        assert_eq!(saved.color_scheme, app.color_scheme());
    }
}
