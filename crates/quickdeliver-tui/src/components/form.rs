//! Vertical form of text inputs and buttons with keyboard focus

use super::text_input::TextInput;
use crossterm::event::KeyCode;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub enum FormEntry {
    Field { label: String, input: TextInput },
    Button { label: String },
    /// Muted link-style button
    Link { label: String },
}

/// Result of feeding a key to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Button or link at this index was activated
    Pressed(usize),
    Handled,
    Ignored,
}

pub struct Form {
    entries: Vec<FormEntry>,
    focus: usize,
    editing: bool,
}

impl Form {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            focus: 0,
            editing: false,
        }
    }

    pub fn field(mut self, label: impl Into<String>, input: TextInput) -> Self {
        self.entries.push(FormEntry::Field {
            label: label.into(),
            input,
        });
        self
    }

    pub fn button(mut self, label: impl Into<String>) -> Self {
        self.entries.push(FormEntry::Button {
            label: label.into(),
        });
        self
    }

    pub fn link(mut self, label: impl Into<String>) -> Self {
        self.entries.push(FormEntry::Link {
            label: label.into(),
        });
        self
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn value(&self, idx: usize) -> &str {
        match self.entries.get(idx) {
            Some(FormEntry::Field { input, .. }) => &input.value,
            _ => "",
        }
    }

    /// Back to the first entry with every field emptied
    pub fn reset(&mut self) {
        self.focus = 0;
        self.set_editing(false);
        for entry in &mut self.entries {
            if let FormEntry::Field { input, .. } = entry {
                input.clear();
            }
        }
    }

    fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
        for (idx, entry) in self.entries.iter_mut().enumerate() {
            if let FormEntry::Field { input, .. } = entry {
                input.active = editing && idx == self.focus;
            }
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.entries.len() as isize;
        if len == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }

    pub fn handle_key(&mut self, key: KeyCode) -> FormEvent {
        if self.editing {
            match key {
                KeyCode::Esc | KeyCode::Enter => self.set_editing(false),
                KeyCode::Tab => {
                    self.set_editing(false);
                    self.move_focus(1);
                }
                other => {
                    if let Some(FormEntry::Field { input, .. }) = self.entries.get_mut(self.focus) {
                        input.handle_key(other);
                    }
                }
            }
            return FormEvent::Handled;
        }

        match key {
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.move_focus(-1);
                FormEvent::Handled
            }
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.move_focus(1);
                FormEvent::Handled
            }
            KeyCode::Enter => match self.entries.get(self.focus) {
                Some(FormEntry::Field { .. }) => {
                    self.set_editing(true);
                    FormEvent::Handled
                }
                Some(_) => FormEvent::Pressed(self.focus),
                None => FormEvent::Ignored,
            },
            _ => FormEvent::Ignored,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let focused = idx == self.focus;
                match entry {
                    FormEntry::Field { label, input } => input.line(label, focused),
                    FormEntry::Button { label } => button_line(label, focused),
                    FormEntry::Link { label } => {
                        let style = if focused {
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
                        } else {
                            Style::default().fg(Color::DarkGray)
                        };
                        Line::from(vec![
                            Span::raw(if focused { "▸ " } else { "  " }),
                            Span::styled(label.clone(), style),
                        ])
                    }
                }
            })
            .collect()
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

/// `[ Label ]` button row
pub fn button_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Line::from(vec![
        Span::raw(if focused { "▸ " } else { "  " }),
        Span::styled(format!("[ {label} ]"), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_form() -> Form {
        Form::new()
            .field("Email", TextInput::new("you@example.com"))
            .field("Password", TextInput::new("password").masked())
            .button("Sign In")
            .link("Forgot password?")
    }

    #[test]
    fn test_enter_on_field_starts_editing() {
        let mut form = login_form();
        assert_eq!(form.handle_key(KeyCode::Enter), FormEvent::Handled);
        assert!(form.is_editing());

        for c in "jd@x.io".chars() {
            form.handle_key(KeyCode::Char(c));
        }
        form.handle_key(KeyCode::Enter);
        assert!(!form.is_editing());
        assert_eq!(form.value(0), "jd@x.io");
    }

    #[test]
    fn test_navigation_keys_are_typed_while_editing() {
        let mut form = login_form();
        form.handle_key(KeyCode::Enter);
        form.handle_key(KeyCode::Char('j'));
        assert_eq!(form.focus(), 0);
        assert_eq!(form.value(0), "j");
    }

    #[test]
    fn test_button_press_reports_index() {
        let mut form = login_form();
        form.handle_key(KeyCode::Down);
        form.handle_key(KeyCode::Down);
        assert_eq!(form.handle_key(KeyCode::Enter), FormEvent::Pressed(2));

        form.handle_key(KeyCode::Down);
        form.handle_key(KeyCode::Down);
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn test_reset_clears_values() {
        let mut form = login_form();
        form.handle_key(KeyCode::Enter);
        form.handle_key(KeyCode::Char('a'));
        form.reset();
        assert_eq!(form.value(0), "");
        assert!(!form.is_editing());
    }
}
