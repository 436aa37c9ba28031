use crossterm::event::KeyCode;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Single-line text input used by search boxes and forms
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current value
    pub value: String,
    /// Whether keystrokes go to this input
    pub active: bool,
    /// Placeholder text when empty
    pub placeholder: String,
    /// Render as dots (passwords, CVV)
    pub masked: bool,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Apply an editing key to `value`; returns false for keys it ignores
    pub fn edit(value: &mut String, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) => {
                value.push(c);
                true
            }
            KeyCode::Backspace => {
                value.pop();
                true
            }
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        Self::edit(&mut self.value, key)
    }

    /// Input rendered as one line: `label: value_`
    pub fn line(&self, label: &str, focused: bool) -> Line<'static> {
        Self::render_line(label, &self.value, &self.placeholder, self.masked, focused, self.active)
    }

    /// Render any string as an input row
    pub fn render_line(
        label: &str,
        value: &str,
        placeholder: &str,
        masked: bool,
        focused: bool,
        editing: bool,
    ) -> Line<'static> {
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let (text, style) = if value.is_empty() {
            (placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else if masked {
            ("•".repeat(value.chars().count()), Style::default().fg(Color::White))
        } else {
            (value.to_string(), Style::default().fg(Color::White))
        };

        let mut spans = vec![
            Span::styled(if focused { "▸ " } else { "  " }, label_style),
            Span::styled(format!("{label}: "), label_style),
            Span::styled(text, style),
        ];
        if editing {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    }
}

/// Highlight search matches in text with yellow background
///
/// Matching is case-insensitive; with no match the text comes back as a
/// single raw span.
pub fn highlight_matches(text: &str, query: &str) -> Vec<Span<'static>> {
    let query = query.trim();
    if query.is_empty() {
        return vec![Span::raw(text.to_string())];
    }

    let query_lower = query.to_lowercase();
    let text_lower = text.to_lowercase();
    // Lowercasing can change byte lengths outside ASCII
    if text_lower.len() != text.len() {
        return vec![Span::raw(text.to_string())];
    }

    let mut spans = Vec::new();
    let mut last_end = 0;

    for (idx, _) in text_lower.match_indices(&query_lower) {
        if idx > last_end {
            spans.push(Span::raw(text[last_end..idx].to_string()));
        }

        let match_end = idx + query_lower.len();
        spans.push(Span::styled(
            text[idx..match_end].to_string(),
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));

        last_end = match_end;
    }

    if last_end < text.len() {
        spans.push(Span::raw(text[last_end..].to_string()));
    }

    spans
}
