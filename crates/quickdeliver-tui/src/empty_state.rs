//! Reusable empty state components with actionable hints
//!
//! Provides consistent empty state patterns across screens.

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Builder for empty state messages
pub struct EmptyState {
    title: String,
    message: Vec<String>,
    actions: Vec<(String, String)>, // (key, description)
}

impl EmptyState {
    /// Create new empty state with title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a message line
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message.push(msg.into());
        self
    }

    /// Add an action hint
    pub fn action(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.actions.push((key.into(), description.into()));
        self
    }

    pub fn lines(self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.title, Style::default().fg(Color::Yellow))),
            Line::from(""),
        ];

        for msg in self.message {
            lines.push(Line::from(Span::styled(
                msg,
                Style::default().fg(Color::DarkGray),
            )));
        }

        if !self.actions.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Actions:",
                Style::default().fg(Color::Cyan),
            )));

            for (key, desc) in self.actions {
                lines.push(Line::from(vec![
                    Span::styled("  [", Style::default().fg(Color::DarkGray)),
                    Span::styled(key, Style::default().fg(Color::Green)),
                    Span::styled("] ", Style::default().fg(Color::DarkGray)),
                    Span::styled(desc, Style::default().fg(Color::White)),
                ]));
            }
        }

        lines
    }

    /// Build the paragraph widget
    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(self.lines()).alignment(Alignment::Center)
    }
}

pub fn empty_cart() -> Paragraph<'static> {
    EmptyState::new("Your cart is empty")
        .message("Add items from a store to get started")
        .action("b", "Browse stores")
        .action("1", "Home")
        .build()
}

pub fn no_search_results(query: &str) -> Paragraph<'static> {
    let state = if query.trim().is_empty() {
        EmptyState::new("No stores match these filters")
    } else {
        EmptyState::new(format!("No results for \"{}\"", query.trim()))
    };

    state
        .message("Try a different search term or loosen the filters")
        .action("/", "Edit search")
        .action("x", "Clear filters")
        .build()
}

pub fn no_stores_in_area() -> Paragraph<'static> {
    EmptyState::new("No stores found")
        .message("Nothing matches this category and area")
        .action("a", "Change area")
        .action("x", "Clear filters")
        .build()
}

pub fn no_notifications() -> Paragraph<'static> {
    EmptyState::new("You're all caught up")
        .message("Order updates and offers will show up here")
        .action("1", "Home")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_lays_out_title_messages_and_actions() {
        let lines = EmptyState::new("Nothing here")
            .message("first")
            .action("k", "do it")
            .lines();

        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text[1], "Nothing here");
        assert_eq!(text[3], "first");
        assert_eq!(text.last().map(String::as_str), Some("  [k] do it"));
    }
}
