//! TUI screen implementations, one per `ScreenId`

pub mod auth;
pub mod browse;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod notifications;
pub mod orders;
pub mod product;
pub mod profile;
pub mod review;
pub mod search;
pub mod store;
pub mod tracking;

pub use auth::{ForgotPasswordScreen, LoginScreen, RegisterScreen};
pub use browse::BrowseScreen;
pub use cart::CartScreen;
pub use checkout::CheckoutScreen;
pub use home::HomeScreen;
pub use notifications::NotificationsScreen;
pub use orders::OrdersScreen;
pub use product::ProductScreen;
pub use profile::ProfileScreen;
pub use review::ReviewScreen;
pub use search::SearchScreen;
pub use store::StoreScreen;
pub use tracking::TrackingScreen;

use std::cell::Cell;

use quickdeliver_core::catalog::Store;
use quickdeliver_core::ColorScheme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::theme::{FocusStyle, StatusColor};

/// Cursor over a list whose length is known at key time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    pub fn get(&self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1).min(len - 1);
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Keep the cursor inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn is(&self, idx: usize) -> bool {
        self.index == idx
    }
}

/// Requested offset for a page, and where the renderer reports its scroll limit
#[derive(Debug, Clone, Copy)]
pub struct PageScroll<'a> {
    offset: u16,
    limit: Option<&'a Cell<u16>>,
}

impl<'a> PageScroll<'a> {
    /// Fixed panel that never scrolls
    pub const TOP: PageScroll<'static> = PageScroll {
        offset: 0,
        limit: None,
    };

    pub fn tracked(offset: u16, limit: &'a Cell<u16>) -> Self {
        Self {
            offset,
            limit: Some(limit),
        }
    }
}

/// Rows `lines` occupy once wrapped to `width`
fn wrapped_height(lines: &[Line<'_>], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

/// Bordered, scrollable page body
///
/// The offset is clamped so the last content line stays on screen.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    scroll: PageScroll<'_>,
    scheme: ColorScheme,
) {
    let inner_height = usize::from(area.height.saturating_sub(2));
    let content_height = wrapped_height(&lines, area.width.saturating_sub(2));
    let max_scroll =
        u16::try_from(content_height.saturating_sub(inner_height)).unwrap_or(u16::MAX);
    if let Some(limit) = scroll.limit {
        limit.set(max_scroll);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FocusStyle::unfocused_border(scheme)))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(FocusStyle::focused_border(scheme))
                .add_modifier(Modifier::BOLD),
        ));

    let page = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll.offset.min(max_scroll), 0));
    frame.render_widget(page, area);
}

pub fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
}

pub fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

pub fn price(text: impl ToString, scheme: ColorScheme) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default().fg(StatusColor::Important.to_color(scheme)),
    )
}

/// `★ 4.8 (450)`
pub fn rating(value: f64, count: u32, scheme: ColorScheme) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("★ {value:.1}"),
            Style::default().fg(StatusColor::Warning.to_color(scheme)),
        ),
        muted(format!(" ({count})")),
    ]
}

/// Prefix a row with a cursor marker and highlight it when selected
pub fn row(selected: bool, mut spans: Vec<Span<'static>>, scheme: ColorScheme) -> Line<'static> {
    let marker = if selected {
        Span::styled(
            "▸ ",
            Style::default().fg(StatusColor::Focus.to_color(scheme)),
        )
    } else {
        Span::raw("  ")
    };
    spans.insert(0, marker);
    let line = Line::from(spans);
    if selected {
        line.style(Style::default().bg(FocusStyle::focused_bg(scheme)))
    } else {
        line
    }
}

/// One-line store summary used by home, browse and search
pub fn store_spans(store: &Store, scheme: ColorScheme) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format!("{:<22}", store.name),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    spans.extend(rating(store.rating, store.review_count, scheme));
    spans.push(muted(format!(
        "  {}  {}  {:.1} km  {}",
        store.category, store.delivery_time, store.distance_km, store.area
    )));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_height_counts_wrapped_rows() {
        let lines = vec![Line::from("x".repeat(25)), Line::from(""), Line::from("short")];
        assert_eq!(wrapped_height(&lines, 10), 5);
        assert_eq!(wrapped_height(&lines, 0), 31);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut sel = Selection::default();
        sel.prev();
        assert_eq!(sel.get(), 0);
        for _ in 0..5 {
            sel.next(3);
        }
        assert_eq!(sel.get(), 2);
        sel.clamp(1);
        assert_eq!(sel.get(), 0);
        sel.next(0);
        assert_eq!(sel.get(), 0);
    }
}
