use quickdeliver_core::screen::{NavItem, NAV_ITEMS};
use quickdeliver_core::{ScreenId, Storefront};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Navigation chrome: logo plus the main sections with badges
pub struct NavBar;

impl NavBar {
    /// Index of the chrome entry matching the active screen
    pub fn selected(active: ScreenId) -> Option<usize> {
        NAV_ITEMS.iter().position(|item| item.screen == active)
    }

    pub fn title(item: &NavItem, session: &Storefront) -> String {
        match session.badge_count(item.badge) {
            Some(count) => format!(" {} {} ({}) ", item.shortcut, item.label, count),
            None => format!(" {} {} ", item.shortcut, item.label),
        }
    }

    pub fn render(frame: &mut Frame, area: Rect, session: &Storefront) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(17), Constraint::Min(0)])
            .split(inner);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled("◈ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                "QuickDeliver",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(logo, chunks[0]);

        let active = session.active();
        let titles: Vec<Line> = NAV_ITEMS
            .iter()
            .map(|item| {
                let style = if item.screen == active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(Span::styled(Self::title(item, session), style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(Self::selected(active))
            .divider(Span::styled("│", Style::default().fg(Color::DarkGray)));
        frame.render_widget(tabs, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges_in_titles() {
        let session = Storefront::new();
        let cart = &NAV_ITEMS[2];
        assert_eq!(NavBar::title(cart, &session), " 3 Cart (6) ");
        let home = &NAV_ITEMS[0];
        assert_eq!(NavBar::title(home, &session), " 1 Home ");
    }

    #[test]
    fn test_selected_only_for_chrome_screens() {
        assert_eq!(NavBar::selected(ScreenId::Orders), Some(3));
        assert_eq!(NavBar::selected(ScreenId::Checkout), None);
    }
}
