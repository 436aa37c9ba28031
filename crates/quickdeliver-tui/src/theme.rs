//! Unified theme and color system for the QuickDeliver TUI
//!
//! Provides a consistent color language across all screens:
//! - Green: Delivered, Completed, Success
//! - Yellow: Active step, Ratings, Attention
//! - Cyan: Selected, Focus, Interactive
//! - Magenta: Prices and totals

use quickdeliver_core::catalog::{NotificationKind, OrderStatus, StepState};
use quickdeliver_core::ColorScheme;
use ratatui::style::Color;

/// Status color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    /// Green: Delivered, Completed, Success
    Success,
    /// Red: Errors, Remove actions
    Error,
    /// Yellow: Active, Ratings, Attention
    Warning,
    /// Gray: Pending, Disabled, Neutral
    Neutral,
    /// Cyan: Selected, Focus, Interactive
    Focus,
    /// Magenta: Prices, Totals
    Important,
}

impl StatusColor {
    /// Convert to Ratatui Color based on color scheme
    pub fn to_color(self, scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => match self {
                StatusColor::Success => Color::Green,
                StatusColor::Error => Color::Red,
                StatusColor::Warning => Color::Yellow,
                StatusColor::Neutral => Color::DarkGray,
                StatusColor::Focus => Color::Cyan,
                StatusColor::Important => Color::Magenta,
            },
            ColorScheme::Light => match self {
                StatusColor::Success => Color::Rgb(0, 128, 0),
                StatusColor::Error => Color::Rgb(200, 0, 0),
                StatusColor::Warning => Color::Rgb(180, 120, 0),
                StatusColor::Neutral => Color::Gray,
                StatusColor::Focus => Color::Rgb(0, 128, 128),
                StatusColor::Important => Color::Rgb(128, 0, 128),
            },
        }
    }
}

/// Order status badge color
pub struct OrderStatusColor;

impl OrderStatusColor {
    pub fn to_color(status: OrderStatus, scheme: ColorScheme) -> Color {
        match status {
            OrderStatus::Delivered => StatusColor::Success.to_color(scheme),
            OrderStatus::OutForDelivery => StatusColor::Focus.to_color(scheme),
            _ => StatusColor::Warning.to_color(scheme),
        }
    }
}

/// Tracking timeline step color and icon
pub struct StepColor;

impl StepColor {
    pub fn to_color(state: StepState, scheme: ColorScheme) -> Color {
        match state {
            StepState::Completed => StatusColor::Success.to_color(scheme),
            StepState::Active => StatusColor::Warning.to_color(scheme),
            StepState::Pending => StatusColor::Neutral.to_color(scheme),
        }
    }

    pub fn icon(state: StepState) -> &'static str {
        match state {
            StepState::Completed => "✓",
            StepState::Active => "●",
            StepState::Pending => "○",
        }
    }
}

/// Notification kind color and icon
pub struct NotificationColor;

impl NotificationColor {
    pub fn to_color(kind: NotificationKind, scheme: ColorScheme) -> Color {
        match kind {
            NotificationKind::Order => StatusColor::Focus.to_color(scheme),
            NotificationKind::Offer => StatusColor::Important.to_color(scheme),
            NotificationKind::Review => StatusColor::Warning.to_color(scheme),
        }
    }

    pub fn icon(kind: NotificationKind) -> &'static str {
        match kind {
            NotificationKind::Order => "📦",
            NotificationKind::Offer => "🎁",
            NotificationKind::Review => "★",
        }
    }
}

/// Focus state colors
pub struct FocusStyle;

impl FocusStyle {
    /// Border color for focused pane
    pub fn focused_border(scheme: ColorScheme) -> Color {
        StatusColor::Focus.to_color(scheme)
    }

    /// Border color for unfocused pane
    pub fn unfocused_border(scheme: ColorScheme) -> Color {
        StatusColor::Neutral.to_color(scheme)
    }

    /// Background for the selected row
    pub fn focused_bg(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::DarkGray,
            ColorScheme::Light => Color::Rgb(220, 220, 220),
        }
    }
}

/// Base color helpers for backgrounds and foregrounds
pub struct BaseColors;

impl BaseColors {
    /// Primary background color
    pub fn bg(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::Black,
            ColorScheme::Light => Color::White,
        }
    }

    /// Primary foreground/text color
    pub fn fg(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::White,
            ColorScheme::Light => Color::Black,
        }
    }

    /// Muted/secondary text color
    pub fn muted(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::DarkGray,
            ColorScheme::Light => Color::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_icons() {
        assert_eq!(StepColor::icon(StepState::Completed), "✓");
        assert_eq!(StepColor::icon(StepState::Active), "●");
        assert_eq!(StepColor::icon(StepState::Pending), "○");
    }

    #[test]
    fn test_delivered_is_success_color() {
        assert_eq!(
            OrderStatusColor::to_color(OrderStatus::Delivered, ColorScheme::Dark),
            Color::Green
        );
        assert_eq!(
            OrderStatusColor::to_color(OrderStatus::Delivered, ColorScheme::Light),
            Color::Rgb(0, 128, 0)
        );
    }

    #[test]
    fn test_base_colors_invert_with_scheme() {
        assert_eq!(BaseColors::bg(ColorScheme::Dark), BaseColors::fg(ColorScheme::Light));
        assert_eq!(BaseColors::fg(ColorScheme::Dark), BaseColors::bg(ColorScheme::Light));
    }
}
