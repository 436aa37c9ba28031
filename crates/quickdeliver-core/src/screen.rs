//! Screen identifiers and the navigation chrome layout

use serde::{Deserialize, Serialize};
use std::fmt;

/// One full-page view in the storefront flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    #[default]
    Login,
    Register,
    ForgotPassword,
    Home,
    Browse,
    Search,
    Store,
    Product,
    Cart,
    Checkout,
    Tracking,
    Orders,
    Notifications,
    Profile,
    Review,
}

impl ScreenId {
    pub fn all() -> &'static [ScreenId] {
        &[
            ScreenId::Login,
            ScreenId::Register,
            ScreenId::ForgotPassword,
            ScreenId::Home,
            ScreenId::Browse,
            ScreenId::Search,
            ScreenId::Store,
            ScreenId::Product,
            ScreenId::Cart,
            ScreenId::Checkout,
            ScreenId::Tracking,
            ScreenId::Orders,
            ScreenId::Notifications,
            ScreenId::Profile,
            ScreenId::Review,
        ]
    }

    /// Stable kebab-case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Login => "login",
            ScreenId::Register => "register",
            ScreenId::ForgotPassword => "forgot-password",
            ScreenId::Home => "home",
            ScreenId::Browse => "browse",
            ScreenId::Search => "search",
            ScreenId::Store => "store",
            ScreenId::Product => "product",
            ScreenId::Cart => "cart",
            ScreenId::Checkout => "checkout",
            ScreenId::Tracking => "tracking",
            ScreenId::Orders => "orders",
            ScreenId::Notifications => "notifications",
            ScreenId::Profile => "profile",
            ScreenId::Review => "review",
        }
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Login => "Welcome Back",
            ScreenId::Register => "Create Account",
            ScreenId::ForgotPassword => "Reset Password",
            ScreenId::Home => "Home",
            ScreenId::Browse => "Browse Stores",
            ScreenId::Search => "Search",
            ScreenId::Store => "Store",
            ScreenId::Product => "Product",
            ScreenId::Cart => "Shopping Cart",
            ScreenId::Checkout => "Checkout",
            ScreenId::Tracking => "Track Order",
            ScreenId::Orders => "My Orders",
            ScreenId::Notifications => "Notifications",
            ScreenId::Profile => "Profile & Settings",
            ScreenId::Review => "Rate Your Order",
        }
    }

    /// Strict lookup: `None` for anything that is not a known identifier
    pub fn parse(id: &str) -> Option<ScreenId> {
        let id = id.trim();
        ScreenId::all()
            .iter()
            .copied()
            .find(|screen| screen.as_str().eq_ignore_ascii_case(id))
    }

    /// Lookup with the default route: unknown identifiers resolve to `Home`
    pub fn resolve(id: &str) -> ScreenId {
        ScreenId::parse(id).unwrap_or(ScreenId::Home)
    }

    /// Login, register and forgot-password
    pub fn is_auth_screen(&self) -> bool {
        matches!(
            self,
            ScreenId::Login | ScreenId::Register | ScreenId::ForgotPassword
        )
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge shown next to a chrome entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBadge {
    None,
    CartCount,
    UnreadNotifications,
}

/// One entry of the top/bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub screen: ScreenId,
    pub label: &'static str,
    pub shortcut: char,
    pub badge: NavBadge,
}

/// Navigation chrome entries, in display order
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        screen: ScreenId::Home,
        label: "Home",
        shortcut: '1',
        badge: NavBadge::None,
    },
    NavItem {
        screen: ScreenId::Browse,
        label: "Browse",
        shortcut: '2',
        badge: NavBadge::None,
    },
    NavItem {
        screen: ScreenId::Cart,
        label: "Cart",
        shortcut: '3',
        badge: NavBadge::CartCount,
    },
    NavItem {
        screen: ScreenId::Orders,
        label: "Orders",
        shortcut: '4',
        badge: NavBadge::None,
    },
    NavItem {
        screen: ScreenId::Profile,
        label: "Profile",
        shortcut: '5',
        badge: NavBadge::None,
    },
    NavItem {
        screen: ScreenId::Notifications,
        label: "Alerts",
        shortcut: '6',
        badge: NavBadge::UnreadNotifications,
    },
];

/// Chrome entry bound to a shortcut key
pub fn nav_item_for_shortcut(c: char) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.shortcut == c)
}
