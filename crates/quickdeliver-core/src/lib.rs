//! quickdeliver-core - Core library for QuickDeliver
//!
//! Provides the navigation router, order total calculator, cart, mock
//! catalog, search filters and preferences shared by the terminal and web
//! storefronts.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;
pub mod navigation;
pub mod payload;
pub mod preferences;
pub mod pricing;
pub mod review;
pub mod screen;
pub mod search;
pub mod storefront;

pub use cart::Cart;
pub use error::CoreError;
pub use ids::{OrderId, ProductId, StoreId};
pub use money::Money;
pub use navigation::Navigator;
pub use payload::NavigationPayload;
pub use preferences::{ColorScheme, Preferences};
pub use pricing::{
    adjust_quantity, checked_discount, checked_quantity, compute_totals, remove_item, DeliveryTier,
    LineItem, OrderTotals,
};
pub use screen::ScreenId;
pub use search::StoreFilter;
pub use storefront::Storefront;
