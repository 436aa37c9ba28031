//! Leptos UI components

mod empty_state;
mod nav_bar;
mod order_summary;
mod rating;
mod store_card;

pub use empty_state::EmptyState;
pub use nav_bar::NavBar;
pub use order_summary::OrderSummary;
pub use rating::{Rating, Stars};
pub use store_card::StoreCard;
