//! Typed data handed from one screen to the next during a transition

use crate::ids::{OrderId, ProductId, StoreId};
use crate::screen::ScreenId;
use serde::{Deserialize, Serialize};

/// Payload attached to a transition, one variant per receiving screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationPayload {
    /// Home search box → search
    Search { query: String },
    /// Home category tile → browse
    Browse { category: String },
    /// Store card → store profile
    Store { id: StoreId },
    /// Product card → product detail
    Product { id: ProductId },
    /// Checkout or order list → tracking
    Tracking { order_id: OrderId },
    /// Order list → review
    Review { order_id: OrderId },
}

impl NavigationPayload {
    pub fn search(query: impl Into<String>) -> Self {
        NavigationPayload::Search {
            query: query.into(),
        }
    }

    pub fn browse(category: impl Into<String>) -> Self {
        NavigationPayload::Browse {
            category: category.into(),
        }
    }

    pub fn store(id: StoreId) -> Self {
        NavigationPayload::Store { id }
    }

    pub fn product(id: ProductId) -> Self {
        NavigationPayload::Product { id }
    }

    pub fn tracking(order_id: OrderId) -> Self {
        NavigationPayload::Tracking { order_id }
    }

    pub fn review(order_id: OrderId) -> Self {
        NavigationPayload::Review { order_id }
    }

    /// The screen this payload is shaped for
    pub fn destination(&self) -> ScreenId {
        match self {
            NavigationPayload::Search { .. } => ScreenId::Search,
            NavigationPayload::Browse { .. } => ScreenId::Browse,
            NavigationPayload::Store { .. } => ScreenId::Store,
            NavigationPayload::Product { .. } => ScreenId::Product,
            NavigationPayload::Tracking { .. } => ScreenId::Tracking,
            NavigationPayload::Review { .. } => ScreenId::Review,
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            NavigationPayload::Search { query } => Some(query),
            _ => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            NavigationPayload::Browse { category } => Some(category),
            _ => None,
        }
    }

    pub fn store_id(&self) -> Option<StoreId> {
        match self {
            NavigationPayload::Store { id } => Some(*id),
            _ => None,
        }
    }

    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            NavigationPayload::Product { id } => Some(*id),
            _ => None,
        }
    }

    /// Order referenced by a tracking or review payload
    pub fn order_id(&self) -> Option<OrderId> {
        match self {
            NavigationPayload::Tracking { order_id } | NavigationPayload::Review { order_id } => {
                Some(*order_id)
            }
            _ => None,
        }
    }
}
