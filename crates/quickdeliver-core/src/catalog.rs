//! Read-only mock catalog: stores, products, reviews, orders, notifications
//!
//! Everything here is static demo data shared by the TUI, the web frontend,
//! the JSON API and the CLI. Lookups return `Option`; screens substitute the
//! default record when a payload id is missing or unknown.

use crate::ids::{OrderId, ProductId, StoreId};
use crate::money::Money;
use crate::payload::NavigationPayload;
use crate::pricing::{compute_totals, DeliveryTier, LineItem, OrderTotals};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

// ============================================================================
// Stores & products
// ============================================================================

/// Delivery time window in minutes, e.g. 20-30 min
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryWindow {
    pub min: u32,
    pub max: u32,
}

impl DeliveryWindow {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for DeliveryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} min", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub review_count: u32,
    pub delivery_time: DeliveryWindow,
    pub area: String,
    pub distance_km: f64,
    pub phone: String,
    pub address: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub store_id: StoreId,
    pub name: String,
    pub price: Money,
    pub unit: String,
    pub rating: f64,
    pub review_count: u32,
    pub category: String,
    pub description: String,
}

/// What a review is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum ReviewSubject {
    Store(StoreId),
    Product(ProductId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub subject: ReviewSubject,
    pub author: String,
    /// 1..=5 stars
    pub rating: u8,
    pub date: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offer {
    pub id: u32,
    pub title: String,
    pub description: String,
}

fn store(
    id: u32,
    name: &str,
    category: &str,
    rating: f64,
    review_count: u32,
    window: (u32, u32),
    area: &str,
    distance_km: f64,
    address: &str,
) -> Store {
    Store {
        id: StoreId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        rating,
        review_count,
        delivery_time: DeliveryWindow::new(window.0, window.1),
        area: area.to_string(),
        distance_km,
        phone: "+1 (555) 123-4567".to_string(),
        address: address.to_string(),
        hours: "Mon-Sun: 8:00 AM - 10:00 PM".to_string(),
    }
}

static STORES: Lazy<Vec<Store>> = Lazy::new(|| {
    vec![
        store(
            1,
            "Fresh Market",
            "Groceries",
            4.8,
            450,
            (20, 30),
            "Downtown",
            1.2,
            "123 Main Street, Downtown, NY 10001",
        ),
        store(
            2,
            "Pizza Paradise",
            "Food",
            4.6,
            320,
            (25, 35),
            "Midtown",
            2.5,
            "88 Slice Avenue, Midtown, NY 10002",
        ),
        store(
            3,
            "HealthPlus Pharmacy",
            "Pharmacy",
            4.9,
            580,
            (15, 25),
            "Downtown",
            0.8,
            "9 Wellness Plaza, Downtown, NY 10001",
        ),
        store(
            4,
            "Organic Greens",
            "Groceries",
            4.7,
            290,
            (30, 40),
            "Uptown",
            3.1,
            "410 Garden Row, Uptown, NY 10003",
        ),
    ]
});

fn product(
    id: u32,
    store_id: u32,
    name: &str,
    cents: i64,
    unit: &str,
    rating: f64,
    review_count: u32,
    category: &str,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        store_id: StoreId::new(store_id),
        name: name.to_string(),
        price: Money::from_cents(cents),
        unit: unit.to_string(),
        rating,
        review_count,
        category: category.to_string(),
        description: description.to_string(),
    }
}

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        product(
            1,
            1,
            "Organic Apples",
            499,
            "lb",
            4.7,
            128,
            "Fruits & Vegetables",
            "Fresh, crisp organic apples sourced from local farms. Perfect for snacking, \
             baking, or adding to your favorite recipes. Rich in vitamins and fiber.",
        ),
        product(
            2,
            1,
            "Fresh Bread",
            349,
            "loaf",
            4.5,
            86,
            "Bakery",
            "Sourdough loaf baked every morning.",
        ),
        product(
            3,
            1,
            "Greek Yogurt",
            599,
            "pack",
            4.6,
            64,
            "Dairy",
            "Thick, protein-rich plain Greek yogurt, four cups per pack.",
        ),
        product(
            4,
            1,
            "Avocados",
            299,
            "each",
            4.4,
            51,
            "Fruits & Vegetables",
            "Hass avocados, ready to eat within two days.",
        ),
        product(
            5,
            2,
            "Margherita Pizza",
            1299,
            "12 in",
            4.7,
            210,
            "Pizza",
            "Tomato, fior di latte and basil on a wood-fired crust.",
        ),
        product(
            6,
            2,
            "Garlic Knots",
            549,
            "6 pcs",
            4.5,
            97,
            "Sides",
            "Knotted dough brushed with garlic butter and parsley.",
        ),
        product(
            7,
            3,
            "Vitamin C Tablets",
            999,
            "60 ct",
            4.8,
            143,
            "Vitamins",
            "1000 mg vitamin C with rose hips.",
        ),
        product(
            8,
            3,
            "Hand Sanitizer",
            399,
            "8 oz",
            4.6,
            75,
            "Personal Care",
            "70% alcohol gel with aloe.",
        ),
        product(
            9,
            4,
            "Baby Spinach",
            279,
            "bag",
            4.5,
            58,
            "Fruits & Vegetables",
            "Triple-washed organic baby spinach.",
        ),
        product(
            10,
            4,
            "Organic Carrots",
            199,
            "lb",
            4.3,
            40,
            "Fruits & Vegetables",
            "Sweet organic carrots, tops removed.",
        ),
    ]
});

fn review(subject: ReviewSubject, author: &str, rating: u8, date: &str, comment: &str) -> Review {
    Review {
        subject,
        author: author.to_string(),
        rating,
        date: date.to_string(),
        comment: comment.to_string(),
    }
}

static REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    let fresh_market = ReviewSubject::Store(StoreId::new(1));
    let apples = ReviewSubject::Product(ProductId::new(1));
    vec![
        review(fresh_market, "John D.", 5, "2 days ago", "Great selection and fast delivery!"),
        review(
            fresh_market,
            "Sarah M.",
            4,
            "1 week ago",
            "Good quality products, would order again.",
        ),
        review(fresh_market, "Mike R.", 5, "2 weeks ago", "Always fresh and reliable service."),
        review(apples, "Emily R.", 5, "1 day ago", "Best apples I've had! Fresh and crunchy."),
        review(apples, "David L.", 4, "3 days ago", "Good quality, though slightly expensive."),
        review(
            apples,
            "Lisa K.",
            5,
            "1 week ago",
            "Always get these, they're perfect for lunch boxes!",
        ),
        review(
            ReviewSubject::Store(StoreId::new(2)),
            "Tom B.",
            5,
            "3 days ago",
            "Arrived hot, crust still crispy.",
        ),
    ]
});

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    ["Groceries", "Food", "Pharmacy", "Packages", "Restaurants", "Coffee"]
        .iter()
        .zip(1..)
        .map(|(name, id)| Category {
            id,
            name: name.to_string(),
        })
        .collect()
});

static OFFERS: Lazy<Vec<Offer>> = Lazy::new(|| {
    [
        ("50% OFF", "On your first order"),
        ("Free Delivery", "Orders above $30"),
        ("Buy 1 Get 1", "Selected items only"),
    ]
    .iter()
    .zip(1..)
    .map(|((title, description), id)| Offer {
        id,
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
});

pub fn stores() -> &'static [Store] {
    STORES.as_slice()
}

pub fn store_by_id(id: StoreId) -> Option<&'static Store> {
    stores().iter().find(|s| s.id == id)
}

/// Store for an optional payload id, falling back to the first store
pub fn store_or_default(id: Option<StoreId>) -> &'static Store {
    id.and_then(store_by_id).unwrap_or(&STORES[0])
}

pub fn store_by_name(name: &str) -> Option<&'static Store> {
    stores().iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

pub fn products() -> &'static [Product] {
    PRODUCTS.as_slice()
}

pub fn products_for(store_id: StoreId) -> Vec<&'static Product> {
    products().iter().filter(|p| p.store_id == store_id).collect()
}

pub fn product_by_id(id: ProductId) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}

/// Product for an optional payload id, falling back to the first product
pub fn product_or_default(id: Option<ProductId>) -> &'static Product {
    id.and_then(product_by_id).unwrap_or(&PRODUCTS[0])
}

pub fn reviews_for(subject: ReviewSubject) -> Vec<&'static Review> {
    REVIEWS.iter().filter(|r| r.subject == subject).collect()
}

pub fn categories() -> &'static [Category] {
    CATEGORIES.as_slice()
}

/// Category names offered by the browse and search filters
pub fn filter_categories() -> &'static [&'static str] {
    &["All", "Groceries", "Food", "Pharmacy", "Restaurants"]
}

pub fn areas() -> &'static [&'static str] {
    &["Downtown", "Midtown", "Uptown"]
}

pub fn offers() -> &'static [Offer] {
    OFFERS.as_slice()
}

// ============================================================================
// Orders & tracking
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn is_active(&self) -> bool {
        *self != OrderStatus::Delivered
    }

    fn step_index(&self) -> usize {
        match self {
            OrderStatus::Placed => 0,
            OrderStatus::Confirmed => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::OutForDelivery => 3,
            OrderStatus::Delivered => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Courier {
    pub name: String,
    pub phone: String,
    pub vehicle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_on: NaiveDate,
    pub store: String,
    pub lines: Vec<LineItem>,
    pub tier: DeliveryTier,
    pub status: OrderStatus,
    /// Remaining delivery window for active orders
    pub eta: Option<String>,
    /// Clock time for delivered orders
    pub delivered_at: Option<String>,
    pub courier: Option<Courier>,
}

impl Order {
    pub fn totals(&self) -> OrderTotals {
        compute_totals(&self.lines, self.tier, Money::ZERO)
    }

    /// Number of distinct products
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn placed_on_display(&self) -> String {
        self.placed_on.format("%b %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingStep {
    pub label: &'static str,
    pub state: StepState,
    pub time: &'static str,
}

const STEP_LABELS: [&str; 5] = [
    "Order Placed",
    "Order Confirmed",
    "Being Prepared",
    "Out for Delivery",
    "Delivered",
];

const STEP_TIMES: [&str; 5] = ["2:30 PM", "2:35 PM", "2:45 PM", "3:00 PM", "3:15 PM"];

/// Five-step delivery timeline for an order's current status
pub fn tracking_steps(status: OrderStatus) -> Vec<TrackingStep> {
    let current = status.step_index();
    STEP_LABELS
        .into_iter()
        .zip(STEP_TIMES)
        .enumerate()
        .map(|(idx, (label, time))| {
            let state = if idx < current || status == OrderStatus::Delivered {
                StepState::Completed
            } else if idx == current {
                StepState::Active
            } else {
                StepState::Pending
            };
            TrackingStep {
                label,
                state,
                time: if state == StepState::Pending { "Soon" } else { time },
            }
        })
        .collect()
}

fn order_line(product_id: u32, quantity: u32) -> LineItem {
    let product = product_or_default(Some(ProductId::new(product_id)));
    let store = store_or_default(Some(product.store_id));
    LineItem::new(product.id, &product.name, &store.name, product.price, quantity)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    let delivered = |id: u32, day: NaiveDate, store: &str, lines: Vec<LineItem>, at: &str| Order {
        id: OrderId::new(id),
        placed_on: day,
        store: store.to_string(),
        lines,
        tier: DeliveryTier::Standard,
        status: OrderStatus::Delivered,
        eta: None,
        delivered_at: Some(at.to_string()),
        courier: None,
    };

    vec![
        Order {
            id: OrderId::new(12346),
            placed_on: date(2025, 10, 2),
            store: "Organic Greens".to_string(),
            lines: vec![order_line(9, 2), order_line(10, 3), order_line(1, 1), order_line(4, 4)],
            tier: DeliveryTier::Express,
            status: OrderStatus::OutForDelivery,
            eta: Some("15-20 min".to_string()),
            delivered_at: None,
            courier: Some(Courier {
                name: "Mike Johnson".to_string(),
                phone: "+1 (555) 987-6543".to_string(),
                vehicle: "Honda Civic - ABC 123".to_string(),
            }),
        },
        delivered(
            12345,
            date(2025, 10, 2),
            "Fresh Market",
            vec![order_line(1, 2), order_line(2, 1), order_line(3, 3)],
            "3:15 PM",
        ),
        delivered(
            12344,
            date(2025, 9, 28),
            "Pizza Paradise",
            vec![order_line(5, 1), order_line(6, 2)],
            "7:30 PM",
        ),
        delivered(
            12343,
            date(2025, 9, 25),
            "HealthPlus Pharmacy",
            vec![order_line(7, 1)],
            "11:45 AM",
        ),
        delivered(
            12342,
            date(2025, 9, 22),
            "Fresh Market",
            vec![
                order_line(1, 3),
                order_line(2, 2),
                order_line(3, 1),
                order_line(4, 2),
                order_line(2, 1),
            ],
            "2:20 PM",
        ),
    ]
});

pub fn orders() -> &'static [Order] {
    ORDERS.as_slice()
}

pub fn order_by_id(id: OrderId) -> Option<&'static Order> {
    orders().iter().find(|o| o.id == id)
}

pub fn active_orders() -> impl Iterator<Item = &'static Order> {
    orders().iter().filter(|o| o.status.is_active())
}

pub fn past_orders() -> impl Iterator<Item = &'static Order> {
    orders().iter().filter(|o| !o.status.is_active())
}

/// Order shown by tracking when no order id was handed over
pub fn default_tracked_order() -> &'static Order {
    active_orders().next().unwrap_or(&ORDERS[0])
}

/// Highest order number in the mock history
pub fn last_order_id() -> OrderId {
    orders()
        .iter()
        .map(|o| o.id)
        .max()
        .unwrap_or(OrderId::new(12345))
}

// ============================================================================
// Notifications & profile
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Order,
    Offer,
    Review,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
    pub order_id: Option<OrderId>,
}

impl Notification {
    /// Where "view" on this notification leads, if anywhere
    pub fn action(&self) -> Option<(crate::screen::ScreenId, Option<NavigationPayload>)> {
        use crate::screen::ScreenId;
        match self.kind {
            NotificationKind::Order => Some((
                ScreenId::Tracking,
                self.order_id.map(NavigationPayload::tracking),
            )),
            NotificationKind::Review => Some((
                ScreenId::Review,
                self.order_id.map(NavigationPayload::review),
            )),
            NotificationKind::Offer => None,
        }
    }
}

/// Initial notification feed; sessions own a mutable copy
pub fn notifications() -> Vec<Notification> {
    let n = |id, kind, title: &str, message: &str, time: &str, read, order: Option<u32>| {
        Notification {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            read,
            order_id: order.map(OrderId::new),
        }
    };

    vec![
        n(
            1,
            NotificationKind::Order,
            "Order Delivered",
            "Your order #12345 has been delivered successfully",
            "5 minutes ago",
            false,
            Some(12345),
        ),
        n(
            2,
            NotificationKind::Offer,
            "50% OFF on First Order",
            "Use code FIRST50 and get 50% discount on your first order",
            "1 hour ago",
            false,
            None,
        ),
        n(
            3,
            NotificationKind::Review,
            "Rate Your Order",
            "How was your experience with Fresh Market? Share your feedback",
            "2 hours ago",
            false,
            Some(12345),
        ),
        n(
            4,
            NotificationKind::Order,
            "Order Out for Delivery",
            "Your order #12346 is on the way. Expected arrival in 15 minutes",
            "3 hours ago",
            true,
            Some(12346),
        ),
        n(
            5,
            NotificationKind::Offer,
            "Weekend Special",
            "Get free delivery on all orders this weekend!",
            "1 day ago",
            true,
            None,
        ),
        n(
            6,
            NotificationKind::Order,
            "Order Confirmed",
            "Your order #12344 has been confirmed by Pizza Paradise",
            "2 days ago",
            true,
            Some(12344),
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedAddress {
    pub label: String,
    pub address: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedCard {
    pub brand: String,
    pub last4: String,
    pub expiry: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub addresses: Vec<SavedAddress>,
    pub cards: Vec<SavedCard>,
}

static PROFILE: Lazy<UserProfile> = Lazy::new(|| UserProfile {
    name: "John Doe".to_string(),
    email: "john.doe@example.com".to_string(),
    phone: "+1 (555) 123-4567".to_string(),
    addresses: vec![
        SavedAddress {
            label: "Home".to_string(),
            address: "123 Main Street, Downtown, NY 10001".to_string(),
            is_default: true,
        },
        SavedAddress {
            label: "Work".to_string(),
            address: "456 Office Park, Midtown, NY 10002".to_string(),
            is_default: false,
        },
    ],
    cards: vec![
        SavedCard {
            brand: "Visa".to_string(),
            last4: "4242".to_string(),
            expiry: "12/25".to_string(),
            is_default: true,
        },
        SavedCard {
            brand: "Mastercard".to_string(),
            last4: "8888".to_string(),
            expiry: "09/26".to_string(),
            is_default: false,
        },
    ],
});

pub fn user_profile() -> &'static UserProfile {
    &PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_lookup_and_default() {
        assert_eq!(store_by_id(StoreId::new(2)).unwrap().name, "Pizza Paradise");
        assert!(store_by_id(StoreId::new(99)).is_none());
        assert_eq!(store_or_default(Some(StoreId::new(99))).name, "Fresh Market");
        assert_eq!(store_or_default(None).id, StoreId::new(1));
    }

    #[test]
    fn test_every_product_belongs_to_a_store() {
        for p in products() {
            assert!(store_by_id(p.store_id).is_some(), "{} has no store", p.name);
        }
        assert_eq!(products_for(StoreId::new(1)).len(), 4);
    }

    #[test]
    fn test_reviews_by_subject() {
        assert_eq!(reviews_for(ReviewSubject::Store(StoreId::new(1))).len(), 3);
        assert_eq!(reviews_for(ReviewSubject::Product(ProductId::new(1))).len(), 3);
        assert!(reviews_for(ReviewSubject::Product(ProductId::new(9))).is_empty());
    }

    #[test]
    fn test_order_totals_come_from_calculator() {
        let order = order_by_id(OrderId::new(12345)).unwrap();
        let totals = order.totals();
        // 2×4.99 + 3.49 + 3×5.99 = 31.44, plus standard delivery
        assert_eq!(totals.subtotal, Money::from_cents(3144));
        assert_eq!(totals.total, Money::from_cents(3443));
        assert_eq!(order.line_count(), 3);
        assert_eq!(order.placed_on_display(), "Oct 2, 2025");
    }

    #[test]
    fn test_active_and_past_partition() {
        let active: Vec<_> = active_orders().collect();
        let past: Vec<_> = past_orders().collect();
        assert_eq!(active.len() + past.len(), orders().len());
        assert_eq!(default_tracked_order().id, OrderId::new(12346));
        assert_eq!(last_order_id(), OrderId::new(12346));
    }

    #[test]
    fn test_tracking_steps_follow_status() {
        let steps = tracking_steps(OrderStatus::OutForDelivery);
        let states: Vec<_> = steps.iter().map(|s| s.state).collect();
        assert_eq!(
            states,
            vec![
                StepState::Completed,
                StepState::Completed,
                StepState::Completed,
                StepState::Active,
                StepState::Pending,
            ]
        );
        assert_eq!(steps[4].time, "Soon");

        let delivered = tracking_steps(OrderStatus::Delivered);
        assert!(delivered.iter().all(|s| s.state == StepState::Completed));
    }

    #[test]
    fn test_notification_actions() {
        let feed = notifications();
        let unread = feed.iter().filter(|n| !n.read).count();
        assert_eq!(unread, 3);

        let (screen, payload) = feed[0].action().unwrap();
        assert_eq!(screen, crate::screen::ScreenId::Tracking);
        assert_eq!(payload.and_then(|p| p.order_id()), Some(OrderId::new(12345)));

        assert!(feed[1].action().is_none());
    }
}
