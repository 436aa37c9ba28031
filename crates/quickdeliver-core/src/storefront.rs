//! Storefront session: router, cart and per-session UI data
//!
//! Hosts own exactly one [`Storefront`]. Screens read from it and request
//! screen changes through [`Storefront::transition`], which forwards to the
//! [`Navigator`].

use crate::cart::Cart;
use crate::catalog::{self, Notification, Order, OrderStatus, Product, Store};
use crate::checkout::CheckoutForm;
use crate::ids::{OrderId, ProductId};
use crate::navigation::Navigator;
use crate::payload::NavigationPayload;
use crate::preferences::Preferences;
use crate::review::ReviewDraft;
use crate::screen::{NavBadge, ScreenId};
use chrono::Local;
use serde::Serialize;
use tracing::info;

/// Review submitted during this session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedReview {
    pub order_id: Option<OrderId>,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct Storefront {
    navigator: Navigator,
    cart: Cart,
    notifications: Vec<Notification>,
    pub checkout: CheckoutForm,
    pub review: ReviewDraft,
    pub preferences: Preferences,
    placed_orders: Vec<Order>,
    submitted_reviews: Vec<SubmittedReview>,
    next_order_id: OrderId,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl Storefront {
    /// Signed-out session on the login screen with the demo cart
    pub fn new() -> Self {
        Self::with_preferences(Preferences::default())
    }

    pub fn with_preferences(preferences: Preferences) -> Self {
        let mut cart = Cart::demo();
        cart.set_tier(preferences.default_tier);

        Self {
            navigator: Navigator::new(),
            cart,
            notifications: catalog::notifications(),
            checkout: CheckoutForm::default(),
            review: ReviewDraft::default(),
            preferences,
            placed_orders: Vec::new(),
            submitted_reviews: Vec::new(),
            next_order_id: catalog::last_order_id().next(),
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn active(&self) -> ScreenId {
        self.navigator.active()
    }

    pub fn payload(&self) -> Option<&NavigationPayload> {
        self.navigator.payload()
    }

    pub fn transition(&mut self, target: ScreenId, payload: Option<NavigationPayload>) {
        self.navigator.transition(target, payload);
    }

    pub fn transition_to(&mut self, id: &str, payload: Option<NavigationPayload>) {
        self.navigator.transition_to(id, payload);
    }

    pub fn go(&mut self, target: ScreenId) {
        self.navigator.go(target);
    }

    pub fn open(&mut self, payload: NavigationPayload) {
        self.navigator.open(payload);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.navigator.scroll_by(delta);
    }

    pub fn clamp_scroll(&mut self, max: u16) {
        self.navigator.clamp_scroll(max);
    }

    /// Count shown next to a chrome entry, if any
    pub fn badge_count(&self, badge: NavBadge) -> Option<usize> {
        let count = match badge {
            NavBadge::None => return None,
            NavBadge::CartCount => self.cart.item_count() as usize,
            NavBadge::UnreadNotifications => self.unread_count(),
        };
        (count > 0).then_some(count)
    }

    // ------------------------------------------------------------------
    // Payload resolution, falling back to default data
    // ------------------------------------------------------------------

    pub fn search_query(&self) -> &str {
        self.payload().and_then(|p| p.query()).unwrap_or_default()
    }

    pub fn browse_category(&self) -> Option<&str> {
        self.payload().and_then(|p| p.category())
    }

    pub fn store_in_view(&self) -> &'static Store {
        catalog::store_or_default(self.payload().and_then(|p| p.store_id()))
    }

    pub fn product_in_view(&self) -> &'static Product {
        catalog::product_or_default(self.payload().and_then(|p| p.product_id()))
    }

    /// Order for the tracking screen: payload id, else the default active order
    pub fn tracked_order(&self) -> &Order {
        self.payload()
            .and_then(|p| p.order_id())
            .and_then(|id| self.find_order(id))
            .unwrap_or_else(|| {
                self.placed_orders
                    .last()
                    .unwrap_or_else(|| catalog::default_tracked_order())
            })
    }

    pub fn review_order(&self) -> Option<&Order> {
        self.payload()
            .and_then(|p| p.order_id())
            .and_then(|id| self.find_order(id))
    }

    // ------------------------------------------------------------------
    // Cart & checkout
    // ------------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn add_to_cart(&mut self, id: ProductId, quantity: u32) {
        if let Some(product) = catalog::product_by_id(id) {
            self.cart.add_product(product, quantity);
        }
    }

    /// Order number the next placed order will get
    pub fn next_order_id(&self) -> OrderId {
        self.next_order_id
    }

    /// Record the cart as an order, clear it and show its tracking page
    pub fn place_order(&mut self) -> OrderId {
        let id = self.next_order_id;
        self.next_order_id = id.next();

        let store = self
            .cart
            .items()
            .first()
            .map_or_else(|| "QuickDeliver".to_string(), |item| item.store.clone());
        let tier = self.cart.tier();
        let order = Order {
            id,
            placed_on: Local::now().date_naive(),
            store,
            lines: self.cart.items().to_vec(),
            tier,
            status: OrderStatus::Placed,
            eta: Some(tier.eta().to_string()),
            delivered_at: None,
            courier: None,
        };

        info!(order = %id, total = %order.totals().total, "order placed");
        self.placed_orders.push(order);
        self.cart.clear();
        self.open(NavigationPayload::tracking(id));
        id
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    pub fn find_order(&self, id: OrderId) -> Option<&Order> {
        self.placed_orders
            .iter()
            .find(|o| o.id == id)
            .or_else(|| catalog::order_by_id(id))
    }

    /// Orders placed this session first, then the mock history
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.placed_orders.iter().rev().chain(catalog::orders())
    }

    pub fn active_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders().filter(|o| o.status.is_active())
    }

    pub fn past_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders().filter(|o| !o.status.is_active())
    }

    /// Put an order's lines back into the cart and show the cart
    pub fn reorder(&mut self, id: OrderId) {
        if let Some(lines) = self.find_order(id).map(|o| o.lines.clone()) {
            for line in lines {
                self.cart.add(line);
            }
        }
        self.go(ScreenId::Cart);
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: u32) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    /// Mark a notification read and follow its action, if it has one
    pub fn open_notification(&mut self, id: u32) {
        self.mark_read(id);
        let action = self
            .notifications
            .iter()
            .find(|n| n.id == id)
            .and_then(Notification::action);
        if let Some((screen, payload)) = action {
            self.transition(screen, payload);
        }
    }

    // ------------------------------------------------------------------
    // Review
    // ------------------------------------------------------------------

    /// Submit the draft; refused while no star is selected
    pub fn submit_review(&mut self) -> bool {
        if !self.review.can_submit() {
            return false;
        }
        let order_id = self.payload().and_then(|p| p.order_id());
        info!(order = ?order_id, rating = self.review.rating(), "review submitted");
        self.submitted_reviews.push(SubmittedReview {
            order_id,
            rating: self.review.rating(),
            comment: std::mem::take(&mut self.review.comment),
        });
        self.review.clear();
        self.go(ScreenId::Orders);
        true
    }

    pub fn submitted_reviews(&self) -> &[SubmittedReview] {
        &self.submitted_reviews
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// No credentials are checked
    pub fn sign_in(&mut self) {
        self.go(ScreenId::Home);
    }

    pub fn log_out(&mut self) {
        self.go(ScreenId::Login);
    }
}
