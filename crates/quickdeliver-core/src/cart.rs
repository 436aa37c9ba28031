//! Shopping cart state on top of the order total calculator

use crate::catalog::{self, Product};
use crate::ids::ProductId;
use crate::money::Money;
use crate::pricing::{adjust_quantity, compute_totals, remove_item, DeliveryTier, LineItem, OrderTotals};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Line items plus the chosen delivery tier and coupon text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
    tier: DeliveryTier,
    coupon_code: String,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart pre-filled with the demo basket shown on first launch
    pub fn demo() -> Self {
        let mut cart = Self::new();
        for (id, quantity) in [(1, 2), (2, 1), (3, 3)] {
            if let Some(product) = catalog::product_by_id(ProductId::new(id)) {
                cart.add_product(product, quantity);
            }
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn tier(&self) -> DeliveryTier {
        self.tier
    }

    pub fn coupon_code(&self) -> &str {
        &self.coupon_code
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ quantity, used for the cart badge
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map_or(0, |item| item.quantity)
    }

    /// Coupon codes are collected but never applied, so the discount is zero
    pub fn totals(&self) -> OrderTotals {
        compute_totals(&self.items, self.tier, Money::ZERO)
    }

    /// Add a catalog product; an existing line for it is merged
    pub fn add_product(&mut self, product: &Product, quantity: u32) {
        let store = catalog::store_or_default(Some(product.store_id));
        self.add(LineItem::new(
            product.id,
            &product.name,
            &store.name,
            product.price,
            quantity,
        ));
    }

    pub fn add(&mut self, item: LineItem) {
        debug!(product = %item.id, quantity = item.quantity, "add to cart");
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        self.items = adjust_quantity(std::mem::take(&mut self.items), id, quantity);
    }

    pub fn increment(&mut self, id: ProductId) {
        let next = self.quantity_of(id).saturating_add(1);
        self.set_quantity(id, next);
    }

    /// Never drops the line; quantity stays at 1
    pub fn decrement(&mut self, id: ProductId) {
        let next = self.quantity_of(id).saturating_sub(1);
        self.set_quantity(id, next);
    }

    pub fn remove(&mut self, id: ProductId) {
        debug!(product = %id, "remove from cart");
        self.items = remove_item(std::mem::take(&mut self.items), id);
    }

    pub fn set_tier(&mut self, tier: DeliveryTier) {
        self.tier = tier;
    }

    pub fn set_coupon_code(&mut self, code: impl Into<String>) {
        self.coupon_code = code.into();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.coupon_code.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_cart_totals() {
        let cart = Cart::demo();
        assert_eq!(cart.items().len(), 3);
        assert_eq!(cart.item_count(), 6);

        let totals = cart.totals();
        assert_eq!(totals.subtotal, Money::from_cents(3144));
        assert_eq!(totals.total, Money::from_cents(3443));
    }

    #[test]
    fn test_add_merges_existing_line() {
        let mut cart = Cart::new();
        let apples = catalog::product_by_id(ProductId::new(1)).unwrap();
        cart.add_product(apples, 1);
        cart.add_product(apples, 2);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(apples.id), 3);
        assert_eq!(cart.items()[0].store, "Fresh Market");
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut cart = Cart::demo();
        let bread = ProductId::new(2);
        cart.decrement(bread);
        assert_eq!(cart.quantity_of(bread), 1);
        assert_eq!(cart.items().len(), 3);

        cart.increment(bread);
        assert_eq!(cart.quantity_of(bread), 2);
    }

    #[test]
    fn test_remove_last_item_empties_cart() {
        let mut cart = Cart::new();
        cart.add_product(catalog::product_by_id(ProductId::new(4)).unwrap(), 1);
        cart.remove(ProductId::new(4));
        assert!(cart.is_empty());
        assert_eq!(cart.totals().subtotal, Money::ZERO);
    }

    #[test]
    fn test_tier_changes_fee_and_coupon_is_ignored() {
        let mut cart = Cart::demo();
        cart.set_coupon_code("FIRST50");
        cart.set_tier(DeliveryTier::Express);

        let totals = cart.totals();
        assert_eq!(totals.delivery_fee, Money::from_cents(599));
        assert_eq!(totals.discount, Money::ZERO);
        assert_eq!(cart.coupon_code(), "FIRST50");
    }
}
