//! Order total calculator
//!
//! Pure functions over cart line items:
//!
//! - **subtotal** = Σ unit price × quantity (0 for an empty cart)
//! - **delivery fee** = fixed by tier (standard $2.99, express $5.99)
//! - **discount** = supplied by the caller (no coupon logic populates it)
//! - **total** = subtotal + fee − discount, with no floor at zero
//!
//! # Examples
//!
//! ```
//! use quickdeliver_core::ids::ProductId;
//! use quickdeliver_core::money::Money;
//! use quickdeliver_core::pricing::{compute_totals, DeliveryTier, LineItem};
//!
//! let items = vec![
//!     LineItem::new(ProductId::new(1), "Organic Apples", "Fresh Market", Money::from_cents(499), 2),
//!     LineItem::new(ProductId::new(2), "Fresh Bread", "Fresh Market", Money::from_cents(349), 1),
//! ];
//! let totals = compute_totals(&items, DeliveryTier::Standard, Money::ZERO);
//! assert_eq!(totals.subtotal, Money::from_cents(1347));
//! assert_eq!(totals.total, Money::from_cents(1646));
//! ```

use crate::error::CoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery speed option selectable by the shopper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryTier {
    #[default]
    Standard,
    Express,
}

impl DeliveryTier {
    pub fn all() -> &'static [DeliveryTier] {
        &[DeliveryTier::Standard, DeliveryTier::Express]
    }

    /// Fixed delivery fee for this tier
    pub fn fee(&self) -> Money {
        match self {
            DeliveryTier::Standard => Money::from_cents(299),
            DeliveryTier::Express => Money::from_cents(599),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryTier::Standard => "standard",
            DeliveryTier::Express => "express",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryTier::Standard => "Standard",
            DeliveryTier::Express => "Express",
        }
    }

    /// Delivery window shown next to the label
    pub fn eta(&self) -> &'static str {
        match self {
            DeliveryTier::Standard => "20-30 min",
            DeliveryTier::Express => "10-15 min",
        }
    }

    pub fn toggled(&self) -> DeliveryTier {
        match self {
            DeliveryTier::Standard => DeliveryTier::Express,
            DeliveryTier::Express => DeliveryTier::Standard,
        }
    }
}

impl fmt::Display for DeliveryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.eta())
    }
}

impl FromStr for DeliveryTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(DeliveryTier::Standard),
            "express" => Ok(DeliveryTier::Express),
            _ => Err(CoreError::UnknownDeliveryTier {
                input: s.to_string(),
            }),
        }
    }
}

/// One product entry in the cart with its quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub store: String,
    pub unit_price: Money,
    /// Always at least 1
    pub quantity: u32,
}

impl LineItem {
    /// Quantities below 1 are raised to 1
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        store: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            store: store.into(),
            unit_price,
            quantity: quantity.max(1),
        }
    }

    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Derived order summary, recomputed on every cart change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Σ quantity
    pub item_count: u32,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub discount: Money,
    pub total: Money,
}

impl OrderTotals {
    pub fn has_discount(&self) -> bool {
        self.discount > Money::ZERO
    }
}

/// Compute subtotal, fee, discount and total for a set of line items
pub fn compute_totals(items: &[LineItem], tier: DeliveryTier, discount: Money) -> OrderTotals {
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();
    let delivery_fee = tier.fee();
    let item_count = items.iter().map(|item| item.quantity).sum();

    OrderTotals {
        item_count,
        subtotal,
        delivery_fee,
        discount,
        // No floor: a discount above subtotal + fee yields a negative total
        total: subtotal + delivery_fee - discount,
    }
}

/// Reject a discount that would raise the total instead of lowering it
pub fn checked_discount(discount: Money) -> Result<Money, CoreError> {
    if discount.is_negative() {
        return Err(CoreError::InvalidAmount {
            input: discount.to_string(),
            reason: "discount must not be negative".to_string(),
        });
    }
    Ok(discount)
}

/// Reject a requested quantity of zero; [`LineItem::new`] would silently raise it to 1
pub fn checked_quantity(id: ProductId, quantity: u32) -> Result<u32, CoreError> {
    if quantity < 1 {
        return Err(CoreError::InvalidQuantity {
            id: id.to_string(),
            quantity,
        });
    }
    Ok(quantity)
}

/// Set the quantity of the item with `id`
///
/// A `new_quantity` below 1 leaves the list unchanged (the item is not
/// removed), as does an `id` with no matching item.
pub fn adjust_quantity(mut items: Vec<LineItem>, id: ProductId, new_quantity: u32) -> Vec<LineItem> {
    if new_quantity < 1 {
        return items;
    }
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.quantity = new_quantity;
    }
    items
}

/// Drop the item with `id`; unknown ids leave the list unchanged
pub fn remove_item(mut items: Vec<LineItem>, id: ProductId) -> Vec<LineItem> {
    items.retain(|item| item.id != id);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, cents: i64, quantity: u32) -> LineItem {
        LineItem::new(
            ProductId::new(id),
            format!("Item {id}"),
            "Fresh Market",
            Money::from_cents(cents),
            quantity,
        )
    }

    #[test]
    fn test_standard_totals() {
        let items = vec![item(1, 499, 2), item(2, 349, 1)];
        let totals = compute_totals(&items, DeliveryTier::Standard, Money::ZERO);

        assert_eq!(totals.subtotal, Money::from_cents(1347));
        assert_eq!(totals.delivery_fee, Money::from_cents(299));
        assert_eq!(totals.discount, Money::ZERO);
        assert_eq!(totals.total, Money::from_cents(1646));
        assert_eq!(totals.item_count, 3);
        assert!(!totals.has_discount());
    }

    #[test]
    fn test_express_fee() {
        let items = vec![item(1, 499, 2), item(2, 349, 1), item(3, 599, 3)];
        let totals = compute_totals(&items, DeliveryTier::Express, Money::ZERO);

        assert_eq!(totals.subtotal, Money::from_cents(3144));
        assert_eq!(totals.delivery_fee, Money::from_cents(599));
        assert_eq!(totals.total, Money::from_cents(3743));
    }

    #[test]
    fn test_empty_items() {
        let discount = Money::from_cents(100);
        let totals = compute_totals(&[], DeliveryTier::Standard, discount);

        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.item_count, 0);
        assert_eq!(totals.total, DeliveryTier::Standard.fee() - discount);
    }

    #[test]
    fn test_discount_larger_than_order_goes_negative() {
        let items = vec![item(1, 100, 1)];
        let totals = compute_totals(&items, DeliveryTier::Standard, Money::from_cents(1000));
        assert_eq!(totals.total, Money::from_cents(-601));
        assert!(totals.total.is_negative());
    }

    #[test]
    fn test_adjust_quantity_below_one_is_noop() {
        let items = adjust_quantity(vec![item(1, 499, 2)], ProductId::new(1), 0);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_adjust_quantity_sets_value() {
        let items = adjust_quantity(vec![item(1, 499, 2)], ProductId::new(1), 5);
        assert_eq!(items[0].quantity, 5);
    }

    #[test]
    fn test_adjust_quantity_unknown_id_unchanged() {
        let before = vec![item(1, 499, 2)];
        let after = adjust_quantity(before.clone(), ProductId::new(99), 5);
        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_only_item_empties_list() {
        let items = remove_item(vec![item(1, 499, 2)], ProductId::new(1));
        assert!(items.is_empty());

        let items = remove_item(vec![item(1, 499, 2)], ProductId::new(7));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_line_item_quantity_floor() {
        assert_eq!(item(1, 499, 0).quantity, 1);
    }

    #[test]
    fn test_negative_discount_rejected() {
        let err = checked_discount(Money::from_cents(-1000)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount { .. }));
        assert!(!err.is_not_found());
        assert_eq!(checked_discount(Money::ZERO).unwrap(), Money::ZERO);
        assert_eq!(
            checked_discount(Money::from_cents(200)).unwrap(),
            Money::from_cents(200)
        );
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = checked_quantity(ProductId::new(1), 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { quantity: 0, .. }));
        assert_eq!(checked_quantity(ProductId::new(1), 3).unwrap(), 3);
    }

    #[test]
    fn test_tier_parse_and_toggle() {
        assert_eq!("Express".parse::<DeliveryTier>().unwrap(), DeliveryTier::Express);
        assert!("overnight".parse::<DeliveryTier>().is_err());
        assert_eq!(DeliveryTier::Standard.toggled(), DeliveryTier::Express);
        assert_eq!(DeliveryTier::Express.to_string(), "Express (10-15 min)");
    }
}
