//! Catalog commands: stores, search, quote and orders
//!
//! Formatting is kept separate from `main` so output can be tested without a
//! terminal.

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use quickdeliver_core::catalog::{Order, Store};
use quickdeliver_core::{checked_discount, CoreError, LineItem, Money, OrderTotals};
use serde_json::json;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug)]
pub enum CliError {
    NoResults { query: String, scanned: usize },
    Core(CoreError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NoResults { query, scanned } => {
                write!(f, "No stores match '{}' ({} stores scanned)", query, scanned)
            }
            CliError::Core(e) => match e.suggestion() {
                Some(hint) => write!(f, "{}\n  hint: {}", e, hint),
                None => write!(f, "{}", e),
            },
        }
    }
}

impl std::error::Error for CliError {}

impl From<CoreError> for CliError {
    fn from(e: CoreError) -> Self {
        CliError::Core(e)
    }
}

/// Parse the `--discount` flag; negative amounts are refused
pub fn parse_discount(input: &str) -> Result<Money, CliError> {
    let discount = input.parse::<Money>()?;
    Ok(checked_discount(discount)?)
}

// ============================================================================
// Tables
// ============================================================================

fn table_with_header(headers: &[&str], no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Store listing (human table or JSON)
pub fn format_store_table(stores: &[&Store], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(stores).unwrap_or_else(|_| "[]".to_string());
    }

    if stores.is_empty() {
        return "No stores found.".to_string();
    }

    let mut table = table_with_header(
        &["ID", "Store", "Category", "Rating", "Delivery", "Area", "Distance"],
        no_color,
    );
    for store in stores {
        table.add_row(Row::from(vec![
            store.id.to_string(),
            store.name.clone(),
            store.category.clone(),
            format!("★ {:.1} ({})", store.rating, store.review_count),
            store.delivery_time.to_string(),
            store.area.clone(),
            format!("{:.1} km", store.distance_km),
        ]));
    }

    table.to_string()
}

/// Line items followed by the order summary
pub fn format_quote(items: &[LineItem], totals: &OrderTotals, json: bool, no_color: bool) -> String {
    if json {
        let body = json!({ "items": items, "totals": totals });
        return serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string());
    }

    let mut table = table_with_header(&["Item", "Store", "Qty", "Price", "Total"], no_color);
    for item in items {
        table.add_row(Row::from(vec![
            item.name.clone(),
            item.store.clone(),
            item.quantity.to_string(),
            item.unit_price.to_string(),
            item.line_total().to_string(),
        ]));
    }

    let mut summary = vec![
        format!("Subtotal ({} items): {}", totals.item_count, totals.subtotal),
        format!("Delivery Fee: {}", totals.delivery_fee),
    ];
    if totals.has_discount() {
        summary.push(format!("Discount: -{}", totals.discount));
    }
    summary.push(format!("Total: {}", totals.total));

    format!("{}\n{}", table, summary.join("\n"))
}

/// Order history (human table or JSON)
pub fn format_order_table(orders: &[Order], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(orders).unwrap_or_else(|_| "[]".to_string());
    }

    if orders.is_empty() {
        return "No orders found.".to_string();
    }

    let mut table = table_with_header(&["Order", "Date", "Store", "Items", "Status", "Total"], no_color);
    for order in orders {
        table.add_row(Row::from(vec![
            order.id.to_string(),
            order.placed_on_display(),
            order.store.clone(),
            order.line_count().to_string(),
            order.status.label().to_string(),
            order.totals().total.to_string(),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdeliver_core::{catalog, compute_totals, Cart, DeliveryTier, StoreFilter};

    #[test]
    fn test_parse_discount() {
        assert_eq!(parse_discount("$1.50").unwrap(), Money::from_cents(150));
        assert_eq!(parse_discount("0").unwrap(), Money::ZERO);

        let err = parse_discount("-1").unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::InvalidAmount { .. })));
        assert!(err.to_string().contains("must not be negative"));
        assert!(parse_discount("ten").is_err());
    }

    #[test]
    fn test_store_table_lists_every_store() {
        let stores = StoreFilter::default().run();
        let out = format_store_table(&stores, false, true);
        for store in &stores {
            assert!(out.contains(&store.name));
        }
        assert!(out.contains("20-30 min"));
    }

    #[test]
    fn test_store_table_empty() {
        assert_eq!(format_store_table(&[], false, true), "No stores found.");
    }

    #[test]
    fn test_store_table_json() {
        let stores = StoreFilter::with_query("pizza").run();
        let out = format_store_table(&stores, true, false);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["name"], "Pizza Paradise");
    }

    #[test]
    fn test_quote_summary() {
        let cart = Cart::demo();
        let totals = compute_totals(cart.items(), DeliveryTier::Standard, Money::ZERO);
        let out = format_quote(cart.items(), &totals, false, true);
        assert!(out.contains("Organic Apples"));
        assert!(out.contains("Delivery Fee: $2.99"));
        assert!(!out.contains("Discount"));
        assert!(out.contains(&format!("Total: {}", totals.total)));
    }

    #[test]
    fn test_quote_json_has_string_amounts() {
        let cart = Cart::demo();
        let discount: Money = "1.50".parse().unwrap();
        let totals = compute_totals(cart.items(), DeliveryTier::Express, discount);
        let out = format_quote(cart.items(), &totals, true, false);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["totals"]["delivery_fee"], "5.99");
        assert_eq!(parsed["totals"]["discount"], "1.50");
        assert_eq!(parsed["items"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_order_table() {
        let out = format_order_table(catalog::orders(), false, true);
        assert!(out.contains("#12346"));
        assert!(out.contains("Out for Delivery"));
        assert!(out.contains("Delivered"));
    }

    #[test]
    fn test_error_display_includes_hint() {
        let err = CliError::from(CoreError::StoreNotFound { id: "9".into() });
        assert!(err.to_string().contains("quickdeliver stores"));

        let err = CliError::NoResults {
            query: "sushi".into(),
            scanned: 4,
        };
        assert_eq!(err.to_string(), "No stores match 'sushi' (4 stores scanned)");
    }
}
