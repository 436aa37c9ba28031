//! End-to-end storefront flows through the public API
//!
//! Tests for:
//! - Sign-in / sign-out and the navigation chrome
//! - Browsing from home to a product and into the cart
//! - Checkout, tracking and review
//!
//! Run with:
//! ```bash
//! cargo test --test storefront_flow
//! ```

use quickdeliver_core::catalog;
use quickdeliver_core::screen::{NavBadge, NAV_ITEMS};
use quickdeliver_core::{
    DeliveryTier, Money, NavigationPayload, OrderId, ProductId, ScreenId, StoreFilter, Storefront,
};

mod auth {
    use super::*;

    #[test]
    fn test_chrome_follows_auth_flag() {
        let mut session = Storefront::new();
        assert!(!session.navigator().shows_chrome());

        session.sign_in();
        assert_eq!(session.active(), ScreenId::Home);
        assert!(session.navigator().shows_chrome());

        // Forgot-password keeps whatever the flag was
        session.go(ScreenId::ForgotPassword);
        assert!(session.navigator().shows_chrome());

        session.log_out();
        assert_eq!(session.active(), ScreenId::Login);
        assert!(!session.navigator().shows_chrome());
    }

    #[test]
    fn test_register_signs_out() {
        let mut session = Storefront::new();
        session.sign_in();
        session.go(ScreenId::Register);
        assert!(!session.navigator().is_authenticated());
    }

    #[test]
    fn test_text_identifiers_fall_back_home() {
        let mut session = Storefront::new();
        session.transition_to("track-order", None);
        assert_eq!(session.active(), ScreenId::Home);
        assert!(session.navigator().is_authenticated());
    }
}

mod shopping {
    use super::*;

    #[test]
    fn test_home_search_to_store_to_product() {
        let mut session = Storefront::new();
        session.sign_in();

        session.open(NavigationPayload::search("fresh"));
        assert_eq!(session.active(), ScreenId::Search);
        let results = StoreFilter::with_query(session.search_query()).run();
        assert_eq!(results.len(), 1);

        session.open(NavigationPayload::store(results[0].id));
        let store = session.store_in_view();
        assert_eq!(store.name, "Fresh Market");

        let avocados = catalog::products_for(store.id)
            .into_iter()
            .find(|p| p.name == "Avocados")
            .unwrap();
        session.open(NavigationPayload::product(avocados.id));
        assert_eq!(session.product_in_view().id, avocados.id);

        session.add_to_cart(avocados.id, 2);
        assert_eq!(session.cart().item_count(), 8);
        assert_eq!(session.badge_count(NavBadge::CartCount), Some(8));
    }

    #[test]
    fn test_browse_category_from_payload() {
        let mut session = Storefront::new();
        session.open(NavigationPayload::browse("Pharmacy"));
        let filter = StoreFilter::with_category(session.browse_category().unwrap_or("All"));
        assert_eq!(filter.run().len(), 1);
    }

    #[test]
    fn test_scroll_resets_between_screens() {
        let mut session = Storefront::new();
        session.sign_in();
        session.scroll_by(30);
        session.go(ScreenId::Browse);
        assert_eq!(session.navigator().scroll_offset(), 0);
    }

    #[test]
    fn test_cart_quantity_rules() {
        let mut session = Storefront::new();
        let apples = ProductId::new(1);

        session.cart_mut().set_quantity(apples, 0);
        assert_eq!(session.cart().quantity_of(apples), 2);

        session.cart_mut().set_quantity(apples, 5);
        assert_eq!(session.cart().quantity_of(apples), 5);

        for id in [1, 2, 3] {
            session.cart_mut().remove(ProductId::new(id));
        }
        assert!(session.cart().is_empty());

        let totals = session.cart().totals();
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.total, DeliveryTier::Standard.fee());
    }
}

mod ordering {
    use super::*;

    #[test]
    fn test_checkout_to_tracking_to_review() {
        let mut session = Storefront::new();
        session.sign_in();
        session.go(ScreenId::Cart);
        session.cart_mut().set_tier(DeliveryTier::Express);
        session.go(ScreenId::Checkout);

        let id = session.place_order();
        assert_eq!(session.active(), ScreenId::Tracking);
        assert_eq!(session.tracked_order().tier, DeliveryTier::Express);
        assert_eq!(session.active_orders().next().map(|o| o.id), Some(id));

        session.open(NavigationPayload::review(OrderId::new(12345)));
        assert_eq!(session.review_order().map(|o| o.store.as_str()), Some("Fresh Market"));
        session.review.set_rating(5);
        assert!(session.submit_review());
        assert_eq!(session.active(), ScreenId::Orders);
    }

    #[test]
    fn test_every_nav_item_is_reachable() {
        let mut session = Storefront::new();
        session.sign_in();
        for item in &NAV_ITEMS {
            session.go(item.screen);
            assert_eq!(session.active(), item.screen);
            assert!(session.navigator().shows_chrome());
        }
    }
}
