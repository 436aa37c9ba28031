//! Navigation router: the single source of truth for the visible screen
//!
//! Holds the active [`ScreenId`], the payload handed to it, the derived
//! authentication flag and the scroll offset of the current view. The only
//! way to change screens is [`Navigator::transition`].

use crate::payload::NavigationPayload;
use crate::screen::ScreenId;
use tracing::{debug, warn};

/// Active screen plus the data the caller handed to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    active: ScreenId,
    payload: Option<NavigationPayload>,
    authenticated: bool,
    scroll_offset: u16,
    transitions: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts on the login screen, signed out
    pub fn new() -> Self {
        Self {
            active: ScreenId::Login,
            payload: None,
            authenticated: false,
            scroll_offset: 0,
            transitions: 0,
        }
    }

    /// Navigator already showing `screen`, as if reached by one transition
    pub fn starting_at(screen: ScreenId) -> Self {
        let mut navigator = Self::new();
        navigator.transition(screen, None);
        navigator
    }

    pub fn active(&self) -> ScreenId {
        self.active
    }

    pub fn payload(&self) -> Option<&NavigationPayload> {
        self.payload.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Top/bottom navigation bar is only drawn for signed-in sessions
    pub fn shows_chrome(&self) -> bool {
        self.authenticated
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Number of transitions applied so far
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    /// Move to `target`, replacing the payload and resetting scroll
    pub fn transition(&mut self, target: ScreenId, payload: Option<NavigationPayload>) {
        debug!(
            from = %self.active,
            to = %target,
            payload = ?payload,
            "transition"
        );

        self.authenticated = match target {
            ScreenId::Home => true,
            ScreenId::Login | ScreenId::Register => false,
            _ => self.authenticated,
        };
        self.active = target;
        self.payload = payload;
        self.scroll_offset = 0;
        self.transitions += 1;
    }

    /// Transition by textual identifier; unknown identifiers land on home
    pub fn transition_to(&mut self, id: &str, payload: Option<NavigationPayload>) {
        let target = match ScreenId::parse(id) {
            Some(screen) => screen,
            None => {
                warn!(id, "unknown screen identifier, falling back to home");
                ScreenId::Home
            }
        };
        self.transition(target, payload);
    }

    /// Transition without a payload
    pub fn go(&mut self, target: ScreenId) {
        self.transition(target, None);
    }

    /// Transition to the screen the payload is shaped for
    pub fn open(&mut self, payload: NavigationPayload) {
        let target = payload.destination();
        self.transition(target, Some(payload));
    }

    /// Scroll the current view; saturates at the top
    ///
    /// The bottom depends on the rendered content, so hosts follow up with
    /// [`Navigator::clamp_scroll`] once they know it.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll_offset).saturating_add(delta);
        self.scroll_offset = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    /// Pull the offset back to the furthest line that still shows content
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll_offset = self.scroll_offset.min(max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{OrderId, StoreId};

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new();
        assert_eq!(nav.active(), ScreenId::Login);
        assert!(!nav.is_authenticated());
        assert!(!nav.shows_chrome());
        assert!(nav.payload().is_none());
        assert_eq!(nav.transition_count(), 0);
    }

    #[test]
    fn test_unknown_identifier_falls_back_to_home() {
        for id in ["settings", "", "HOME!", "wishlist", "12"] {
            let mut nav = Navigator::new();
            nav.transition_to(id, None);
            assert_eq!(nav.active(), ScreenId::Home, "id {id:?}");
        }
    }

    #[test]
    fn test_nth_transition_determines_active_screen() {
        let mut nav = Navigator::new();
        let targets = ["home", "browse", "bogus", "cart", "checkout", "login"];
        let expected = [
            ScreenId::Home,
            ScreenId::Browse,
            ScreenId::Home,
            ScreenId::Cart,
            ScreenId::Checkout,
            ScreenId::Login,
        ];

        for (target, want) in targets.iter().zip(expected) {
            nav.transition_to(target, None);
            assert_eq!(nav.active(), want);
        }
        assert_eq!(nav.transition_count(), 6);
    }

    #[test]
    fn test_auth_flag_rules() {
        let mut nav = Navigator::new();

        nav.go(ScreenId::Home);
        assert!(nav.is_authenticated());

        // Non-auth targets keep the previous value
        nav.go(ScreenId::Cart);
        assert!(nav.is_authenticated());
        nav.go(ScreenId::ForgotPassword);
        assert!(nav.is_authenticated());

        nav.go(ScreenId::Login);
        assert!(!nav.is_authenticated());

        nav.go(ScreenId::Cart);
        assert!(!nav.is_authenticated());

        nav.go(ScreenId::Home);
        nav.go(ScreenId::Register);
        assert!(!nav.is_authenticated());
        assert!(!nav.shows_chrome());
    }

    #[test]
    fn test_payload_is_replaced_not_carried() {
        let mut nav = Navigator::new();
        nav.open(NavigationPayload::store(StoreId::new(2)));
        assert_eq!(nav.active(), ScreenId::Store);
        assert_eq!(nav.payload().and_then(|p| p.store_id()), Some(StoreId::new(2)));

        nav.go(ScreenId::Product);
        assert!(nav.payload().is_none());

        nav.transition(
            ScreenId::Tracking,
            Some(NavigationPayload::tracking(OrderId::new(12345))),
        );
        assert_eq!(
            nav.payload().and_then(|p| p.order_id()),
            Some(OrderId::new(12345))
        );
    }

    #[test]
    fn test_transition_resets_scroll() {
        let mut nav = Navigator::starting_at(ScreenId::Home);
        nav.scroll_by(12);
        assert_eq!(nav.scroll_offset(), 12);

        nav.go(ScreenId::Browse);
        assert_eq!(nav.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_saturates_at_top() {
        let mut nav = Navigator::new();
        nav.scroll_by(3);
        nav.scroll_by(-10);
        assert_eq!(nav.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut nav = Navigator::new();
        nav.scroll_by(50);
        nav.clamp_scroll(7);
        assert_eq!(nav.scroll_offset(), 7);

        nav.scroll_by(-3);
        assert_eq!(nav.scroll_offset(), 4);
        nav.clamp_scroll(20);
        assert_eq!(nav.scroll_offset(), 4);
    }

    #[test]
    fn test_any_screen_can_reach_any_other() {
        for from in ScreenId::all() {
            for to in ScreenId::all() {
                let mut nav = Navigator::starting_at(*from);
                nav.go(*to);
                assert_eq!(nav.active(), *to);
            }
        }
    }
}
