//! Storefront session shared through Leptos context

use leptos::prelude::*;
use quickdeliver_core::{NavigationPayload, ScreenId, Storefront};

/// Reactive handle over the one `Storefront` owned by the page
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<Storefront>,
}

impl Session {
    pub fn new(storefront: Storefront) -> Self {
        Self {
            state: RwSignal::new(storefront),
        }
    }

    /// Read the session, tracking it for reactive closures
    pub fn with<R>(&self, f: impl FnOnce(&Storefront) -> R) -> R {
        self.state.with(f)
    }

    pub fn update(&self, f: impl FnOnce(&mut Storefront)) {
        self.state.update(f);
    }

    pub fn go(&self, screen: ScreenId) {
        self.update(|s| s.go(screen));
    }

    pub fn open(&self, payload: NavigationPayload) {
        self.update(|s| s.open(payload));
    }

    /// Active screen plus the transition counter that produced it
    pub fn route(&self) -> (ScreenId, u64) {
        self.with(|s| (s.active(), s.navigator().transition_count()))
    }
}

/// Session provider component (wraps app root)
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(Session::new(Storefront::new()));
    children()
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}
