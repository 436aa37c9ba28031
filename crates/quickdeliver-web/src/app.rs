//! Root component: one storefront session, one screen at a time

use leptos::prelude::*;
use quickdeliver_core::{ColorScheme, ScreenId};

use crate::components::NavBar;
use crate::pages::{
    Browse, Cart, Checkout, ForgotPassword, Home, Login, Notifications, Orders, Product, Profile,
    Register, Review, Search, Store, Tracking,
};
use crate::session::{use_session, SessionProvider};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <Shell />
        </SessionProvider>
    }
}

/// Chrome plus the active page; the page is rebuilt on every transition
#[component]
fn Shell() -> impl IntoView {
    let session = use_session();
    let route = Memo::new(move |_| session.route());
    let shows_chrome = Memo::new(move |_| session.with(|s| s.navigator().shows_chrome()));
    let light = Memo::new(move |_| {
        session.with(|s| s.preferences.color_scheme == ColorScheme::Light)
    });

    // Every transition starts at the top of the page
    Effect::new(move |_| {
        let (screen, _) = route.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
            if let Some(document) = window.document() {
                document.set_title(&format!("{} · QuickDeliver", screen.title()));
            }
        }
    });

    view! {
        <div class="app" class:light=move || light.get()>
            <Show when=move || shows_chrome.get()>
                <NavBar />
            </Show>
            <main>
                {move || {
                    let (screen, _) = route.get();
                    untrack(move || page(screen))
                }}
            </main>
        </div>
    }
}

fn page(screen: ScreenId) -> AnyView {
    match screen {
        ScreenId::Login => view! { <Login /> }.into_any(),
        ScreenId::Register => view! { <Register /> }.into_any(),
        ScreenId::ForgotPassword => view! { <ForgotPassword /> }.into_any(),
        ScreenId::Home => view! { <Home /> }.into_any(),
        ScreenId::Browse => view! { <Browse /> }.into_any(),
        ScreenId::Search => view! { <Search /> }.into_any(),
        ScreenId::Store => view! { <Store /> }.into_any(),
        ScreenId::Product => view! { <Product /> }.into_any(),
        ScreenId::Cart => view! { <Cart /> }.into_any(),
        ScreenId::Checkout => view! { <Checkout /> }.into_any(),
        ScreenId::Tracking => view! { <Tracking /> }.into_any(),
        ScreenId::Orders => view! { <Orders /> }.into_any(),
        ScreenId::Review => view! { <Review /> }.into_any(),
        ScreenId::Profile => view! { <Profile /> }.into_any(),
        ScreenId::Notifications => view! { <Notifications /> }.into_any(),
    }
}
