//! Navigation chrome shown once signed in

use leptos::prelude::*;
use quickdeliver_core::screen::NAV_ITEMS;

use crate::session::use_session;

/// Logo plus the main sections, with cart and unread badges
#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="navbar">
            <span class="logo">"◈ QuickDeliver"</span>
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    let item = *item;
                    view! {
                        <button
                            class="nav-link"
                            class:active=move || session.with(|s| s.active() == item.screen)
                            on:click=move |_| session.go(item.screen)
                            title=format!("Shortcut {}", item.shortcut)
                        >
                            {item.label}
                            {move || {
                                session
                                    .with(|s| s.badge_count(item.badge))
                                    .map(|count| view! { <span class="badge">{count}</span> })
                            }}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
