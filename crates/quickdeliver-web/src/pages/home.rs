//! Home page: search, categories, offers and popular stores

use leptos::prelude::*;
use quickdeliver_core::{catalog, NavigationPayload, ScreenId};

use crate::components::StoreCard;
use crate::session::use_session;

#[component]
pub fn Home() -> impl IntoView {
    let session = use_session();
    let query = RwSignal::new(String::new());
    let search = move || session.open(NavigationPayload::search(query.get_untracked()));

    view! {
        <div class="page">
            <div class="row">
                <h2>"What do you need today?"</h2>
                <button class="link" on:click=move |_| session.go(ScreenId::Notifications)>
                    {move || format!("🔔 {}", session.with(|s| s.unread_count()))}
                </button>
            </div>

            <div class="row panel">
                <input
                    type="search"
                    placeholder="Search for stores, products..."
                    prop:value=move || query.get()
                    on:input=move |e| query.set(event_target_value(&e))
                    on:keydown=move |e| {
                        if e.key() == "Enter" {
                            search();
                        }
                    }
                />
                <button class="btn" on:click=move |_| search()>"Search"</button>
            </div>

            <h3>"Categories"</h3>
            <div class="chips">
                {catalog::categories()
                    .iter()
                    .map(|category| {
                        let name = category.name.clone();
                        let label = category.name.clone();
                        view! {
                            <button
                                class="chip"
                                on:click=move |_| session.open(NavigationPayload::browse(name.clone()))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <h3>"Offers"</h3>
            <div class="grid">
                {catalog::offers()
                    .iter()
                    .map(|offer| {
                        view! {
                            <div class="panel">
                                <strong>{offer.title.clone()}</strong>
                                <p class="muted">{offer.description.clone()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <h3>"Popular Stores"</h3>
            <div class="grid">
                {catalog::stores()
                    .iter()
                    .map(|store| view! { <StoreCard store=store /> })
                    .collect_view()}
            </div>
        </div>
    }
}
