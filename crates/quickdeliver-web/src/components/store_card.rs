//! Store card used by home, browse and search

use leptos::prelude::*;
use quickdeliver_core::catalog::Store;
use quickdeliver_core::NavigationPayload;

use super::Rating;
use crate::session::use_session;

#[component]
pub fn StoreCard(store: &'static Store) -> impl IntoView {
    let session = use_session();
    let id = store.id;

    view! {
        <div class="card" on:click=move |_| session.open(NavigationPayload::store(id))>
            <h3>{store.name.clone()}</h3>
            <div>
                <Rating value=store.rating count=store.review_count />
            </div>
            <p class="muted">
                {format!(
                    "{} · {} · {:.1} km · {}",
                    store.category,
                    store.delivery_time,
                    store.distance_km,
                    store.area,
                )}
            </p>
        </div>
    }
}
