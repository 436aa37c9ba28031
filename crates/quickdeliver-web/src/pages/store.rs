//! Store profile and product detail pages

use leptos::prelude::*;
use quickdeliver_core::catalog::{self, Review, ReviewSubject};
use quickdeliver_core::{NavigationPayload, ScreenId};

use crate::components::{Rating, Stars};
use crate::session::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Products,
    Reviews,
    Info,
}

#[component]
fn ReviewList(reviews: Vec<&'static Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p class="muted">"No reviews yet"</p> }.into_any();
    }
    view! {
        <div class="list">
            {reviews
                .into_iter()
                .map(|review| {
                    view! {
                        <div class="panel">
                            <div class="row">
                                <strong>{review.author.clone()}</strong>
                                <span class="muted">{review.date.clone()}</span>
                            </div>
                            <Stars rating=review.rating />
                            <p>{review.comment.clone()}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub fn Store() -> impl IntoView {
    let session = use_session();
    let store = session.with(|s| s.store_in_view());
    let section = RwSignal::new(Section::Products);

    let tab = move |label: &'static str, target: Section| {
        view! {
            <button
                class="chip"
                class:active=move || section.get() == target
                on:click=move |_| section.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page">
            <div class="panel">
                <h2>{store.name.clone()}</h2>
                <Rating value=store.rating count=store.review_count />
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

            <div class="chips">
                {tab("Products", Section::Products)}
                {tab("Reviews", Section::Reviews)}
                {tab("Info", Section::Info)}
            </div>

            {move || match section.get() {
                Section::Products => {
                    view! {
                        <div class="grid">
                            {catalog::products_for(store.id)
                                .into_iter()
                                .map(|product| {
                                    let id = product.id;
                                    view! {
                                        <div class="card">
                                            <h3 on:click=move |_| session.open(NavigationPayload::product(id))>
                                                {product.name.clone()}
                                            </h3>
                                            <p>
                                                <span class="price">{product.price.to_string()}</span>
                                                <span class="muted">{format!(" / {}", product.unit)}</span>
                                            </p>
                                            <button
                                                class="btn"
                                                on:click=move |_| session.update(|s| s.add_to_cart(id, 1))
                                            >
                                                {move || {
                                                    match session.with(|s| s.cart().quantity_of(id)) {
                                                        0 => "Add".to_string(),
                                                        n => format!("Add ({n} in cart)"),
                                                    }
                                                }}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
                Section::Reviews => {
                    view! { <ReviewList reviews=catalog::reviews_for(ReviewSubject::Store(store.id)) /> }
                        .into_any()
                }
                Section::Info => {
                    view! {
                        <div class="panel">
                            <label>"Address"</label>
                            <p>{store.address.clone()}</p>
                            <label>"Phone"</label>
                            <p>{store.phone.clone()}</p>
                            <label>"Hours"</label>
                            <p>{store.hours.clone()}</p>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn Product() -> impl IntoView {
    let session = use_session();
    let product = session.with(|s| s.product_in_view());
    let store = catalog::store_or_default(Some(product.store_id));
    let quantity = RwSignal::new(1u32);

    let add = move |_| {
        let qty = quantity.get();
        session.update(|s| s.add_to_cart(product.id, qty));
        quantity.set(1);
    };

    view! {
        <div class="page">
            <button class="link" on:click=move |_| session.open(NavigationPayload::store(store.id))>
                {format!("← {}", store.name)}
            </button>
            <div class="panel">
                <h2>{product.name.clone()}</h2>
                <Rating value=product.rating count=product.review_count />
                <p class="muted">{format!("{} · {}", product.category, store.name)}</p>
                <p>
                    <span class="price">{product.price.to_string()}</span>
                    <span class="muted">{format!(" / {}", product.unit)}</span>
                </p>
                <p>{product.description.clone()}</p>
                <div class="row">
                    <button class="btn-secondary btn" on:click=move |_| quantity.update(|q| *q = (*q - 1).max(1))>
                        "−"
                    </button>
                    <strong>{move || quantity.get()}</strong>
                    <button class="btn-secondary btn" on:click=move |_| quantity.update(|q| *q += 1)>
                        "+"
                    </button>
                    <button class="btn" on:click=add>
                        {move || format!("Add to Cart · {}", product.price.times(quantity.get()))}
                    </button>
                </div>
                <button class="link" on:click=move |_| session.go(ScreenId::Cart)>
                    {move || format!("View cart ({})", session.with(|s| s.cart().item_count()))}
                </button>
            </div>
            <h3>"Reviews"</h3>
            <ReviewList reviews=catalog::reviews_for(ReviewSubject::Product(product.id)) />
        </div>
    }
}
