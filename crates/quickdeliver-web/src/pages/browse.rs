//! Browse and search pages over the store filter

use leptos::prelude::*;
use quickdeliver_core::catalog;
use quickdeliver_core::search::{DeliveryBucket, RatingThreshold, ViewMode};
use quickdeliver_core::StoreFilter;

use crate::components::{EmptyState, StoreCard};
use crate::session::use_session;

/// Chip row over a fixed set of options; `None` is the "All" chip
#[component]
fn Chips<T>(
    label: &'static str,
    options: Vec<(String, T)>,
    selected: Signal<Option<T>>,
    on_pick: Callback<Option<T>>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="chips">
            <span class="muted">{label}</span>
            <button
                class="chip"
                class:active=move || selected.with(Option::is_none)
                on:click=move |_| on_pick.run(None)
            >
                "All"
            </button>
            {options
                .into_iter()
                .map(|(name, value)| {
                    let current = value.clone();
                    view! {
                        <button
                            class="chip"
                            class:active=move || selected.with(|s| s.as_ref() == Some(&current))
                            on:click=move |_| on_pick.run(Some(value.clone()))
                        >
                            {name}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn category_options() -> Vec<(String, String)> {
    catalog::filter_categories()
        .iter()
        .skip(1)
        .map(|c| (c.to_string(), c.to_string()))
        .collect()
}

fn rating_options() -> Vec<(String, f64)> {
    RatingThreshold::PRESETS
        .iter()
        .map(|t| (t.to_string(), t.value()))
        .collect()
}

#[component]
fn Results(filter: RwSignal<StoreFilter>, view_mode: Signal<ViewMode>) -> impl IntoView {
    let results = Memo::new(move |_| {
        filter.with(|f| f.run().into_iter().map(|s| s.id).collect::<Vec<_>>())
    });

    view! {
        <p class="muted">{move || format!("{} stores found", results.with(Vec::len))}</p>
        <Show
            when=move || results.with(|r| !r.is_empty())
            fallback=|| {
                view! {
                    <EmptyState
                        title="No stores found"
                        description="Try a different search or clear the filters"
                    />
                }
            }
        >
            <div class=move || if view_mode.get() == ViewMode::Grid { "grid" } else { "list" }>
                {move || {
                    results
                        .get()
                        .into_iter()
                        .filter_map(catalog::store_by_id)
                        .map(|store| view! { <StoreCard store=store /> })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
pub fn Browse() -> impl IntoView {
    let session = use_session();
    let initial = session.with(|s| s.browse_category().map(str::to_string));
    let filter = RwSignal::new(StoreFilter {
        category: initial,
        ..StoreFilter::default()
    });
    let view_mode = RwSignal::new(ViewMode::default());

    view! {
        <div class="page">
            <div class="row">
                <h2>"Browse Stores"</h2>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| view_mode.update(|v| *v = v.toggled())
                >
                    {move || if view_mode.get() == ViewMode::Grid { "List view" } else { "Grid view" }}
                </button>
            </div>
            <Chips
                label="Category"
                options=category_options()
                selected=Signal::derive(move || filter.with(|f| f.category.clone()))
                on_pick=Callback::new(move |c: Option<String>| filter.update(|f| f.category = c))
            />
            <Chips
                label="Area"
                options=catalog::areas().iter().map(|a| (a.to_string(), a.to_string())).collect()
                selected=Signal::derive(move || filter.with(|f| f.area.clone()))
                on_pick=Callback::new(move |a: Option<String>| filter.update(|f| f.area = a))
            />
            <Chips
                label="Rating"
                options=rating_options()
                selected=Signal::derive(move || {
                    filter.with(|f| (!f.min_rating.is_any()).then(|| f.min_rating.value()))
                })
                on_pick=Callback::new(move |r: Option<f64>| {
                    filter.update(|f| f.min_rating = r.map_or(RatingThreshold::ANY, RatingThreshold::new))
                })
            />
            <button class="link" on:click=move |_| filter.update(StoreFilter::clear)>
                "Clear filters"
            </button>
            <Results filter=filter view_mode=view_mode.into() />
        </div>
    }
}

#[component]
pub fn Search() -> impl IntoView {
    let session = use_session();
    let query = session.with(|s| s.search_query().to_string());
    let filter = RwSignal::new(StoreFilter::with_query(query));

    view! {
        <div class="page">
            <h2>"Search"</h2>
            <input
                type="search"
                placeholder="Search stores..."
                autofocus=true
                prop:value=move || filter.with(|f| f.query.clone())
                on:input=move |e| filter.update(|f| f.query = event_target_value(&e))
            />
            <Chips
                label="Category"
                options=category_options()
                selected=Signal::derive(move || filter.with(|f| f.category.clone()))
                on_pick=Callback::new(move |c: Option<String>| filter.update(|f| f.category = c))
            />
            <Chips
                label="Rating"
                options=rating_options()
                selected=Signal::derive(move || {
                    filter.with(|f| (!f.min_rating.is_any()).then(|| f.min_rating.value()))
                })
                on_pick=Callback::new(move |r: Option<f64>| {
                    filter.update(|f| f.min_rating = r.map_or(RatingThreshold::ANY, RatingThreshold::new))
                })
            />
            <Chips
                label="Delivery"
                options=DeliveryBucket::all().iter().map(|b| (b.label().to_string(), *b)).collect()
                selected=Signal::derive(move || filter.with(|f| f.delivery))
                on_pick=Callback::new(move |d: Option<DeliveryBucket>| filter.update(|f| f.delivery = d))
            />
            <button class="link" on:click=move |_| filter.update(StoreFilter::clear)>
                "Clear filters"
            </button>
            <Results filter=filter view_mode=Signal::derive(|| ViewMode::List) />
        </div>
    }
}
