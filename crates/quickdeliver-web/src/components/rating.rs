use leptos::prelude::*;
use quickdeliver_core::review::stars;

/// `★ 4.8 (450)`
#[component]
pub fn Rating(value: f64, count: u32) -> impl IntoView {
    view! {
        <span class="stars">{format!("★ {value:.1}")}</span>
        <span class="muted">{format!(" ({count})")}</span>
    }
}

/// Five-star row for a whole-number rating
#[component]
pub fn Stars(rating: u8) -> impl IntoView {
    view! { <span class="stars">{stars(rating)}</span> }
}
