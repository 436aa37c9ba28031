//! Empty state with an optional way out

use leptos::prelude::*;
use quickdeliver_core::ScreenId;

use crate::session::use_session;

#[component]
pub fn EmptyState(
    /// Headline, e.g. "Your cart is empty"
    title: &'static str,
    #[prop(into)] description: String,
    /// Button label and the screen it leads to
    #[prop(optional)]
    action: Option<(&'static str, ScreenId)>,
) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="empty-state">
            <h3>{title}</h3>
            <p>{description}</p>
            {action.map(|(label, screen)| {
                view! {
                    <button class="btn" on:click=move |_| session.go(screen)>
                        {label}
                    </button>
                }
            })}
        </div>
    }
}
