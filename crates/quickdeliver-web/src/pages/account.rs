//! Profile and notification center

use leptos::prelude::*;
use quickdeliver_core::catalog::{user_profile, NotificationKind};
use quickdeliver_core::preferences::{ColorScheme, Preferences};
use quickdeliver_core::{DeliveryTier, ScreenId};

use crate::components::EmptyState;
use crate::session::use_session;

/// Checkbox bound to one preference flag
#[component]
fn Toggle(
    label: &'static str,
    get: fn(&Preferences) -> bool,
    flip: fn(&mut Preferences),
) -> impl IntoView {
    let session = use_session();
    view! {
        <label class="row">
            <span>{label}</span>
            <input
                type="checkbox"
                style="width: auto"
                prop:checked=move || session.with(|s| get(&s.preferences))
                on:change=move |_| session.update(|s| flip(&mut s.preferences))
            />
        </label>
    }
}

#[component]
pub fn Profile() -> impl IntoView {
    let session = use_session();
    let profile = user_profile();

    view! {
        <div class="page">
            <div class="panel">
                <h2>{profile.name.clone()}</h2>
                <p class="muted">{profile.email.clone()}</p>
                <p class="muted">{profile.phone.clone()}</p>
            </div>

            <div class="panel">
                <h3>"Saved Addresses"</h3>
                {profile
                    .addresses
                    .iter()
                    .map(|a| {
                        view! {
                            <div class="row">
                                <span>
                                    <strong>{a.label.clone()}</strong>
                                    {a.is_default.then_some(" (default)")}
                                </span>
                                <span class="muted">{a.address.clone()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="panel">
                <h3>"Payment Methods"</h3>
                {profile
                    .cards
                    .iter()
                    .map(|c| {
                        view! {
                            <div class="row">
                                <span>
                                    {format!("{} •••• {}", c.brand, c.last4)}
                                    {c.is_default.then_some(" (default)")}
                                </span>
                                <span class="muted">{format!("Expires {}", c.expiry)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="panel">
                <h3>"Preferences"</h3>
                <Toggle
                    label="Light theme"
                    get=|p| p.color_scheme == ColorScheme::Light
                    flip=|p| p.color_scheme = p.color_scheme.toggled()
                />
                <Toggle
                    label="Express delivery by default"
                    get=|p| p.default_tier == DeliveryTier::Express
                    flip=|p| p.default_tier = p.default_tier.toggled()
                />
                <Toggle
                    label="Order updates"
                    get=|p| p.notifications.order_updates
                    flip=|p| p.notifications.order_updates = !p.notifications.order_updates
                />
                <Toggle
                    label="Promotions"
                    get=|p| p.notifications.promotions
                    flip=|p| p.notifications.promotions = !p.notifications.promotions
                />
                <Toggle
                    label="New stores"
                    get=|p| p.notifications.new_stores
                    flip=|p| p.notifications.new_stores = !p.notifications.new_stores
                />
            </div>

            <div class="row">
                <button class="btn btn-secondary" on:click=move |_| session.go(ScreenId::Orders)>
                    "My Orders"
                </button>
                <button class="btn" on:click=move |_| session.update(|s| s.log_out())>
                    "Log Out"
                </button>
            </div>
        </div>
    }
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Order => "📦",
        NotificationKind::Offer => "🏷",
        NotificationKind::Review => "⭐",
    }
}

#[component]
pub fn Notifications() -> impl IntoView {
    let session = use_session();
    let unread = Memo::new(move |_| session.with(|s| s.unread_count()));

    view! {
        <div class="page">
            <div class="row">
                <h2>"Notifications"</h2>
                <Show when=move || { unread.get() > 0 }>
                    <button class="link" on:click=move |_| session.update(|s| s.mark_all_read())>
                        "Mark all as read"
                    </button>
                </Show>
            </div>
            <Show
                when=move || session.with(|s| !s.notifications().is_empty())
                fallback=|| {
                    view! {
                        <EmptyState
                            title="No notifications"
                            description="You're all caught up"
                            action=("Start shopping", ScreenId::Home)
                        />
                    }
                }
            >
                <div class="list">
                    {move || {
                        session
                            .with(|s| s.notifications().to_vec())
                            .into_iter()
                            .map(|n| {
                                let id = n.id;
                                let has_action = n.action().is_some();
                                view! {
                                    <div class="panel" class:unread=!n.read>
                                        <div class="row">
                                            <strong>{format!("{} {}", kind_icon(n.kind), n.title)}</strong>
                                            <span class="muted">{n.time.clone()}</span>
                                        </div>
                                        <p>{n.message.clone()}</p>
                                        <div class="row">
                                            {has_action
                                                .then(|| {
                                                    view! {
                                                        <button
                                                            class="link"
                                                            on:click=move |_| session.update(|s| s.open_notification(id))
                                                        >
                                                            "View"
                                                        </button>
                                                    }
                                                })}
                                            {(!n.read)
                                                .then(|| {
                                                    view! {
                                                        <button
                                                            class="link"
                                                            on:click=move |_| session.update(|s| s.mark_read(id))
                                                        >
                                                            "Mark as read"
                                                        </button>
                                                    }
                                                })}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
