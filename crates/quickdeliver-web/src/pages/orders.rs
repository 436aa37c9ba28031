//! Order tracking, order history and order review pages

use leptos::prelude::*;
use quickdeliver_core::catalog::{tracking_steps, Order, StepState};
use quickdeliver_core::review::{rating_label, MAX_RATING};
use quickdeliver_core::{NavigationPayload, ScreenId};

use crate::components::{EmptyState, OrderSummary};
use crate::session::use_session;

fn step_class(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "step completed",
        StepState::Active => "step active",
        StepState::Pending => "step pending",
    }
}

#[component]
pub fn Tracking() -> impl IntoView {
    let session = use_session();
    let order = session.with(|s| s.tracked_order().clone());
    let totals = order.totals();

    view! {
        <div class="page">
            <div class="panel">
                <h2>{format!("Order {}", order.id)}</h2>
                <p class="muted">{order.store.clone()}</p>
                <p>
                    {order
                        .eta
                        .clone()
                        .map(|eta| format!("Arriving in {eta}"))
                        .unwrap_or_else(|| order.status.label().to_string())}
                </p>
            </div>

            <div class="panel list">
                {tracking_steps(order.status)
                    .into_iter()
                    .map(|step| {
                        view! {
                            <div class=step_class(step.state)>
                                <div class="row">
                                    <span>{step.label}</span>
                                    <span class="muted">{step.time}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {order
                .courier
                .clone()
                .map(|courier| {
                    view! {
                        <div class="panel row">
                            <div>
                                <strong>{courier.name.clone()}</strong>
                                <p class="muted">{courier.vehicle.clone()}</p>
                            </div>
                            <a class="btn" href=format!("tel:{}", courier.phone)>
                                "Call"
                            </a>
                        </div>
                    }
                })}

            <div class="panel">
                <h3>"Items"</h3>
                {order
                    .lines
                    .iter()
                    .map(|line| {
                        view! {
                            <div class="row">
                                <span>{format!("{}× {}", line.quantity, line.name)}</span>
                                <span>{line.line_total().to_string()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <OrderSummary totals=totals />

            <div class="row">
                <button class="btn btn-secondary" on:click=move |_| session.go(ScreenId::Home)>
                    "Back to Home"
                </button>
                <button class="btn" on:click=move |_| session.go(ScreenId::Orders)>
                    "My Orders"
                </button>
            </div>
        </div>
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let session = use_session();
    let id = order.id;
    let active = order.status.is_active();

    view! {
        <div class="panel">
            <div class="row">
                <strong>{order.store.clone()}</strong>
                <span class="muted">{order.status.label()}</span>
            </div>
            <p class="muted">
                {format!(
                    "Order {} · {} · {} items",
                    order.id,
                    order.placed_on_display(),
                    order.line_count(),
                )}
            </p>
            <div class="row">
                <span class="price">{order.totals().total.to_string()}</span>
                {if active {
                    view! {
                        <button class="btn" on:click=move |_| session.open(NavigationPayload::tracking(id))>
                            "Track Order"
                        </button>
                    }
                    .into_any()
                } else {
                    view! {
                        <span>
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| session.open(NavigationPayload::review(id))
                            >
                                "Rate"
                            </button>
                            " "
                            <button class="btn" on:click=move |_| session.update(|s| s.reorder(id))>
                                "Reorder"
                            </button>
                        </span>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn Orders() -> impl IntoView {
    let session = use_session();
    let active = session.with(|s| s.active_orders().cloned().collect::<Vec<_>>());
    let past = session.with(|s| s.past_orders().cloned().collect::<Vec<_>>());

    let group = |title: &'static str, orders: Vec<Order>, empty: &'static str| {
        view! {
            <h3>{title}</h3>
            {if orders.is_empty() {
                view! { <EmptyState title=empty description="" /> }.into_any()
            } else {
                orders
                    .into_iter()
                    .map(|order| view! { <OrderCard order=order /> })
                    .collect_view()
                    .into_any()
            }}
        }
    };

    view! {
        <div class="page">
            <h2>"My Orders"</h2>
            {group("Active Orders", active, "No active orders")}
            {group("Past Orders", past, "No past orders")}
        </div>
    }
}

#[component]
pub fn Review() -> impl IntoView {
    let session = use_session();
    let order = session.with(|s| s.review_order().cloned());
    let rating = Memo::new(move |_| session.with(|s| s.review.rating()));
    let notice = RwSignal::new(None::<&'static str>);

    let submit = move |_| {
        let mut accepted = false;
        session.update(|s| accepted = s.submit_review());
        if !accepted {
            notice.set(Some("Select a rating first"));
        }
    };

    view! {
        <div class="page">
            <h2>"Rate Your Order"</h2>
            <div class="panel">
                {match order {
                    Some(order) => {
                        view! {
                            <strong>{order.store.clone()}</strong>
                            <p class="muted">
                                {format!(
                                    "Order {} · {} · {}",
                                    order.id,
                                    order.placed_on_display(),
                                    order.totals().total,
                                )}
                            </p>
                        }
                        .into_any()
                    }
                    None => view! { <p class="muted">"Tell us about your last delivery"</p> }.into_any(),
                }}
            </div>

            <div class="panel">
                <h3>"How was your experience?"</h3>
                <div class="stars">
                    {(1..=MAX_RATING)
                        .map(|star| {
                            view! {
                                <button
                                    class="link stars"
                                    on:click=move |_| {
                                        notice.set(None);
                                        session.update(|s| s.review.set_rating(star));
                                    }
                                >
                                    {move || if star <= rating.get() { "★" } else { "☆" }}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="stars">{move || rating_label(rating.get()).unwrap_or_default()}</p>

                <label>"Comment"</label>
                <textarea
                    placeholder="Share details of your experience (optional)"
                    prop:value=move || session.with(|s| s.review.comment.clone())
                    on:input=move |e| {
                        let comment = event_target_value(&e);
                        session.update(|s| s.review.comment = comment);
                    }
                ></textarea>
            </div>

            {move || notice.get().map(|text| view! { <p class="muted">{text}</p> })}
            <div class="row">
                <button class="btn btn-secondary" on:click=move |_| session.go(ScreenId::Orders)>
                    "Skip"
                </button>
                <button class="btn" on:click=submit>
                    "Submit Review"
                </button>
            </div>
        </div>
    }
}
