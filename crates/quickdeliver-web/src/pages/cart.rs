//! Cart and checkout pages

use leptos::prelude::*;
use quickdeliver_core::checkout::{CheckoutField, PaymentMethod};
use quickdeliver_core::{DeliveryTier, ScreenId};

use crate::components::{EmptyState, OrderSummary};
use crate::session::use_session;

#[component]
pub fn Cart() -> impl IntoView {
    let session = use_session();
    let totals = Signal::derive(move || session.with(|s| s.cart().totals()));
    let is_empty = Memo::new(move |_| session.with(|s| s.cart().is_empty()));

    view! {
        <div class="page">
            <h2>{move || format!("Cart ({} items)", totals.get().item_count)}</h2>
            <Show
                when=move || !is_empty.get()
                fallback=|| {
                    view! {
                        <EmptyState
                            title="Your cart is empty"
                            description="Add items from a store to get started"
                            action=("Browse stores", ScreenId::Browse)
                        />
                    }
                }
            >
                <div class="list">
                    {move || {
                        session
                            .with(|s| s.cart().items().to_vec())
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <div class="panel row">
                                        <div>
                                            <strong>{item.name.clone()}</strong>
                                            <p class="muted">{item.store.clone()}</p>
                                            <span class="price">{item.unit_price.to_string()}</span>
                                        </div>
                                        <div class="row">
                                            <button
                                                class="btn btn-secondary"
                                                on:click=move |_| session.update(|s| s.cart_mut().decrement(id))
                                            >
                                                "−"
                                            </button>
                                            <strong>{item.quantity}</strong>
                                            <button
                                                class="btn btn-secondary"
                                                on:click=move |_| session.update(|s| s.cart_mut().increment(id))
                                            >
                                                "+"
                                            </button>
                                            <span>{item.line_total().to_string()}</span>
                                            <button
                                                class="link"
                                                on:click=move |_| session.update(|s| s.cart_mut().remove(id))
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="panel">
                    <h3>"Delivery Option"</h3>
                    {DeliveryTier::all()
                        .iter()
                        .copied()
                        .map(|tier| {
                            view! {
                                <label class="row">
                                    <span>
                                        <input
                                            type="radio"
                                            name="tier"
                                            prop:checked=move || session.with(|s| s.cart().tier() == tier)
                                            on:change=move |_| session.update(|s| s.cart_mut().set_tier(tier))
                                        />
                                        {format!(" {} · {}", tier.label(), tier.eta())}
                                    </span>
                                    <span>{tier.fee().to_string()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="panel">
                    <h3>"Promo Code"</h3>
                    <input
                        placeholder="Enter promo code"
                        prop:value=move || session.with(|s| s.cart().coupon_code().to_string())
                        on:input=move |e| {
                            let code = event_target_value(&e);
                            session.update(|s| s.cart_mut().set_coupon_code(code));
                        }
                    />
                </div>
            </Show>

            <OrderSummary totals=totals />
            <button
                class="btn"
                prop:disabled=move || is_empty.get()
                on:click=move |_| session.go(ScreenId::Checkout)
            >
                {move || format!("Proceed to Checkout · {}", totals.get().total)}
            </button>
        </div>
    }
}

#[component]
fn CheckoutInput(field: CheckoutField) -> impl IntoView {
    let session = use_session();
    view! {
        <label>{field.label()}</label>
        <input
            prop:value=move || session.with(|s| s.checkout.field(field).to_string())
            on:input=move |e| {
                let value = event_target_value(&e);
                session.update(|s| s.checkout.set(field, value));
            }
        />
    }
}

#[component]
pub fn Checkout() -> impl IntoView {
    let session = use_session();
    let totals = Signal::derive(move || session.with(|s| s.cart().totals()));
    let payment = Memo::new(move |_| session.with(|s| s.checkout.payment));
    let notice = RwSignal::new(None::<&'static str>);

    let place_order = move |_| {
        if session.with(|s| s.cart().is_empty()) {
            notice.set(Some("Your cart is empty"));
            return;
        }
        session.update(|s| {
            s.place_order();
        });
    };

    let section = move |title: &'static str, fields: &'static [CheckoutField]| {
        view! {
            <div class="panel">
                <h3>{title}</h3>
                {fields
                    .iter()
                    .map(|field| view! { <CheckoutInput field=*field /> })
                    .collect_view()}
            </div>
        }
    };

    view! {
        <div class="page">
            <button class="link" on:click=move |_| session.go(ScreenId::Cart)>
                "← Back to cart"
            </button>
            <h2>"Checkout"</h2>
            {section(
                "Contact Information",
                &[CheckoutField::FirstName, CheckoutField::LastName, CheckoutField::Phone],
            )}
            {section(
                "Delivery Address",
                &[CheckoutField::Street, CheckoutField::City, CheckoutField::Zip],
            )}

            <div class="panel">
                <h3>"Payment Method"</h3>
                {[PaymentMethod::Card, PaymentMethod::CashOnDelivery]
                    .into_iter()
                    .map(|method| {
                        view! {
                            <label>
                                <input
                                    type="radio"
                                    name="payment"
                                    prop:checked=move || payment.get() == method
                                    on:change=move |_| session.update(|s| s.checkout.payment = method)
                                />
                                {format!(" {}", method.label())}
                            </label>
                        }
                    })
                    .collect_view()}
                <Show when=move || payment.get() == PaymentMethod::Card>
                    {[CheckoutField::CardNumber, CheckoutField::Expiry, CheckoutField::Cvv]
                        .into_iter()
                        .map(|field| view! { <CheckoutInput field=field /> })
                        .collect_view()}
                </Show>
            </div>

            {section("Delivery Instructions", &[CheckoutField::Instructions])}

            <OrderSummary totals=totals />
            {move || notice.get().map(|text| view! { <p class="muted">{text}</p> })}
            <button class="btn" on:click=place_order>
                {move || format!("Place Order · {}", totals.get().total)}
            </button>
        </div>
    }
}
