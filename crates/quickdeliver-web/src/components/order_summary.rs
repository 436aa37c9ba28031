//! Subtotal / delivery / discount / total block

use leptos::prelude::*;
use quickdeliver_core::OrderTotals;

#[component]
pub fn OrderSummary(#[prop(into)] totals: Signal<OrderTotals>) -> impl IntoView {
    view! {
        <div class="panel">
            <h3>"Order Summary"</h3>
            <div class="row">
                <span>{move || format!("Subtotal ({} items)", totals.get().item_count)}</span>
                <span>{move || totals.get().subtotal.to_string()}</span>
            </div>
            <div class="row">
                <span>"Delivery Fee"</span>
                <span>{move || totals.get().delivery_fee.to_string()}</span>
            </div>
            <Show when=move || totals.get().has_discount()>
                <div class="row">
                    <span>"Discount"</span>
                    <span>{move || format!("-{}", totals.get().discount)}</span>
                </div>
            </Show>
            <div class="row">
                <strong>"Total"</strong>
                <span class="price">{move || totals.get().total.to_string()}</span>
            </div>
        </div>
    }
}
