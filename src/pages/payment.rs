//! Payment-method selection page.
//!
//! No real payment processing happens; choosing a method and completing
//! simply returns home.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::guard_signed_in;

/// Supported payment methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Upi,
    Cash,
}

impl PaymentMethod {
    /// All methods in display order.
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Upi, PaymentMethod::Cash];

    /// Display label for the selection row.
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Cash => "Cash",
        }
    }
}

/// Payment screen shown after completing a ride.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    guard_signed_in(auth, navigate.clone());

    let selected = RwSignal::new(None::<PaymentMethod>);
    let nav_done = navigate;

    let options = PaymentMethod::ALL
        .into_iter()
        .map(|method| {
            let row_class = move || {
                if selected.get() == Some(method) {
                    "payment-option payment-option--selected"
                } else {
                    "payment-option"
                }
            };
            view! {
                <button type="button" class=row_class on:click=move |_| selected.set(Some(method))>
                    {method.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="payment-page">
            <h1>"Select Payment Method"</h1>
            <div class="payment-page__options">{options}</div>
            <button
                class="btn btn--primary"
                disabled=move || selected.get().is_none()
                on:click=move |_| nav_done("/", NavigateOptions::default())
            >
                "Complete Payment"
            </button>
        </div>
    }
}
