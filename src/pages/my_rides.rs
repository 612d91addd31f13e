//! My-rides page: the passenger's bookings, newest first.
//!
//! Completing a pending booking confirms it on the store and hands off to
//! the payment screen.

#[cfg(test)]
#[path = "my_rides_test.rs"]
mod my_rides_test;

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::booking_card::BookingCard;
#[cfg(feature = "hydrate")]
use crate::net::types::Booking;
use crate::state::auth::AuthState;
use crate::state::bookings::BookingsState;
use crate::util::auth::guard_signed_in;

/// Select string embedding each booking's ride with its driver and vehicle.
const BOOKINGS_SELECT: &str = "*,ride:ride_id(*,drivers:driver_id(full_name),vehicle_types(*))";

/// Fetch the passenger's bookings and resolve route addresses.
#[cfg(feature = "hydrate")]
async fn fetch_bookings(
    passenger_id: String,
    bookings: RwSignal<BookingsState>,
    addresses: RwSignal<HashMap<String, (String, String)>>,
) {
    let result = async {
        crate::net::store::Store::from_env()?
            .table("bookings")
            .select(BOOKINGS_SELECT)
            .eq("passenger_id", &passenger_id)
            .order_desc("created_at")
            .fetch::<Booking>()
            .await
    }
    .await;

    match result {
        Ok(items) => {
            bookings.update(|s| {
                s.items = items.clone();
                s.loading = false;
                s.error = None;
            });
            for booking in items {
                let Some(ride) = booking.ride else { continue };
                if addresses.get_untracked().contains_key(&booking.id) {
                    continue;
                }
                let from = crate::net::geocode::address_for(ride.source).await;
                let to = crate::net::geocode::address_for(ride.destination).await;
                addresses.update(|map| {
                    map.insert(booking.id.clone(), (from, to));
                });
            }
        }
        Err(error) => {
            log::error!("booking list fetch failed: {error}");
            bookings.update(|s| {
                s.loading = false;
                s.error = Some(error);
            });
        }
    }
}

/// Booked-rides screen.
#[component]
pub fn MyRidesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let bookings = expect_context::<RwSignal<BookingsState>>();
    let navigate = use_navigate();
    guard_signed_in(auth, navigate.clone());

    let addresses = RwSignal::new(HashMap::<String, (String, String)>::new());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(passenger_id) = auth.get().user_id() else {
            return;
        };
        requested.set(true);
        bookings.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(fetch_bookings(passenger_id, bookings, addresses));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = passenger_id;
        }
    });

    let nav_payment = navigate.clone();
    let on_complete = Callback::new(move |booking_id: String| {
        if bookings.get_untracked().completing_id.is_some() {
            return;
        }
        bookings.update(|s| s.completing_id = Some(booking_id.clone()));

        #[cfg(feature = "hydrate")]
        {
            let nav_payment = nav_payment.clone();
            leptos::task::spawn_local(async move {
                let result = async {
                    crate::net::store::Store::from_env()?
                        .table("bookings")
                        .update(serde_json::json!({ "status": "confirmed" }))
                        .eq("id", &booking_id)
                        .execute()
                        .await
                }
                .await;
                match result {
                    Ok(()) => nav_payment("/payment", NavigateOptions::default()),
                    Err(e) => {
                        log::error!("booking completion failed: {e}");
                        bookings.update(|s| {
                            s.error = Some(e);
                            s.completing_id = None;
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&nav_payment, booking_id);
        }
    });

    let nav_back = navigate;

    view! {
        <div class="my-rides-page">
            <h1>"My Booked Rides"</h1>

            <Show when=move || bookings.get().error.is_some()>
                <p class="my-rides-page__error">{move || bookings.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !bookings.get().loading
                fallback=move || view! { <p>"Loading..."</p> }
            >
                <Show
                    when=move || !bookings.get().items.is_empty()
                    fallback=move || view! { <p>"You haven't booked any rides yet."</p> }
                >
                    <div class="my-rides-page__list">
                        {move || {
                            let completing_id = bookings.get().completing_id;
                            bookings
                                .get()
                                .items
                                .into_iter()
                                .map(|booking| {
                                    let (from, to) = addresses
                                        .get()
                                        .get(&booking.id)
                                        .cloned()
                                        .unwrap_or_else(|| {
                                            ("Resolving address...".to_owned(), "Resolving address...".to_owned())
                                        });
                                    let completing = completing_id.as_deref() == Some(booking.id.as_str());
                                    view! {
                                        <BookingCard
                                            booking=booking
                                            source_address=from
                                            destination_address=to
                                            on_complete=on_complete
                                            completing=completing
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <button class="btn" on:click=move |_| nav_back("/", NavigateOptions::default())>
                "Go Back"
            </button>
        </div>
    }
}
