//! Active-ride page: route, status, passengers, and the end-ride action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from home when an active ride exists, but also loadable directly,
//! so it refreshes active-ride state itself. The driver additionally sees
//! the ride's bookings and can end the ride, which deletes the bookings and
//! then the ride row.

#[cfg(test)]
#[path = "active_ride_test.rs"]
mod active_ride_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Booking;
use crate::state::active_ride::ActiveRideState;
use crate::state::auth::AuthState;
use crate::state::bookings::BookingsState;
use crate::util::auth::guard_signed_in;
use crate::util::format::{date_part, fare_display};

/// Select string for the driver's passenger list.
const PASSENGERS_SELECT: &str = "id,ride_id,passenger_id,status,seats_booked,pickup_point,\
drop_point,created_at,passenger:passenger_id(id,full_name,email,phone_number)";

/// Fetch the bookings made against `ride_id`, newest first.
#[cfg(feature = "hydrate")]
async fn fetch_ride_bookings(ride_id: String, bookings: RwSignal<BookingsState>) {
    let result = async {
        crate::net::store::Store::from_env()?
            .table("bookings")
            .select(PASSENGERS_SELECT)
            .eq("ride_id", &ride_id)
            .order_desc("created_at")
            .fetch::<Booking>()
            .await
    }
    .await;

    match result {
        Ok(items) => bookings.update(|s| {
            s.items = items;
            s.loading = false;
            s.error = None;
        }),
        Err(error) => {
            log::error!("ride bookings fetch failed: {error}");
            bookings.update(|s| {
                s.loading = false;
                s.error = Some(error);
            });
        }
    }
}

/// Delete a ride's bookings and then the ride itself.
///
/// Ordering matters: the bookings reference the ride, so they go first.
#[cfg(feature = "hydrate")]
async fn end_ride(ride_id: String) -> Result<(), String> {
    let store = crate::net::store::Store::from_env()?;
    store
        .table("bookings")
        .delete()
        .eq("ride_id", &ride_id)
        .execute()
        .await?;
    store.table("rides").delete().eq("id", &ride_id).execute().await
}

/// Active-ride detail screen.
#[component]
pub fn ActiveRidePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let active = expect_context::<RwSignal<ActiveRideState>>();
    let bookings = expect_context::<RwSignal<BookingsState>>();
    let navigate = use_navigate();
    guard_signed_in(auth, navigate.clone());

    let source_address = RwSignal::new("Resolving address...".to_owned());
    let destination_address = RwSignal::new("Resolving address...".to_owned());
    let stop_addresses = RwSignal::new(Vec::<String>::new());
    let show_end_dialog = RwSignal::new(false);
    let end_error = RwSignal::new(String::new());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(user_id) = auth.get().user_id() else {
            return;
        };
        requested.set(true);
        active.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(super::home::refresh_active_ride(user_id, active));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    });

    // Resolve addresses and (for drivers) the passenger list once per ride.
    let resolved_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let state = active.get();
        let is_driver = state.is_driver();
        let Some(ride) = state.ride else {
            return;
        };
        if resolved_for.get() == Some(ride.id.clone()) {
            return;
        }
        resolved_for.set(Some(ride.id.clone()));

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                source_address.set(crate::net::geocode::address_for(ride.source).await);
                destination_address.set(crate::net::geocode::address_for(ride.destination).await);
                let mut stops = Vec::with_capacity(ride.intermediate_points.len());
                for point in &ride.intermediate_points {
                    stops.push(crate::net::geocode::address_for(*point).await);
                }
                stop_addresses.set(stops);

                if is_driver {
                    bookings.update(|s| s.loading = true);
                    fetch_ride_bookings(ride.id.clone(), bookings).await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ride, is_driver);
        }
    });

    let nav_back = navigate.clone();
    let nav_done = navigate;

    let on_end_confirm = Callback::new(move |()| {
        let Some(ride) = active.get_untracked().ride else {
            return;
        };
        show_end_dialog.set(false);

        #[cfg(feature = "hydrate")]
        {
            let nav_done = nav_done.clone();
            leptos::task::spawn_local(async move {
                match end_ride(ride.id).await {
                    Ok(()) => {
                        active.update(|s| {
                            s.ride = None;
                            s.role = None;
                        });
                        nav_done("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("end ride failed: {e}");
                        end_error.set(format!("Failed to end ride: {e}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&nav_done, ride);
        }
    });

    view! {
        <div class="active-ride-page">
            <h1>"Active Ride Details"</h1>

            <Show when=move || active.get().error.is_some()>
                <p class="active-ride-page__error">{move || active.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !end_error.get().is_empty()>
                <p class="active-ride-page__error">{move || end_error.get()}</p>
            </Show>

            <Show
                when=move || !active.get().loading
                fallback=move || view! { <p>"Loading..."</p> }
            >
                <Show
                    when=move || active.get().has_active_ride()
                    fallback=move || view! { <p>"You don't have any active rides at the moment."</p> }
                >
                    {move || {
                        active
                            .get()
                            .ride
                            .map(|ride| {
                                let stops = move || {
                                    stop_addresses
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, address)| {
                                            view! {
                                                <p class="active-ride-page__row">
                                                    <span class="active-ride-page__label">
                                                        {format!("Stop {}: ", index + 1)}
                                                    </span>
                                                    {address}
                                                </p>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                };
                                let status_label = format!("{:?}", ride.status).to_lowercase();
                                view! {
                                    <div class="active-ride-page__details">
                                        <p class="active-ride-page__row">
                                            <span class="active-ride-page__label">"From: "</span>
                                            {move || source_address.get()}
                                        </p>
                                        {stops}
                                        <p class="active-ride-page__row">
                                            <span class="active-ride-page__label">"To: "</span>
                                            {move || destination_address.get()}
                                        </p>
                                        <p class="active-ride-page__row">
                                            <span class="active-ride-page__label">"Date: "</span>
                                            {date_part(&ride.created_at).to_owned()}
                                        </p>
                                        <p class="active-ride-page__row">
                                            <span class="active-ride-page__label">"Status: "</span>
                                            {status_label}
                                        </p>
                                        <p class="active-ride-page__row">
                                            <span class="active-ride-page__label">"Available Seats: "</span>
                                            {ride.available_seats}
                                        </p>
                                        <p class="active-ride-page__row">
                                            <span class="active-ride-page__label">"Fare: "</span>
                                            {fare_display(ride.fare)}
                                        </p>
                                        <p class="active-ride-page__row">
                                            <span class="active-ride-page__label">"Female Only: "</span>
                                            {if ride.female_only { "Yes" } else { "No" }}
                                        </p>
                                    </div>
                                }
                            })
                    }}

                    <Show when=move || active.get().is_driver()>
                        <div class="active-ride-page__passengers">
                            <h2>"Booked Passengers"</h2>
                            <Show
                                when=move || !bookings.get().loading
                                fallback=move || view! { <p>"Loading bookings..."</p> }
                            >
                                <Show when=move || bookings.get().error.is_some()>
                                    <p class="active-ride-page__error">
                                        {move || bookings.get().error.unwrap_or_default()}
                                    </p>
                                </Show>
                                <Show
                                    when=move || !bookings.get().items.is_empty()
                                    fallback=move || {
                                        view! { <p>"No passengers have booked this ride yet."</p> }
                                    }
                                >
                                    {move || {
                                        bookings
                                            .get()
                                            .items
                                            .into_iter()
                                            .map(|booking| view! { <PassengerRow booking=booking/> })
                                            .collect::<Vec<_>>()
                                    }}
                                </Show>
                            </Show>
                        </div>
                        <button class="btn btn--danger" on:click=move |_| show_end_dialog.set(true)>
                            "End Ride"
                        </button>
                    </Show>
                </Show>
            </Show>

            <button class="btn" on:click=move |_| nav_back("/", NavigateOptions::default())>
                "Go Back"
            </button>

            <Show when=move || show_end_dialog.get()>
                <EndRideDialog
                    on_cancel=Callback::new(move |()| show_end_dialog.set(false))
                    on_confirm=on_end_confirm
                />
            </Show>
        </div>
    }
}

/// One booked passenger with contact and journey points.
#[component]
fn PassengerRow(booking: Booking) -> impl IntoView {
    let name = booking
        .passenger
        .as_ref()
        .map_or_else(|| "Unknown".to_owned(), |p| p.full_name.clone());
    let email = booking
        .passenger
        .as_ref()
        .map_or_else(|| "No email".to_owned(), |p| p.email.clone());
    let status_label = format!("{:?}", booking.status).to_lowercase();
    let seats_note = (booking.seats_booked > 1).then(|| format!(" \u{2022} {} seats", booking.seats_booked));
    let pickup = booking
        .pickup_point
        .as_ref()
        .and_then(|p| p.label.clone())
        .unwrap_or_else(|| "Custom location".to_owned());
    let drop = booking
        .drop_point
        .as_ref()
        .and_then(|p| p.label.clone())
        .unwrap_or_else(|| "Custom location".to_owned());

    view! {
        <div class="passenger-row">
            <p class="passenger-row__name">{name} " (" {email} ")"</p>
            <p class="passenger-row__details">"Status: " {status_label} {seats_note.unwrap_or_default()}</p>
            <p class="passenger-row__details">"Pickup: " {pickup}</p>
            <p class="passenger-row__details">"Drop: " {drop}</p>
        </div>
    }
}

/// Confirmation dialog for ending the active ride.
#[component]
fn EndRideDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"End Ride"</h2>
                <p class="dialog__danger">
                    "This will permanently delete this ride and all of its bookings."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "End Ride"
                    </button>
                </div>
            </div>
        </div>
    }
}
