//! Take-a-ride page: browse active offers, pick journey points, book.
//!
//! SYSTEM CONTEXT
//! ==============
//! The ride list polls on a fixed interval while the page is mounted so new
//! offers appear without a manual refresh. Booking inserts exactly one
//! `bookings` row and returns home.

#[cfg(test)]
#[path = "take_ride_test.rs"]
mod take_ride_test;

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::ride_card::RideCard;
use crate::components::route_points::RoutePointList;
use crate::net::types::{BookingStatus, NewBooking, Ride};
use crate::state::auth::AuthState;
use crate::state::rides::RidesState;
use crate::util::auth::guard_signed_in;
use crate::util::geo::{RoutePoint, route_points};

/// Select string joining driver name and vehicle type onto each ride.
const RIDES_SELECT: &str = "*,drivers:driver_id(full_name),vehicle_types(*)";

/// Seconds between ride-list refreshes while the page is mounted.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_SECS: u64 = 30;

/// Assemble the insert payload for a one-seat booking.
fn booking_for(
    ride_id: &str,
    passenger_id: &str,
    pickup: &RoutePoint,
    drop: &RoutePoint,
) -> NewBooking {
    NewBooking {
        ride_id: ride_id.to_owned(),
        passenger_id: passenger_id.to_owned(),
        pickup_point: pickup.to_labeled(),
        drop_point: drop.to_labeled(),
        seats_booked: 1,
        status: BookingStatus::Pending,
    }
}

/// Refresh the active ride list and resolve addresses for new rides.
#[cfg(feature = "hydrate")]
async fn fetch_active_rides(
    rides: RwSignal<RidesState>,
    addresses: RwSignal<HashMap<String, (String, String)>>,
) {
    let result = async {
        crate::net::store::Store::from_env()?
            .table("rides")
            .select(RIDES_SELECT)
            .eq("status", "active")
            .fetch::<Ride>()
            .await
    }
    .await;

    match result {
        Ok(items) => {
            rides.update(|s| {
                s.items = items.clone();
                s.loading = false;
                s.error = None;
            });
            // Addresses resolve after the list renders; rows show a
            // placeholder until their lookup lands.
            for ride in items {
                if addresses.get_untracked().contains_key(&ride.id) {
                    continue;
                }
                let from = crate::net::geocode::address_for(ride.source).await;
                let to = crate::net::geocode::address_for(ride.destination).await;
                addresses.update(|map| {
                    map.insert(ride.id.clone(), (from, to));
                });
            }
        }
        Err(error) => {
            log::error!("ride list fetch failed: {error}");
            rides.update(|s| {
                s.loading = false;
                s.error = Some(error);
            });
        }
    }
}

/// Ride browsing and booking screen.
#[component]
pub fn TakeRidePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let rides = expect_context::<RwSignal<RidesState>>();
    let navigate = use_navigate();
    guard_signed_in(auth, navigate.clone());

    let addresses = RwSignal::new(HashMap::<String, (String, String)>::new());
    let selected = RwSignal::new(None::<Ride>);
    let pickup = RwSignal::new(None::<usize>);
    let dropoff = RwSignal::new(None::<usize>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        rides.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(fetch_active_rides(rides, addresses));
    });

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                fetch_active_rides(rides, addresses).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_view = Callback::new(move |ride_id: String| {
        let ride = rides
            .get_untracked()
            .items
            .iter()
            .find(|ride| ride.id == ride_id)
            .cloned();
        if let Some(ride) = ride {
            selected.set(Some(ride));
            pickup.set(None);
            dropoff.set(None);
            error.set(String::new());
        }
    });

    let nav_done = navigate;
    let on_book = move |_: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        let Some(passenger_id) = auth.get().user_id() else {
            error.set("Sign in to book a ride.".to_owned());
            return;
        };
        let Some(ride) = selected.get() else {
            return;
        };
        let points = route_points(&ride);
        let (Some(pickup_index), Some(drop_index)) = (pickup.get(), dropoff.get()) else {
            error.set("Select both pickup and drop points.".to_owned());
            return;
        };
        let (Some(pickup_point), Some(drop_point)) =
            (points.get(pickup_index), points.get(drop_index))
        else {
            return;
        };
        let booking = booking_for(&ride.id, &passenger_id, pickup_point, drop_point);
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let nav_done = nav_done.clone();
            leptos::task::spawn_local(async move {
                let result = async {
                    crate::net::store::Store::from_env()?
                        .table("bookings")
                        .insert(&booking)
                        .await
                }
                .await;
                match result {
                    Ok(_) => nav_done("/", NavigateOptions::default()),
                    Err(e) => {
                        log::error!("booking insert failed: {e}");
                        error.set("Failed to book ride".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&nav_done, booking);
        }
    };
    let on_book = StoredValue::new(on_book);

    view! {
        <div class="take-ride-page">
            <h1>"Find a Ride"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="take-ride-page__error">{move || error.get()}</p>
            </Show>
            <Show when=move || rides.get().error.is_some()>
                <p class="take-ride-page__error">{move || rides.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !rides.get().loading
                fallback=move || view! { <p>"Loading..."</p> }
            >
                <Show
                    when=move || !rides.get().items.is_empty()
                    fallback=move || view! { <p>"No rides found"</p> }
                >
                    <div class="take-ride-page__list">
                        {move || {
                            rides
                                .get()
                                .items
                                .into_iter()
                                .map(|ride| {
                                    let (from, to) = addresses
                                        .get()
                                        .get(&ride.id)
                                        .cloned()
                                        .unwrap_or_else(|| {
                                            ("Resolving address...".to_owned(), "Resolving address...".to_owned())
                                        });
                                    view! {
                                        <RideCard
                                            ride=ride
                                            source_address=from
                                            destination_address=to
                                            on_view=on_view
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || selected.get().is_some()>
                {move || {
                    selected
                        .get()
                        .map(|ride| {
                            let points = route_points(&ride);
                            view! {
                                <div class="take-ride-page__detail">
                                    <RoutePointList points=points pickup=pickup dropoff=dropoff/>
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || {
                                            busy.get() || pickup.get().is_none() || dropoff.get().is_none()
                                        }
                                        on:click=move |ev| on_book.get_value()(ev)
                                    >
                                        {move || if busy.get() { "Booking..." } else { "Book This Ride" }}
                                    </button>
                                    <button class="btn" on:click=move |_| selected.set(None)>
                                        "Back to List"
                                    </button>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
