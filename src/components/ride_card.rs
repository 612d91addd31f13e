//! Card summarizing one bookable ride offer.

use leptos::prelude::*;

use crate::net::types::Ride;
use crate::util::format::fare_display;

/// A ride summary with driver, vehicle, fare, and route endpoints.
///
/// `on_view` receives the ride id when the passenger asks to see the route
/// and book.
#[component]
pub fn RideCard(
    ride: Ride,
    source_address: String,
    destination_address: String,
    on_view: Callback<String>,
) -> impl IntoView {
    let ride_id = ride.id.clone();
    let driver_name = ride
        .driver
        .as_ref()
        .map_or_else(|| "Unknown driver".to_owned(), |d| d.full_name.clone());
    let vehicle_name = ride
        .vehicle_type
        .as_ref()
        .map_or_else(|| "Unknown vehicle".to_owned(), |v| v.name.clone());

    view! {
        <div class="ride-card">
            <p class="ride-card__row">
                <span class="ride-card__label">"Driver: "</span>
                {driver_name}
            </p>
            <p class="ride-card__row">
                <span class="ride-card__label">"Vehicle: "</span>
                {vehicle_name}
            </p>
            <p class="ride-card__row">
                <span class="ride-card__label">"Available Seats: "</span>
                {ride.available_seats}
            </p>
            <p class="ride-card__row">
                <span class="ride-card__label">"Fare: "</span>
                {fare_display(ride.fare)}
            </p>
            <Show when={
                let female_only = ride.female_only;
                move || female_only
            }>
                <p class="ride-card__row ride-card__row--flag">"Female passengers only"</p>
            </Show>
            <p class="ride-card__row">
                <span class="ride-card__label">"From: "</span>
                {source_address}
            </p>
            <p class="ride-card__row">
                <span class="ride-card__label">"To: "</span>
                {destination_address}
            </p>
            <button class="btn btn--primary" on:click=move |_| on_view.run(ride_id.clone())>
                "View Route & Book"
            </button>
        </div>
    }
}
