//! Card summarizing one of the passenger's bookings.

use leptos::prelude::*;

use crate::net::types::{Booking, BookingStatus};
use crate::util::format::{date_part, fare_display};

/// A booking with its embedded ride details and a complete action for
/// pending bookings.
///
/// `on_complete` receives the booking id; `completing` disables the button
/// while the update request is in flight.
#[component]
pub fn BookingCard(
    booking: Booking,
    source_address: String,
    destination_address: String,
    on_complete: Callback<String>,
    completing: bool,
) -> impl IntoView {
    let booking_id = booking.id.clone();
    let is_pending = booking.status == BookingStatus::Pending;
    let status_label = match booking.status {
        BookingStatus::Pending => "pending",
        BookingStatus::Confirmed => "confirmed",
        BookingStatus::Cancelled => "cancelled",
    };
    let driver_name = booking
        .ride
        .as_ref()
        .and_then(|ride| ride.driver.as_ref())
        .map_or_else(|| "Unknown driver".to_owned(), |d| d.full_name.clone());
    let vehicle_name = booking
        .ride
        .as_ref()
        .and_then(|ride| ride.vehicle_type.as_ref())
        .map_or_else(|| "Unknown vehicle".to_owned(), |v| v.name.clone());
    let fare = booking.ride.as_ref().map(|ride| fare_display(ride.fare));
    let booked_on = date_part(&booking.created_at).to_owned();

    view! {
        <div class="booking-card">
            <p class="booking-card__row">
                <span class="booking-card__label">"Driver: "</span>
                {driver_name}
            </p>
            <p class="booking-card__row">
                <span class="booking-card__label">"Vehicle: "</span>
                {vehicle_name}
            </p>
            <p class="booking-card__row">
                <span class="booking-card__label">"From: "</span>
                {source_address}
            </p>
            <p class="booking-card__row">
                <span class="booking-card__label">"To: "</span>
                {destination_address}
            </p>
            <Show when={
                let fare = fare.clone();
                move || fare.is_some()
            }>
                <p class="booking-card__row">
                    <span class="booking-card__label">"Fare: "</span>
                    {fare.clone().unwrap_or_default()}
                </p>
            </Show>
            <p class="booking-card__row">
                <span class="booking-card__label">"Status: "</span>
                {status_label}
            </p>
            <p class="booking-card__row">
                <span class="booking-card__label">"Seats Booked: "</span>
                {booking.seats_booked}
            </p>
            <p class="booking-card__row">
                <span class="booking-card__label">"Booked On: "</span>
                {booked_on}
            </p>
            <Show when=move || is_pending>
                <button
                    class="btn btn--primary"
                    disabled=completing
                    on:click={
                        let booking_id = booking_id.clone();
                        move |_| on_complete.run(booking_id.clone())
                    }
                >
                    {if completing { "Completing..." } else { "Complete Ride" }}
                </button>
            </Show>
        </div>
    }
}
