//! Give-a-ride page: vehicle details and route entry.
//!
//! Route points are entered as coordinates and validated against the
//! service-region bounds before the offer is posted. The insert happens
//! exactly once per successful submit; the form stays on screen with an
//! error otherwise.

#[cfg(test)]
#[path = "give_ride_test.rs"]
mod give_ride_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{GeoPoint, NewRide, RideStatus, VehicleType};
use crate::state::auth::AuthState;
use crate::util::auth::guard_signed_in;
use crate::util::geo::within_region;

/// Raw form field values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
struct RideFormInput {
    vehicle_type_id: String,
    available_seats: String,
    fare: String,
    female_only: bool,
    source_lat: String,
    source_lng: String,
    stop1_lat: String,
    stop1_lng: String,
    stop2_lat: String,
    stop2_lng: String,
    dest_lat: String,
    dest_lng: String,
}

/// Parse one coordinate pair and check it lies inside the service region.
fn parse_point(latitude: &str, longitude: &str) -> Result<GeoPoint, &'static str> {
    let latitude: f64 = latitude.trim().parse().map_err(|_| "Coordinates must be numbers.")?;
    let longitude: f64 = longitude.trim().parse().map_err(|_| "Coordinates must be numbers.")?;
    let point = GeoPoint { latitude, longitude };
    if !within_region(point) {
        return Err("Choose points within Telangana.");
    }
    Ok(point)
}

/// Validate the whole form and assemble the insert payload.
fn build_new_ride(driver_id: &str, input: &RideFormInput) -> Result<NewRide, String> {
    if input.vehicle_type_id.is_empty() {
        return Err("Select a vehicle type.".to_owned());
    }
    let available_seats: i64 = input
        .available_seats
        .trim()
        .parse()
        .map_err(|_| "Enter a valid seat count.".to_owned())?;
    if available_seats < 1 {
        return Err("Enter a valid seat count.".to_owned());
    }
    let fare: f64 = input
        .fare
        .trim()
        .parse()
        .map_err(|_| "Enter a valid fare amount.".to_owned())?;
    if fare <= 0.0 {
        return Err("Enter a valid fare amount.".to_owned());
    }
    let source = parse_point(&input.source_lat, &input.source_lng)
        .map_err(|e| format!("Source: {e}"))?;
    let stop1 = parse_point(&input.stop1_lat, &input.stop1_lng)
        .map_err(|e| format!("Stop 1: {e}"))?;
    let stop2 = parse_point(&input.stop2_lat, &input.stop2_lng)
        .map_err(|e| format!("Stop 2: {e}"))?;
    let destination = parse_point(&input.dest_lat, &input.dest_lng)
        .map_err(|e| format!("Destination: {e}"))?;

    Ok(NewRide {
        driver_id: driver_id.to_owned(),
        source,
        intermediate_points: vec![stop1, stop2],
        destination,
        vehicle_type_id: input.vehicle_type_id.clone(),
        available_seats,
        fare,
        female_only: input.female_only,
        status: RideStatus::Active,
    })
}

/// Ride-offer form.
#[component]
pub fn GiveRidePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    guard_signed_in(auth, navigate.clone());

    let vehicle_types = RwSignal::new(Vec::<VehicleType>::new());
    let input = RwSignal::new(RideFormInput::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Vehicle categories load once; failure is a plain screen error.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = async {
                crate::net::store::Store::from_env()?
                    .table("vehicle_types")
                    .select("*")
                    .fetch::<VehicleType>()
                    .await
            }
            .await;
            match result {
                Ok(types) => vehicle_types.set(types),
                Err(e) => {
                    log::error!("vehicle type fetch failed: {e}");
                    error.set("Failed to load vehicle types".to_owned());
                }
            }
        });
    });

    let nav_done = navigate;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(driver_id) = auth.get().user_id() else {
            error.set("Sign in to create a ride.".to_owned());
            return;
        };
        let ride = match build_new_ride(&driver_id, &input.get()) {
            Ok(ride) => ride,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let nav_done = nav_done.clone();
            leptos::task::spawn_local(async move {
                let result = async {
                    crate::net::store::Store::from_env()?
                        .table("rides")
                        .insert(&ride)
                        .await
                }
                .await;
                match result {
                    Ok(_) => nav_done("/", NavigateOptions::default()),
                    Err(e) => {
                        log::error!("ride insert failed: {e}");
                        error.set("Failed to create ride".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&nav_done, ride);
        }
    };

    let point_field = move |label: &'static str, get: fn(&RideFormInput) -> String, set: fn(&mut RideFormInput, String)| {
        view! {
            <input
                class="ride-form__input ride-form__input--coord"
                type="text"
                placeholder=label
                prop:value=move || get(&input.get())
                on:input=move |ev| input.update(|i| set(i, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="ride-form-page">
            <h1>"Create a Ride"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="ride-form__error">{move || error.get()}</p>
            </Show>
            <form class="ride-form" on:submit=on_submit>
                <h2>"Vehicle Details"</h2>
                <div class="ride-form__vehicle-types">
                    {move || {
                        vehicle_types
                            .get()
                            .into_iter()
                            .map(|vehicle| {
                                let id = vehicle.id.clone();
                                let selected_id = vehicle.id.clone();
                                let selected = move || input.get().vehicle_type_id == selected_id;
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if selected() {
                                                "ride-form__vehicle ride-form__vehicle--selected"
                                            } else {
                                                "ride-form__vehicle"
                                            }
                                        }
                                        on:click=move |_| {
                                            input.update(|i| i.vehicle_type_id = id.clone());
                                        }
                                    >
                                        <span>{vehicle.name.clone()}</span>
                                        <span class="ride-form__vehicle-seats">
                                            {format!("Max {} seats", vehicle.total_seats)}
                                        </span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <input
                    class="ride-form__input"
                    type="number"
                    placeholder="Available Seats"
                    prop:value=move || input.get().available_seats
                    on:input=move |ev| input.update(|i| i.available_seats = event_target_value(&ev))
                />
                <input
                    class="ride-form__input"
                    type="number"
                    placeholder="Fare (in Rs.)"
                    prop:value=move || input.get().fare
                    on:input=move |ev| input.update(|i| i.fare = event_target_value(&ev))
                />
                <button
                    type="button"
                    class=move || {
                        if input.get().female_only {
                            "btn ride-form__toggle ride-form__toggle--on"
                        } else {
                            "btn ride-form__toggle"
                        }
                    }
                    on:click=move |_| input.update(|i| i.female_only = !i.female_only)
                >
                    "Female Passengers Only"
                </button>

                <h2>"Route"</h2>
                <div class="ride-form__point">
                    <span>"Source"</span>
                    {point_field("Latitude", |i| i.source_lat.clone(), |i, v| i.source_lat = v)}
                    {point_field("Longitude", |i| i.source_lng.clone(), |i, v| i.source_lng = v)}
                </div>
                <div class="ride-form__point">
                    <span>"Stop 1"</span>
                    {point_field("Latitude", |i| i.stop1_lat.clone(), |i, v| i.stop1_lat = v)}
                    {point_field("Longitude", |i| i.stop1_lng.clone(), |i, v| i.stop1_lng = v)}
                </div>
                <div class="ride-form__point">
                    <span>"Stop 2"</span>
                    {point_field("Latitude", |i| i.stop2_lat.clone(), |i, v| i.stop2_lat = v)}
                    {point_field("Longitude", |i| i.stop2_lng.clone(), |i, v| i.stop2_lng = v)}
                </div>
                <div class="ride-form__point">
                    <span>"Destination"</span>
                    {point_field("Latitude", |i| i.dest_lat.clone(), |i, v| i.dest_lat = v)}
                    {point_field("Longitude", |i| i.dest_lng.clone(), |i, v| i.dest_lng = v)}
                </div>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating Ride..." } else { "Create Ride" }}
                </button>
            </form>
        </div>
    }
}
