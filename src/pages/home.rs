//! Home page: welcome header, ride statistics, and the active-ride gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It refreshes active-ride state
//! on mount because the give/take actions must be hidden while a ride is in
//! progress.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::active_ride::ActiveRideState;
use crate::state::auth::AuthState;
use crate::util::auth::guard_signed_in;

/// Refresh active-ride state for `user_id` from the store.
///
/// Driver side: an active ride posted by the user. Passenger side: a live
/// booking (pending or confirmed) with its ride embedded.
#[cfg(feature = "hydrate")]
pub(crate) async fn refresh_active_ride(
    user_id: String,
    active: RwSignal<ActiveRideState>,
) {
    use crate::net::store::Store;
    use crate::net::types::{Booking, Ride};
    use crate::state::active_ride::ActiveRole;

    let store = match Store::from_env() {
        Ok(store) => store,
        Err(error) => {
            active.update(|s| {
                s.loading = false;
                s.error = Some(error);
            });
            return;
        }
    };

    let giving = store
        .table("rides")
        .select("*")
        .eq("driver_id", &user_id)
        .eq("status", "active")
        .fetch::<Ride>()
        .await;
    let taking = store
        .table("bookings")
        .select("*,ride:ride_id(*)")
        .eq("passenger_id", &user_id)
        .in_list("status", &["pending", "confirmed"])
        .fetch::<Booking>()
        .await;

    match (giving, taking) {
        (Ok(giving), Ok(taking)) => {
            let driver_ride = giving.into_iter().next();
            let passenger_ride = taking.into_iter().find_map(|booking| booking.ride);
            active.update(|s| {
                s.loading = false;
                s.error = None;
                if let Some(ride) = driver_ride {
                    s.ride = Some(ride);
                    s.role = Some(ActiveRole::Driver);
                } else if let Some(ride) = passenger_ride {
                    s.ride = Some(ride);
                    s.role = Some(ActiveRole::Passenger);
                } else {
                    s.ride = None;
                    s.role = None;
                }
            });
        }
        (Err(error), _) | (_, Err(error)) => {
            log::error!("active ride check failed: {error}");
            active.update(|s| {
                s.loading = false;
                s.error = Some(error);
            });
        }
    }
}

/// Authenticated landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let active = expect_context::<RwSignal<ActiveRideState>>();
    let navigate = use_navigate();
    guard_signed_in(auth, navigate.clone());

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
        leptos::task::spawn_local(refresh_active_ride(user_id, active));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    });

    let welcome = move || {
        auth.get()
            .user
            .map_or_else(String::new, |user| format!("Welcome, {}!", user.full_name))
    };
    let rides_given = move || auth.get().user.map_or(0, |user| user.rides_given);
    let rides_taken = move || auth.get().user.map_or(0, |user| user.rides_taken);

    let nav_active = StoredValue::new(navigate.clone());
    let nav_give = StoredValue::new(navigate.clone());
    let nav_take = StoredValue::new(navigate.clone());
    let nav_my = navigate.clone();
    let nav_profile = navigate;

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>{welcome}</h1>
                <button class="btn" on:click=move |_| nav_profile("/profile", NavigateOptions::default())>
                    "Profile"
                </button>
            </header>

            <Show when=move || active.get().error.is_some()>
                <p class="home-page__error">{move || active.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !active.get().loading
                fallback=move || view! { <p class="home-page__loading">"Loading..."</p> }
            >
                <Show
                    when=move || active.get().has_active_ride()
                    fallback=move || {
                        view! {
                            <div class="home-card">
                                <h2>"What would you like to do?"</h2>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| nav_give.get_value()("/give-ride", NavigateOptions::default())
                                >
                                    "Give a Ride"
                                </button>
                                <button
                                    class="btn"
                                    on:click=move |_| nav_take.get_value()("/take-ride", NavigateOptions::default())
                                >
                                    "Take a Ride"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="home-card">
                        <h2>"Active Ride"</h2>
                        <p>
                            "You currently have an active ride. You cannot give or take "
                            "another ride until this one is completed."
                        </p>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| nav_active.get_value()("/active-ride", NavigateOptions::default())
                        >
                            "View Active Ride"
                        </button>
                    </div>
                </Show>
            </Show>

            <div class="home-card">
                <h2>"Your Statistics"</h2>
                <div class="home-card__stats">
                    <div class="home-card__stat">
                        <span class="home-card__stat-value">{rides_given}</span>
                        <span>"Rides Given"</span>
                    </div>
                    <div class="home-card__stat">
                        <span class="home-card__stat-value">{rides_taken}</span>
                        <span>"Rides Taken"</span>
                    </div>
                </div>
            </div>

            <button class="btn home-page__my-rides" on:click=move |_| nav_my("/my-rides", NavigateOptions::default())>
                "My Booked Rides"
            </button>
        </div>
    }
}
