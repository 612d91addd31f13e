//! Profile page: identity, contact info, ride statistics, sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Gender;
use crate::state::auth::AuthState;
use crate::util::auth::guard_signed_in;
use crate::util::format::avatar_initial;

/// Profile and sign-out screen.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    guard_signed_in(auth, navigate.clone());

    let initial = move || {
        auth.get()
            .user
            .map_or('U', |user| avatar_initial(&user.full_name))
    };
    let full_name = move || auth.get().user.map_or_else(String::new, |user| user.full_name);
    let email = move || auth.get().user.map_or_else(String::new, |user| user.email);
    let phone_number = move || {
        auth.get()
            .user
            .map_or_else(|| "Not provided".to_owned(), |user| user.phone_number)
    };
    let gender = move || {
        auth.get().user.map_or("Not provided", |user| match user.gender {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        })
    };
    let rides_given = move || auth.get().user.map_or(0, |user| user.rides_given);
    let rides_taken = move || auth.get().user.map_or(0, |user| user.rides_taken);

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::auth::sign_out().await;
            // The signed-in guard routes to /login once the user clears.
            auth.update(|a| {
                a.user = None;
                a.loading = false;
            });
        });
    };

    let nav_back = navigate;

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <span class="profile-page__avatar">{move || initial().to_string()}</span>
                <h1>{full_name}</h1>
                <p class="profile-page__email">{email}</p>
            </header>

            <section class="profile-page__section">
                <h2>"Profile Information"</h2>
                <p class="profile-page__row">
                    <span class="profile-page__label">"Phone Number: "</span>
                    {phone_number}
                </p>
                <p class="profile-page__row">
                    <span class="profile-page__label">"Gender: "</span>
                    {gender}
                </p>
            </section>

            <section class="profile-page__section">
                <h2>"Ride Statistics"</h2>
                <p class="profile-page__row">
                    <span class="profile-page__label">"Rides Given: "</span>
                    {rides_given}
                </p>
                <p class="profile-page__row">
                    <span class="profile-page__label">"Rides Taken: "</span>
                    {rides_taken}
                </p>
            </section>

            <button class="btn btn--danger" on:click=on_sign_out>
                "Sign Out"
            </button>
            <button class="btn" on:click=move |_| nav_back("/", NavigateOptions::default())>
                "Go Back"
            </button>
        </div>
    }
}
