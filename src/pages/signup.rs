//! Signup page collecting credentials and profile fields.
//!
//! The profile cannot be written until the email is verified, so submission
//! parks it alongside the auth signup and the screen shows the confirmation
//! message instead of navigating.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Gender, PendingProfile};
use crate::state::auth::AuthState;
use crate::util::auth::guard_signed_out;

fn parse_gender(value: &str) -> Option<Gender> {
    match value {
        "Male" => Some(Gender::Male),
        "Female" => Some(Gender::Female),
        "Other" => Some(Gender::Other),
        _ => None,
    }
}

/// Trim and check signup fields, producing the profile to park.
fn validate_sign_up_input(
    email: &str,
    password: &str,
    full_name: &str,
    phone_number: &str,
    gender: &str,
) -> Result<(String, String, PendingProfile), &'static str> {
    let email = email.trim();
    let full_name = full_name.trim();
    let phone_number = phone_number.trim();
    if email.is_empty() || password.is_empty() || full_name.is_empty() || phone_number.is_empty() {
        return Err("Please fill in all fields.");
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long.");
    }
    let Some(gender) = parse_gender(gender) else {
        return Err("Please select a gender.");
    };
    Ok((
        email.to_owned(),
        password.to_owned(),
        PendingProfile {
            email: email.to_owned(),
            full_name: full_name.to_owned(),
            phone_number: phone_number.to_owned(),
            gender,
        },
    ))
}

/// Signup screen. Redirects home once a user is present.
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    guard_signed_out(auth, navigate);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value, profile) = match validate_sign_up_input(
            &email.get(),
            &password.get(),
            &full_name.get(),
            &phone_number.get(),
            &gender.get(),
        ) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::sign_up(&email_value, &password_value, profile).await {
                Ok(message) => info.set(message),
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, profile);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__info">{move || info.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full Name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Phone Number"
                        prop:value=move || phone_number.get()
                        on:input=move |ev| phone_number.set(event_target_value(&ev))
                    />
                    <select
                        class="auth-input"
                        prop:value=move || gender.get()
                        on:change=move |ev| gender.set(event_target_value(&ev))
                    >
                        <option value="">"Select Gender"</option>
                        <option value="Male">"Male"</option>
                        <option value="Female">"Female"</option>
                        <option value="Other">"Other"</option>
                    </select>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign In"</a>
                </p>
            </div>
        </div>
    }
}
