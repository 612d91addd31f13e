//! Sign-in page with email + password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::guard_signed_out;

/// Trim and check sign-in fields before any network call.
fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields.");
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Map raw auth-service errors onto friendlier screen messages.
fn friendly_sign_in_error(message: &str) -> String {
    if message.contains("Invalid login credentials") {
        "Invalid email or password".to_owned()
    } else if message.contains("Email not confirmed") {
        "Verify your email before signing in".to_owned()
    } else {
        message.to_owned()
    }
}

/// Sign-in screen. Redirects home once a user is present.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    guard_signed_out(auth, navigate);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_sign_in_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::sign_in(&email_value, &password_value).await {
                Ok(user) => {
                    // The signed-out guard navigates home once this lands.
                    auth.update(|a| {
                        a.user = Some(user);
                        a.loading = false;
                    });
                }
                Err(e) => {
                    error.set(friendly_sign_in_error(&e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/signup">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
