//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated screen applies the same redirect behavior, and the
//! login/signup screens apply the inverse; both wait for session restore to
//! finish before acting.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/login` once auth has loaded without a user.
pub fn guard_signed_in<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect home once auth has loaded with a user (login/signup screens).
pub fn guard_signed_out<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });
}
