//! Auth endpoints and the cached session lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth service issues bearer tokens separately from the table store; the
//! session JSON is cached in `localStorage` and every store request reads the
//! token back through [`stored_access_token`]. Signup cannot write the
//! profile row before the email is verified, so the profile fields are parked
//! under a second storage key and replayed as a `users` insert on first
//! sign-in.
//!
//! ERROR HANDLING
//! ==============
//! Fallible flows return `Result<_, String>` for screens to display;
//! session restore degrades to `None` and clears the cache instead of
//! surfacing startup errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::NewProfile;
use super::types::{PendingProfile, Session, User};
use crate::util::storage;

/// Storage key holding the cached session JSON.
pub const SESSION_KEY: &str = "ridepool.session";
/// Storage key holding the parked signup profile.
pub const PENDING_PROFILE_KEY: &str = "ridepool.pending_profile";

/// Message shown after a successful signup request.
pub const SIGNUP_CONFIRMATION_MESSAGE: &str =
    "Check your email for a verification link. You can sign in once your email is verified.";

/// The session cached in browser storage, if any.
pub fn cached_session() -> Option<Session> {
    storage::load_json(SESSION_KEY)
}

/// Access token of the cached session, for attaching to store requests.
pub(crate) fn stored_access_token() -> Option<String> {
    cached_session().map(|session| session.access_token)
}

/// Drop the cached session.
pub fn clear_session() {
    storage::remove(SESSION_KEY);
}

/// Whether a parked profile belongs to the signing-in email.
#[cfg(any(test, feature = "hydrate"))]
fn pending_profile_matches(pending: &PendingProfile, email: &str) -> bool {
    pending.email.eq_ignore_ascii_case(email.trim())
}

/// Normalize parked profile fields into a `users` insert payload.
#[cfg(any(test, feature = "hydrate"))]
fn profile_insert(user_id: &str, email: &str, pending: &PendingProfile) -> NewProfile {
    NewProfile {
        id: user_id.to_owned(),
        email: email.trim().to_lowercase(),
        full_name: pending.full_name.trim().to_owned(),
        phone_number: pending.phone_number.trim().to_owned(),
        gender: pending.gender,
    }
}

/// Exchange email + password for a session and cache it.
///
/// # Errors
///
/// Returns the auth service's error description (e.g. "Invalid login
/// credentials") or a transport error string.
#[cfg(feature = "hydrate")]
async fn request_token(email: &str, password: &str) -> Result<Session, String> {
    let config = super::config::StoreConfig::from_env()?;
    let url = config.auth_url("token?grant_type=password");
    let payload = serde_json::json!({ "email": email, "password": password });
    let response = gloo_net::http::Request::post(&url)
        .header("Content-Type", "application/json")
        .header("apikey", &config.anon_key)
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body = response.text().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(super::store::error_message(response.status(), &body));
    }
    let session: Session = serde_json::from_str(&body).map_err(|e| e.to_string())?;
    storage::save_json(SESSION_KEY, &session);
    Ok(session)
}

/// Register a new account.
///
/// Parks the profile fields before the signup call so the first sign-in can
/// create the `users` row, then resolves to a confirmation message.
///
/// # Errors
///
/// Returns the auth service's error description or a transport error string.
pub async fn sign_up(email: &str, password: &str, profile: PendingProfile) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        storage::save_json(PENDING_PROFILE_KEY, &profile);
        let config = super::config::StoreConfig::from_env()?;
        let url = config.auth_url("signup");
        let payload = serde_json::json!({ "email": email, "password": password });
        let response = gloo_net::http::Request::post(&url)
            .header("Content-Type", "application/json")
            .header("apikey", &config.anon_key)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body = response.text().await.map_err(|e| e.to_string())?;
        if !response.ok() {
            return Err(super::store::error_message(response.status(), &body));
        }
        // Confirmation-disabled deployments return a live session right away.
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body)
            && let Some(session) = value.get("session")
            && !session.is_null()
            && let Ok(session) = serde_json::from_value::<Session>(session.clone())
        {
            storage::save_json(SESSION_KEY, &session);
        }
        Ok(SIGNUP_CONFIRMATION_MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, profile);
        Err("not available on server".to_owned())
    }
}

/// Sign in and resolve the full profile row.
///
/// On first sign-in after email verification, the parked signup profile is
/// inserted into `users` before the row is read back.
///
/// # Errors
///
/// Returns the auth service's error description, a store error, or
/// "Profile data required for first login" when the profile row is missing
/// and nothing was parked for this email.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let session = request_token(email, password).await?;
        let user_id = session
            .user
            .as_ref()
            .map(|user| user.id.clone())
            .ok_or_else(|| "No user data returned".to_owned())?;

        let store = super::store::Store::from_env()?;
        let users = store.table("users");
        let profile: Option<User> = users.select("*").eq("id", &user_id).fetch_single().await?;

        if profile.is_none() {
            let pending: Option<PendingProfile> = storage::load_json(PENDING_PROFILE_KEY);
            let pending = pending
                .filter(|p| pending_profile_matches(p, email))
                .ok_or_else(|| "Profile data required for first login".to_owned())?;
            users.insert(&profile_insert(&user_id, email, &pending)).await?;
            storage::remove(PENDING_PROFILE_KEY);
        }

        let profile: Option<User> = users.select("*").eq("id", &user_id).fetch_single().await?;
        profile.ok_or_else(|| "User profile not found after creation".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// End the current session on the auth service and drop the cache.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if let (Ok(config), Some(token)) = (super::config::StoreConfig::from_env(), stored_access_token()) {
            let _ = gloo_net::http::Request::post(&config.auth_url("logout"))
                .header("apikey", &config.anon_key)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await;
        }
    }
    clear_session();
}

/// Rebuild the signed-in user from the cached session, if it is still valid.
///
/// Any failure (expired token, missing profile, transport error) clears the
/// cache and resolves to `None` so startup never dead-ends on a stale
/// session.
pub async fn restore_session() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let session = cached_session()?;
        let config = match super::config::StoreConfig::from_env() {
            Ok(config) => config,
            Err(_) => return None,
        };

        let response = gloo_net::http::Request::get(&config.auth_url("user"))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await;
        let auth_user = match response {
            Ok(response) if response.ok() => response.json::<super::types::AuthUser>().await.ok(),
            _ => None,
        };
        let Some(auth_user) = auth_user else {
            log::warn!("cached session rejected by auth service; clearing");
            clear_session();
            return None;
        };

        let store = match super::store::Store::from_env() {
            Ok(store) => store,
            Err(_) => return None,
        };
        match store
            .table("users")
            .select("*")
            .eq("id", &auth_user.id)
            .fetch_single::<User>()
            .await
        {
            Ok(profile) => profile,
            Err(error) => {
                log::warn!("profile lookup during session restore failed: {error}");
                clear_session();
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
