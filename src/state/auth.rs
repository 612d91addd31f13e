//! Auth-session state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware screens coordinate login redirects and
//! identity-dependent rendering through this state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and restore progress.
///
/// `loading` starts true because the root component restores the cached
/// session asynchronously on mount; guards must not redirect before that
/// finishes.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Identifier of the signed-in user, if any.
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.id.clone())
    }
}
