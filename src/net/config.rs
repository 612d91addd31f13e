//! Compile-time configuration for the remote data store.
//!
//! The WASM bundle has no process environment, so endpoints and keys are
//! baked in at build time via `option_env!` and validated at use time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Connection settings for the REST data store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Service root, e.g. `https://xyz.example.co` (no trailing slash).
    pub base_url: String,
    /// Public anon key sent as the `apikey` header on every request.
    pub anon_key: String,
}

impl StoreConfig {
    /// Read the store configuration baked in at compile time.
    ///
    /// # Errors
    ///
    /// Returns an error message when either variable was absent at build
    /// time, so screens can surface a configuration problem instead of
    /// issuing requests that can never succeed.
    pub fn from_env() -> Result<Self, String> {
        let base_url = option_env!("RIDEPOOL_STORE_URL");
        let anon_key = option_env!("RIDEPOOL_STORE_ANON_KEY");
        match (base_url, anon_key) {
            (Some(base_url), Some(anon_key)) if !base_url.is_empty() && !anon_key.is_empty() => {
                Ok(Self {
                    base_url: base_url.trim_end_matches('/').to_owned(),
                    anon_key: anon_key.to_owned(),
                })
            }
            _ => Err("Missing data store environment variables".to_owned()),
        }
    }

    /// URL of a table resource, e.g. `{base}/rest/v1/rides`.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    /// URL of an auth endpoint, e.g. `{base}/auth/v1/logout`.
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }
}
