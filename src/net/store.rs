//! Query-building wrapper over the REST table store.
//!
//! DESIGN
//! ======
//! The remote store exposes a PostgREST-style surface: one URL per table,
//! filters and projections as query parameters, JSON rows in and out. This
//! module translates method chains into exactly one HTTP request each: no
//! caching, no retries, no idempotency tracking. URL and header assembly are
//! pure functions so the wire format is unit-testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with a message extracted from the error
//! body where possible; screens surface the string directly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::StoreConfig;

/// A single row filter, rendered as a query parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Column equals value: `column=eq.value`.
    Eq(String, String),
    /// Column is one of the values: `column=in.(a,b)`.
    In(String, Vec<String>),
}

impl Filter {
    #[cfg(any(test, feature = "hydrate"))]
    fn render(&self) -> String {
        match self {
            Filter::Eq(column, value) => format!("{column}=eq.{value}"),
            Filter::In(column, values) => format!("{column}=in.({})", values.join(",")),
        }
    }
}

/// Preference for what a write request should return.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Prefer {
    /// Inserted/selected rows come back in the response body.
    Representation,
    /// No body; status code only.
    Minimal,
}

#[cfg(any(test, feature = "hydrate"))]
impl Prefer {
    fn header_value(self) -> &'static str {
        match self {
            Prefer::Representation => "return=representation",
            Prefer::Minimal => "return=minimal",
        }
    }
}

/// Handle to the remote table store.
#[derive(Clone, Debug)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Build a store from compile-time configuration.
    ///
    /// # Errors
    ///
    /// Returns an error message when the store endpoint or anon key was not
    /// baked into the build.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    /// Handle to one table resource.
    pub fn table(&self, name: &str) -> Table {
        Table {
            config: self.config.clone(),
            name: name.to_owned(),
        }
    }
}

/// Handle to one table resource of the store.
#[derive(Clone, Debug)]
pub struct Table {
    config: StoreConfig,
    name: String,
}

impl Table {
    /// Start a read query projecting `columns`.
    ///
    /// The column string passes through verbatim, including embedded-join
    /// syntax such as `*,drivers:driver_id(full_name),vehicle_types(*)`.
    pub fn select(&self, columns: &str) -> SelectQuery {
        SelectQuery {
            config: self.config.clone(),
            table: self.name.clone(),
            columns: columns.to_owned(),
            filters: Vec::new(),
            order_desc: None,
            limit: None,
        }
    }

    /// Insert one row, returning the representation echoed by the server
    /// (JSON null when the server sends no body).
    ///
    /// # Errors
    ///
    /// Returns the server's error message on a non-2xx response, or a
    /// transport error string.
    pub async fn insert(&self, row: &impl Serialize) -> Result<serde_json::Value, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.table_url(&self.name);
            let headers = request_headers(&self.config, stored_token(), Prefer::Representation);
            let request = apply_headers(gloo_net::http::Request::post(&url), &headers)
                .json(row)
                .map_err(|e| e.to_string())?;
            let response = request.send().await.map_err(|e| e.to_string())?;
            let body = response.text().await.map_err(|e| e.to_string())?;
            if !response.ok() {
                log::error!("insert into {} failed: {}", self.name, response.status());
                return Err(error_message(response.status(), &body));
            }
            if body.is_empty() {
                return Ok(serde_json::Value::Null);
            }
            serde_json::from_str(&body).map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = row;
            Err("not available on server".to_owned())
        }
    }

    /// Start an update applying `patch` to every row matching the filters.
    pub fn update(&self, patch: serde_json::Value) -> MutationQuery {
        MutationQuery {
            config: self.config.clone(),
            table: self.name.clone(),
            kind: MutationKind::Update(patch),
            filters: Vec::new(),
        }
    }

    /// Start a delete removing every row matching the filters.
    pub fn delete(&self) -> MutationQuery {
        MutationQuery {
            config: self.config.clone(),
            table: self.name.clone(),
            kind: MutationKind::Delete,
            filters: Vec::new(),
        }
    }
}

/// A chainable read query against one table.
#[derive(Clone, Debug)]
pub struct SelectQuery {
    config: StoreConfig,
    table: String,
    columns: String,
    filters: Vec<Filter>,
    order_desc: Option<String>,
    limit: Option<u32>,
}

impl SelectQuery {
    /// Keep rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push(Filter::Eq(column.to_owned(), value.to_owned()));
        self
    }

    /// Keep rows where `column` is one of `values`.
    #[must_use]
    pub fn in_list(mut self, column: &str, values: &[&str]) -> Self {
        self.filters.push(Filter::In(
            column.to_owned(),
            values.iter().map(|v| (*v).to_owned()).collect(),
        ));
        self
    }

    /// Sort newest-first on `column`.
    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order_desc = Some(column.to_owned());
        self
    }

    /// Execute and deserialize every matching row.
    ///
    /// # Errors
    ///
    /// Returns the server's error message on a non-2xx response, or a
    /// transport/parse error string.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = select_url(&self.config, &self.table, &self.columns, &self.filters, self.order_desc.as_deref(), self.limit);
            let headers = request_headers(&self.config, stored_token(), Prefer::Representation);
            let request = apply_headers(gloo_net::http::Request::get(&url), &headers);
            let response = request.send().await.map_err(|e| e.to_string())?;
            let body = response.text().await.map_err(|e| e.to_string())?;
            if !response.ok() {
                log::error!("select from {} failed: {}", self.table, response.status());
                return Err(error_message(response.status(), &body));
            }
            serde_json::from_str(&body).map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
            Err("not available on server".to_owned())
        }
    }

    /// Execute with `limit=1` and return the first row, if any.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SelectQuery::fetch`].
    pub async fn fetch_single<T: DeserializeOwned>(mut self) -> Result<Option<T>, String> {
        self.limit = Some(1);
        let rows = self.fetch::<T>().await?;
        Ok(rows.into_iter().next())
    }
}

#[derive(Clone, Debug)]
enum MutationKind {
    Update(serde_json::Value),
    Delete,
}

/// A chainable write query (update or delete) against one table.
///
/// Filters are mandatory in practice: the store would otherwise apply the
/// mutation to the whole table, so callers always chain at least one `eq`.
#[derive(Clone, Debug)]
pub struct MutationQuery {
    config: StoreConfig,
    table: String,
    kind: MutationKind,
    filters: Vec<Filter>,
}

impl MutationQuery {
    /// Restrict the mutation to rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push(Filter::Eq(column.to_owned(), value.to_owned()));
        self
    }

    /// Execute the mutation with `Prefer: return=minimal`.
    ///
    /// # Errors
    ///
    /// Returns the server's error message on a non-2xx response, or a
    /// transport error string.
    pub async fn execute(self) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let url = mutation_url(&self.config, &self.table, &self.filters);
            let headers = request_headers(&self.config, stored_token(), Prefer::Minimal);
            let response = match &self.kind {
                MutationKind::Update(patch) => {
                    apply_headers(gloo_net::http::Request::patch(&url), &headers)
                        .json(patch)
                        .map_err(|e| e.to_string())?
                        .send()
                        .await
                }
                MutationKind::Delete => {
                    apply_headers(gloo_net::http::Request::delete(&url), &headers)
                        .build()
                        .map_err(|e| e.to_string())?
                        .send()
                        .await
                }
            };
            let response = response.map_err(|e| e.to_string())?;
            if !response.ok() {
                let body = response.text().await.unwrap_or_default();
                log::error!("mutation on {} failed: {}", self.table, response.status());
                return Err(error_message(response.status(), &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
            Err("not available on server".to_owned())
        }
    }
}

/// Render the URL of a read query.
#[cfg(any(test, feature = "hydrate"))]
fn select_url(
    config: &StoreConfig,
    table: &str,
    columns: &str,
    filters: &[Filter],
    order_desc: Option<&str>,
    limit: Option<u32>,
) -> String {
    let mut url = format!("{}?select={columns}", config.table_url(table));
    for filter in filters {
        url.push('&');
        url.push_str(&filter.render());
    }
    if let Some(column) = order_desc {
        url.push_str(&format!("&order={column}.desc"));
    }
    if let Some(limit) = limit {
        url.push_str(&format!("&limit={limit}"));
    }
    url
}

/// Render the URL of an update/delete, filters only.
#[cfg(any(test, feature = "hydrate"))]
fn mutation_url(config: &StoreConfig, table: &str, filters: &[Filter]) -> String {
    let rendered: Vec<String> = filters.iter().map(Filter::render).collect();
    format!("{}?{}", config.table_url(table), rendered.join("&"))
}

/// Assemble the header set for one request.
///
/// The bearer token rides along only when a cached session token exists and
/// differs from the anon key; the anon key alone never impersonates a user.
#[cfg(any(test, feature = "hydrate"))]
fn request_headers(
    config: &StoreConfig,
    access_token: Option<String>,
    prefer: Prefer,
) -> Vec<(&'static str, String)> {
    let mut headers = vec![
        ("Content-Type", "application/json".to_owned()),
        ("apikey", config.anon_key.clone()),
        ("Prefer", prefer.header_value().to_owned()),
    ];
    if let Some(token) = access_token
        && token != config.anon_key
    {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    headers
}

/// Extract a user-visible message from an error response body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error_description", "msg"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_owned();
            }
        }
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
        {
            return message.to_owned();
        }
    }
    format!("request failed: {status}")
}

#[cfg(feature = "hydrate")]
fn stored_token() -> Option<String> {
    super::auth::stored_access_token()
}

#[cfg(feature = "hydrate")]
fn apply_headers(
    mut request: gloo_net::http::RequestBuilder,
    headers: &[(&'static str, String)],
) -> gloo_net::http::RequestBuilder {
    for (name, value) in headers {
        request = request.header(name, value);
    }
    request
}
