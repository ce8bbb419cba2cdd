//! Client module — authenticated, blocking access to the Vezor REST API.
//!
//! This module provides:
//! - Wire types for secrets, groups and group pulls (`types`)
//! - `Client`, which issues one HTTP call per operation and decodes the
//!   JSON response
//!
//! Nothing here retries, caches or logs errors: every failure is returned
//! to the caller as a `VezorError`.

pub mod types;

use std::time::Duration;

use serde::de::DeserializeOwned;
use ureq::Agent;
use zeroize::Zeroizing;

use crate::errors::{Result, VezorError};

pub use types::{Group, GroupSecrets, Secret, SecretList, Tags};
use types::ErrorResponse;

/// Per-request timeout applied to every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Page size `find_secret` asks the list endpoint for.
pub const FIND_SECRET_LIMIT: u32 = 100;

/// Blocking client for the Vezor API.
///
/// Each instance owns its own connection agent; instances share no state.
pub struct Client {
    base_url: String,
    api_key: Zeroizing<String>,
    agent: Agent,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Client {
    /// Create a client for `base_url` (trailing slashes are stripped)
    /// authenticating with `api_key`.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: Zeroizing::new(api_key.to_string()),
            agent: Agent::new_with_config(config),
        }
    }

    /// The normalized base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a secret by ID, optionally pinned to a specific version.
    pub fn get_secret(&self, secret_id: &str, version: Option<i64>) -> Result<Secret> {
        let path = format!("/api/v1/secrets/{}", urlencoding::encode(secret_id));
        let mut params = Vec::new();
        if let Some(v) = version {
            params.push(("version".to_string(), v.to_string()));
        }

        let body = self.get(&path, &params)?;
        decode(&body, "secret")
    }

    /// List secrets matching every tag in `tags`.
    ///
    /// `search` is sent only when non-empty and `limit` only when positive;
    /// the server applies both.
    pub fn list_secrets(&self, tags: &Tags, search: &str, limit: u32) -> Result<SecretList> {
        let params = list_params(tags, search, limit);
        let body = self.get("/api/v1/secrets", &params)?;
        decode(&body, "secrets list")
    }

    /// Find a secret by name and tags, returning the value-populated record.
    ///
    /// The first listed secret whose key name matches `name` (ignoring case)
    /// and whose tags contain every pair in `tags` wins.
    pub fn find_secret(&self, name: &str, tags: &Tags) -> Result<Secret> {
        let listed = self.list_secrets(tags, name, FIND_SECRET_LIMIT)?;

        let wanted = name.to_lowercase();
        let found = listed
            .secrets
            .iter()
            .find(|s| s.key_name.to_lowercase() == wanted && tags_match(&s.tags, tags));

        match found {
            // The list endpoint does not include decrypted values.
            Some(candidate) => self.get_secret(&candidate.id, None),
            None => Err(VezorError::SecretNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Fetch a group's metadata by name.
    pub fn get_group(&self, name: &str) -> Result<Group> {
        let path = format!("/api/v1/groups/{}", urlencoding::encode(name));
        let body = self.get(&path, &[])?;
        decode(&body, "group")
    }

    /// Pull the decrypted secrets a group's saved query resolves to.
    pub fn pull_group_secrets(&self, name: &str) -> Result<GroupSecrets> {
        let path = format!("/api/v1/groups/{}/secrets", urlencoding::encode(name));
        let params = [("format".to_string(), "json".to_string())];
        let body = self.get(&path, &params)?;
        decode(&body, "group secrets")
    }

    /// Issue an authenticated GET and return the raw body of a successful response.
    fn get(&self, path: &str, params: &[(String, String)]) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "GET", %url, params = params.len(), "sending request");

        let mut request = self
            .agent
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.as_str()))
            .header("Content-Type", "application/json");
        for (key, value) in params {
            request = request.query(key, value);
        }

        let mut response = request.call()?;
        let status = response.status().as_u16();
        // Bytes, not text: a non-UTF-8 body is still a response, not a transport failure.
        let body = response.body_mut().read_to_vec()?;
        tracing::debug!(%url, status, bytes = body.len(), "received response");

        if status >= 400 {
            return Err(api_error(status, &body));
        }

        Ok(body)
    }
}

/// Query parameters for the list endpoint.
///
/// Tags go first; a non-empty `search` or positive `limit` replaces any tag
/// with the same key so each key is sent once.
fn list_params(tags: &Tags, search: &str, limit: u32) -> Vec<(String, String)> {
    let mut params = tags.clone();
    if !search.is_empty() {
        params.insert("search".to_string(), search.to_string());
    }
    if limit > 0 {
        params.insert("limit".to_string(), limit.to_string());
    }
    params.into_iter().collect()
}

/// Decode a response body, naming the response kind on failure.
fn decode<T: DeserializeOwned>(body: &[u8], what: &'static str) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| VezorError::Decode { what, source })
}

/// Build an API error: the JSON `error` field when usable, else the raw body.
fn api_error(status: u16, body: &[u8]) -> VezorError {
    let message = match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => String::from_utf8_lossy(body).into_owned(),
    };
    VezorError::Api { status, message }
}

/// Whether `candidate` carries every tag in `required` with an identical value.
///
/// Extra tags on the candidate are allowed. Keys and values compare
/// case-sensitively.
pub fn tags_match(candidate: &Tags, required: &Tags) -> bool {
    required
        .iter()
        .all(|(key, value)| candidate.get(key) == Some(value))
}
