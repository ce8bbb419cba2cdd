//! Provider module — configuration resolution and the read-only data sources.
//!
//! This module provides:
//! - `ProviderConfig`, resolved explicit > environment > default into a
//!   configured `Client`
//! - The `DataSource` trait with its attribute `Schema`
//! - `vezor_secret` (`secret`) and `vezor_group` (`group`) data sources

pub mod group;
pub mod secret;

use serde::Serialize;
use serde_json::Value;
use zeroize::Zeroizing;

use crate::client::Client;
use crate::errors::{Result, VezorError};

pub use group::{GroupDataSource, GroupQuery, GroupState};
pub use secret::{SecretDataSource, SecretQuery, SecretState};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "VEZOR_API_KEY";

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "VEZOR_API_URL";

/// Production endpoint used when no URL is configured.
pub const DEFAULT_API_URL: &str = "https://api.vezor.io";

/// Placeholder rendered in place of sensitive attribute values.
pub const REDACTED: &str = "(sensitive value)";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Explicit provider configuration. `None` means "not set here".
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

/// Fully resolved connection settings.
pub struct ResolvedConfig {
    pub api_url: String,
    pub api_key: Zeroizing<String>,
}

impl ProviderConfig {
    /// Resolve against the process environment.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with precedence explicit > environment > default.
    ///
    /// An explicitly set key wins even when empty; an empty environment URL
    /// is ignored. Resolution fails when no non-empty API key remains.
    pub fn resolve_with<F>(&self, env: F) -> Result<ResolvedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = match &self.api_key {
            Some(key) => key.clone(),
            None => env(API_KEY_ENV).unwrap_or_default(),
        };
        if api_key.is_empty() {
            return Err(VezorError::MissingApiKey);
        }

        let api_url = match &self.api_url {
            Some(url) => url.clone(),
            None => env(API_URL_ENV)
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        };

        Ok(ResolvedConfig {
            api_url,
            api_key: Zeroizing::new(api_key),
        })
    }
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// The Vezor provider: metadata plus client construction.
#[derive(Debug, Clone)]
pub struct Provider {
    version: String,
}

impl Provider {
    /// Provider type name; data source names are prefixed with it.
    pub const TYPE_NAME: &'static str = "vezor";

    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Resolve `config` and build a client for the data sources to share.
    pub fn configure(&self, config: &ProviderConfig) -> Result<Client> {
        let resolved = config.resolve()?;
        tracing::debug!(api_url = %resolved.api_url, "configured provider");
        Ok(Client::new(&resolved.api_url, &resolved.api_key))
    }

    /// Type names and schemas of every registered data source.
    pub fn data_sources(&self) -> Vec<(String, &'static Schema)> {
        vec![
            (
                SecretDataSource::type_name(Self::TYPE_NAME),
                SecretDataSource::schema(),
            ),
            (
                GroupDataSource::type_name(Self::TYPE_NAME),
                GroupDataSource::schema(),
            ),
        ]
    }
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

/// How an attribute gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// Supplied by the caller.
    Required,
    /// Filled in from the API response.
    Computed,
}

/// One attribute of a data source.
#[derive(Debug, Clone, Copy)]
pub struct Attribute {
    pub name: &'static str,
    pub description: &'static str,
    pub mode: AttributeMode,
    pub sensitive: bool,
}

/// Attribute schema of a data source.
#[derive(Debug)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: &'static [Attribute],
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Names of the attributes that must never be displayed by default.
    pub fn sensitive_attributes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes
            .iter()
            .filter(|a| a.sensitive)
            .map(|a| a.name)
    }
}

/// A read-only data source: turns a query into a state snapshot.
pub trait DataSource {
    type Query;
    type State: Serialize;

    /// Appended to the provider type name, e.g. `_secret`.
    const TYPE_SUFFIX: &'static str;

    fn schema() -> &'static Schema;

    fn read(client: &Client, query: &Self::Query) -> Result<Self::State>;

    fn type_name(provider_type: &str) -> String {
        format!("{provider_type}{}", Self::TYPE_SUFFIX)
    }
}

/// Serialize `state` to JSON, replacing sensitive attributes with a
/// placeholder unless `show_sensitive` is set.
pub fn render_state<D: DataSource>(state: &D::State, show_sensitive: bool) -> Result<Value> {
    let mut value = serde_json::to_value(state)
        .map_err(|e| VezorError::SerializationError(format!("state: {e}")))?;

    if !show_sensitive {
        if let Value::Object(fields) = &mut value {
            for name in D::schema().sensitive_attributes() {
                if let Some(field) = fields.get_mut(name) {
                    *field = Value::String(REDACTED.to_string());
                }
            }
        }
    }

    Ok(value)
}
