//! Wire types returned by the Vezor API.
//!
//! Every type is an immutable snapshot of one response.  Optional fields
//! (`description`, `value`, tag maps, versions, counts and timestamps)
//! decode to empty defaults when the
//! server omits them or sends `null`.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Tag map attached to secrets and groups.
pub type Tags = BTreeMap<String, String>;

/// A single secret as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub id: String,

    /// The logical secret name (e.g. "DATABASE_URL").
    pub key_name: String,

    /// Decrypted payload. Only present when the secret is fetched by ID;
    /// list responses leave it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Tags,

    #[serde(default, deserialize_with = "null_as_default")]
    pub version: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Secret {
    /// Parse `updated_at` as an RFC 3339 timestamp, if it is one.
    pub fn updated(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.updated_at).ok()
    }
}

/// A group: a named, server-side tag query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// The tags that define this group's query.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Tags,

    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// The materialized result of evaluating a group's query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSecrets {
    pub group: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Tags,

    /// Secret key name → decrypted value.
    #[serde(default, deserialize_with = "null_as_default")]
    pub secrets: BTreeMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i64,
}

/// Response body of `GET /api/v1/secrets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub secrets: Vec<Secret>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
}

/// Error body the API sends alongside a failing status code.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error: String,
}

// ── Serde helpers ────────────────────────────────────────────────────

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
