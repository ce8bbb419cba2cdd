//! `vezor_secret` — fetch a single secret by name and tags.

use serde::Serialize;

use super::{Attribute, AttributeMode, DataSource, Schema};
use crate::client::{Client, Secret, Tags};
use crate::errors::{Result, VezorError};

static SCHEMA: Schema = Schema {
    description: "Fetches a single secret from Vezor by name and tags.",
    attributes: &[
        Attribute {
            name: "id",
            description: "The unique identifier of the secret.",
            mode: AttributeMode::Computed,
            sensitive: false,
        },
        Attribute {
            name: "name",
            description: "The name (key) of the secret to fetch.",
            mode: AttributeMode::Required,
            sensitive: false,
        },
        Attribute {
            name: "value",
            description: "The decrypted value of the secret.",
            mode: AttributeMode::Computed,
            sensitive: true,
        },
        Attribute {
            name: "description",
            description: "The description of the secret.",
            mode: AttributeMode::Computed,
            sensitive: false,
        },
        Attribute {
            name: "tags",
            description: "Tags to filter the secret. At minimum, 'env' and 'app' are typically required.",
            mode: AttributeMode::Required,
            sensitive: false,
        },
        Attribute {
            name: "version",
            description: "The version number of the secret.",
            mode: AttributeMode::Computed,
            sensitive: false,
        },
    ],
};

/// Input of a `vezor_secret` read.
#[derive(Debug, Clone)]
pub struct SecretQuery {
    pub name: String,
    pub tags: Tags,
}

/// State produced by a `vezor_secret` read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretState {
    pub id: String,
    pub name: String,
    pub value: String,
    pub description: String,
    pub tags: Tags,
    pub version: i64,
}

impl From<Secret> for SecretState {
    fn from(secret: Secret) -> Self {
        Self {
            id: secret.id,
            name: secret.key_name,
            value: secret.value.unwrap_or_default(),
            description: secret.description,
            tags: secret.tags,
            version: secret.version,
        }
    }
}

pub struct SecretDataSource;

impl DataSource for SecretDataSource {
    type Query = SecretQuery;
    type State = SecretState;

    const TYPE_SUFFIX: &'static str = "_secret";

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn read(client: &Client, query: &SecretQuery) -> Result<SecretState> {
        let secret =
            client
                .find_secret(&query.name, &query.tags)
                .map_err(|e| VezorError::DataSource {
                    summary: "Unable to Read Secret",
                    detail: format!("Unable to read secret '{}': {e}", query.name),
                })?;

        tracing::debug!(id = %secret.id, version = secret.version, "read secret");
        Ok(SecretState::from(secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_takes_canonical_name_from_api() {
        let secret = Secret {
            id: "sec_1".into(),
            key_name: "DB_URL".into(),
            value: Some("postgres://db".into()),
            description: "primary".into(),
            tags: Tags::from([("env".to_string(), "prod".to_string())]),
            version: 4,
            created_at: String::new(),
            updated_at: String::new(),
        };

        let state = SecretState::from(secret);
        assert_eq!(state.name, "DB_URL");
        assert_eq!(state.value, "postgres://db");
        assert_eq!(state.version, 4);
        assert_eq!(state.tags["env"], "prod");
    }

    #[test]
    fn state_with_missing_value_is_empty() {
        let secret = Secret {
            id: "sec_1".into(),
            key_name: "K".into(),
            value: None,
            description: String::new(),
            tags: Tags::new(),
            version: 1,
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(SecretState::from(secret).value, "");
    }

    #[test]
    fn schema_requires_name_and_tags() {
        let schema = SecretDataSource::schema();
        assert_eq!(
            schema.attribute("name").map(|a| a.mode),
            Some(AttributeMode::Required)
        );
        assert_eq!(
            schema.attribute("tags").map(|a| a.mode),
            Some(AttributeMode::Required)
        );
        assert_eq!(SecretDataSource::type_name("vezor"), "vezor_secret");
    }
}
