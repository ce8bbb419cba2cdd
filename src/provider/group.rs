//! `vezor_group` — fetch every secret a group's saved query resolves to.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Attribute, AttributeMode, DataSource, Schema};
use crate::client::{Client, Group, GroupSecrets, Tags};
use crate::errors::{Result, VezorError};

static SCHEMA: Schema = Schema {
    description: "Fetches all secrets from a Vezor group. Groups are saved tag queries that match multiple secrets.",
    attributes: &[
        Attribute {
            name: "id",
            description: "The unique identifier of the group.",
            mode: AttributeMode::Computed,
            sensitive: false,
        },
        Attribute {
            name: "name",
            description: "The name of the group to fetch secrets from.",
            mode: AttributeMode::Required,
            sensitive: false,
        },
        Attribute {
            name: "description",
            description: "The description of the group.",
            mode: AttributeMode::Computed,
            sensitive: false,
        },
        Attribute {
            name: "tags",
            description: "The tags that define this group's query.",
            mode: AttributeMode::Computed,
            sensitive: false,
        },
        Attribute {
            name: "secrets",
            description: "A map of secret names to their decrypted values.",
            mode: AttributeMode::Computed,
            sensitive: true,
        },
        Attribute {
            name: "secret_count",
            description: "The number of secrets in this group.",
            mode: AttributeMode::Computed,
            sensitive: false,
        },
    ],
};

/// Input of a `vezor_group` read.
#[derive(Debug, Clone)]
pub struct GroupQuery {
    pub name: String,
}

/// State produced by a `vezor_group` read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupState {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Tags,
    pub secrets: BTreeMap<String, String>,
    pub secret_count: i64,
}

impl GroupState {
    /// Combine group metadata with the pulled secrets. Tags come from the
    /// group itself, the count from the pull.
    pub fn new(group: Group, pulled: GroupSecrets) -> Self {
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            tags: group.tags,
            secrets: pulled.secrets,
            secret_count: pulled.count,
        }
    }
}

pub struct GroupDataSource;

impl DataSource for GroupDataSource {
    type Query = GroupQuery;
    type State = GroupState;

    const TYPE_SUFFIX: &'static str = "_group";

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn read(client: &Client, query: &GroupQuery) -> Result<GroupState> {
        let name = &query.name;

        let group = client.get_group(name).map_err(|e| VezorError::DataSource {
            summary: "Unable to Read Group",
            detail: format!("Unable to read group '{name}': {e}"),
        })?;

        let pulled = client
            .pull_group_secrets(name)
            .map_err(|e| VezorError::DataSource {
                summary: "Unable to Pull Group Secrets",
                detail: format!("Unable to pull secrets for group '{name}': {e}"),
            })?;

        tracing::debug!(group = %group.name, count = pulled.count, "read group");
        Ok(GroupState::new(group, pulled))
    }
}
