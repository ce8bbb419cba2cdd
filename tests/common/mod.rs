//! Shared helpers for tests that run the blocking client against a
//! `wiremock` server.

#![allow(dead_code)]

use serde_json::{json, Value};
use vezor::client::Client;
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

/// Run blocking client code off the async test runtime.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> Client {
    Client::new(&server.uri(), API_KEY)
}

/// A secret as the list endpoint returns it (no value).
pub fn listed_secret(id: &str, key_name: &str, tags: Value) -> Value {
    json!({
        "id": id,
        "key_name": key_name,
        "tags": tags,
        "version": 1,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    })
}

/// A secret as the get endpoint returns it (value included).
pub fn full_secret(id: &str, key_name: &str, value: &str, tags: Value) -> Value {
    let mut secret = listed_secret(id, key_name, tags);
    secret["value"] = json!(value);
    secret["description"] = json!(format!("{key_name} for tests"));
    secret
}
