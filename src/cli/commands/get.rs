//! `vezor get` — print a single secret's value by ID.

use crate::cli::output;
use crate::cli::{connect, Cli};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, id: &str, version: Option<i64>) -> Result<()> {
    let client = connect(cli)?;
    let secret = client.get_secret(id, version)?;

    match secret.value {
        Some(value) => println!("{value}"),
        None => output::warning(&format!(
            "secret '{}' (version {}) has no value",
            secret.key_name, secret.version
        )),
    }

    Ok(())
}
