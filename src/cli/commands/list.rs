//! `vezor list` — display secrets matching tag filters in a table.

use crate::cli::output;
use crate::cli::{connect, tags_from, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(
    cli: &Cli,
    tags: &[(String, String)],
    search: Option<&str>,
    limit: u32,
) -> Result<()> {
    let client = connect(cli)?;
    let tags = tags_from(tags);

    let listed = client.list_secrets(&tags, search.unwrap_or_default(), limit)?;

    output::info(&format!(
        "{} secret(s) shown, {} total",
        listed.secrets.len(),
        listed.total
    ));
    output::print_secrets_table(&listed.secrets);

    Ok(())
}
