//! `vezor secret` — read a secret by name and tags through `vezor_secret`.

use std::collections::BTreeMap;

use crate::cli::output;
use crate::cli::{connect, tags_from, Cli, OutputFormat};
use crate::errors::{Result, VezorError};
use crate::provider::{render_state, DataSource, SecretDataSource, SecretQuery};

/// Execute the `secret` command.
pub fn execute(
    cli: &Cli,
    name: &str,
    tags: &[(String, String)],
    show_value: bool,
    format: OutputFormat,
) -> Result<()> {
    let client = connect(cli)?;

    let query = SecretQuery {
        name: name.to_string(),
        tags: tags_from(tags),
    };
    let state = SecretDataSource::read(&client, &query)?;

    match format {
        OutputFormat::Table => {
            let rendered = render_state::<SecretDataSource>(&state, show_value)?;
            output::print_state(&rendered);
            if !show_value {
                output::tip("Pass --show-value to reveal the secret value.");
            }
        }
        OutputFormat::Json => {
            let rendered = render_state::<SecretDataSource>(&state, show_value)?;
            let json = serde_json::to_string_pretty(&rendered)
                .map_err(|e| VezorError::SerializationError(format!("JSON output: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Env => {
            let single = BTreeMap::from([(state.name, state.value)]);
            print!("{}", output::format_as_env(&single));
        }
    }

    Ok(())
}
