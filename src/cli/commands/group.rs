//! `vezor group` — read a group and its secrets through `vezor_group`.

use crate::cli::output;
use crate::cli::{connect, Cli, OutputFormat};
use crate::errors::{Result, VezorError};
use crate::provider::{render_state, DataSource, GroupDataSource, GroupQuery};

/// Execute the `group` command.
pub fn execute(cli: &Cli, name: &str, show_values: bool, format: OutputFormat) -> Result<()> {
    let client = connect(cli)?;

    let query = GroupQuery {
        name: name.to_string(),
    };
    let state = GroupDataSource::read(&client, &query)?;

    match format {
        OutputFormat::Table => {
            output::info(&format!(
                "group '{}' — {} secret(s)",
                state.name, state.secret_count
            ));
            let rendered = render_state::<GroupDataSource>(&state, show_values)?;
            output::print_state(&rendered);
            if !show_values {
                output::tip("Pass --show-values to reveal secret values.");
            }
        }
        OutputFormat::Json => {
            let rendered = render_state::<GroupDataSource>(&state, show_values)?;
            let json = serde_json::to_string_pretty(&rendered)
                .map_err(|e| VezorError::SerializationError(format!("JSON output: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Env => {
            print!("{}", output::format_as_env(&state.secrets));
        }
    }

    Ok(())
}
