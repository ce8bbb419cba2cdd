//! `vezor version` — display version and the registered data sources.

use console::style;

use crate::errors::Result;
use crate::provider::Provider;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    let provider = Provider::new(env!("CARGO_PKG_VERSION"));
    println!("vezor {}", provider.version());

    println!("\n{}", style("Data sources:").bold());
    for (name, schema) in provider.data_sources() {
        println!("  {}  {}", style(name).cyan(), style(schema.description).dim());
    }

    Ok(())
}
