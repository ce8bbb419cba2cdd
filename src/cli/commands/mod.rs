//! One module per subcommand; each exposes an `execute` function.

pub mod completions;
pub mod get;
pub mod group;
pub mod list;
pub mod secret;
pub mod version;
