//! Configuration — the optional `.vezor.toml` settings file.

pub mod settings;

pub use settings::Settings;
