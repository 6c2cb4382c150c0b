//! Configuration loading and resolution.
//!
//! Layers, lowest precedence first: built-in defaults, the user and
//! working-directory config files, files passed with `--config`, the
//! `SCOPEFIND__` environment, then command-line flags. [`load`] merges them
//! and returns a validated [`ResolvedConfig`].

mod errors;
mod loader;
mod raw;
mod resolved;
mod sources;

pub use errors::SettingsError;
pub use loader::load;
pub use resolved::ResolvedConfig;
