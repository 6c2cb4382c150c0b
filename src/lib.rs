//! Incremental literal text search over a directory tree.
//!
//! [`systems`] walks, filters and matches files; [`shell`] holds the
//! terminal-independent session state machine; [`ui`] drives it from a
//! ratatui terminal.

pub mod app_dirs;
pub mod logging;
pub mod shell;
pub mod systems;
pub mod ui;

pub use shell::{Command, Effect, Model, Shell};
pub use systems::filesystem::{FilterState, RootError, ScanOptions, validate_root};
pub use systems::search::{MatchResult, ResultList, ScanOutcome, ScanRequest, Scanner, SortKey};
pub use ui::{SessionConfig, run};
