//! Terminal-independent session logic.
//!
//! [`Shell`] turns [`Command`]s into [`Effect`]s and keeps the [`Model`]
//! that the UI renders. Everything here is synchronous and testable without
//! a terminal or a filesystem.

mod model;
mod state;

pub use model::{Focus, Model, Phase, Status};
pub use state::{Command, Effect, Shell};
