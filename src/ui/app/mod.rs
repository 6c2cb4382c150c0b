//! Application state and behavior for the interactive session.
//!
//! [`App`] wraps the [`Shell`](crate::shell::Shell) with the widgets and the
//! worker channel. Supporting modules split input handling, rendering and
//! search coordination.

mod actions;
mod render;
mod search;
mod state;

pub use state::App;
