//! Interactive terminal UI.
//!
//! Contains the application state around the shell, the event loop, the
//! rendering pipeline and the reusable widgets and themes.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod theme;

pub use app::App;
pub use config::{DEFAULT_PREVIEW_WIDTH, SessionConfig};
pub use input::QueryInput;
pub use runtime::run;
pub use theme::Theme;
