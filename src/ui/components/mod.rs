//! UI building blocks shared across rendering and state modules.

/// Log capture pane.
pub mod logs;
/// Query prompt and progress display.
pub mod prompt;
/// Table row construction and cell formatting.
pub mod rows;
/// Scrollbar for the results viewport.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;
/// Sort and filter indicator line.
pub mod toolbar;

pub use logs::{LOG_PANE_HEIGHT, LogPane};
pub use prompt::{InputContext, ProgressState, render_input};
pub use rows::{MATCH_HEADERS, build_match_rows, match_widths};
pub use scrollbar::render_scrollbar;
pub use tables::{TableSpec, render_table, visible_rows};
pub use toolbar::{render_toolbar, toolbar_text};
