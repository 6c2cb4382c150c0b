use std::path::PathBuf;

use log::LevelFilter;

use crate::systems::filesystem::{FilterState, ScanOptions};
use crate::systems::search::SortKey;
use crate::ui::theme::Theme;

/// Default maximum display columns of a line preview.
pub const DEFAULT_PREVIEW_WIDTH: usize = 120;

/// Everything the interactive session needs, resolved from settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
	/// Canonical, validated search root.
	pub root: PathBuf,
	pub options: ScanOptions,
	/// Initial filter toggles.
	pub filters: FilterState,
	/// Initial sort order.
	pub sort: SortKey,
	pub theme: Theme,
	pub preview_width: usize,
	/// Query typed into the prompt before the first frame.
	pub initial_query: String,
	/// Level shown in the log pane.
	pub log_level: LevelFilter,
}

impl SessionConfig {
	pub fn new(root: PathBuf) -> Self {
		Self {
			root,
			options: ScanOptions::default(),
			filters: FilterState::default(),
			sort: SortKey::default(),
			theme: Theme::default(),
			preview_width: DEFAULT_PREVIEW_WIDTH,
			initial_query: String::new(),
			log_level: LevelFilter::Info,
		}
	}
}
