use std::fmt;

use crate::systems::filesystem::FilterState;
use crate::systems::search::{MatchResult, ResultList, ScanStats, SortKey};

/// Lifecycle of the interactive shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	/// No query, empty result list.
	Idle,
	/// A scan with this id is in flight; earlier results stay on screen.
	Scanning { id: u64 },
	/// Results of the latest scan are shown.
	Displaying,
	/// Terminal state.
	Quit,
}

/// Which widget receives text input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	Query,
	Results,
}

/// Text of the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
	Prompt,
	Scanning { query: String },
	Matches { query: String, count: usize, stats: ScanStats },
	NoMatches { query: String },
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Status::Prompt => f.write_str("Enter pattern to search."),
			Status::Scanning { query } => write!(f, "Searching for '{query}'..."),
			Status::Matches {
				query,
				count,
				stats,
			} => {
				write!(
					f,
					"Pattern '{query}': {count} matches in {}/{} files",
					stats.files_searched, stats.files_visited
				)?;
				if let Some(cap) = stats.truncated_at {
					write!(f, " (truncated to {cap})")?;
				}
				f.write_str(".")
			}
			Status::NoMatches { query } => write!(f, "No matches for: '{query}'"),
		}
	}
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Model {
	pub query: String,
	pub filters: FilterState,
	pub sort: SortKey,
	pub results: ResultList,
	/// Selected row, `None` exactly when `results` is empty.
	pub cursor: Option<usize>,
	pub phase: Phase,
	pub focus: Focus,
	pub status: Status,
	/// Visible table rows at the last render, used as the page size.
	pub viewport_rows: usize,
}

impl Model {
	pub fn new(filters: FilterState, sort: SortKey) -> Self {
		Self {
			query: String::new(),
			filters,
			sort,
			results: ResultList::default(),
			cursor: None,
			phase: Phase::Idle,
			focus: Focus::default(),
			status: Status::Prompt,
			viewport_rows: 1,
		}
	}

	pub fn selected(&self) -> Option<&MatchResult> {
		self.cursor.and_then(|index| self.results.get(index))
	}

	pub fn is_scanning(&self) -> bool {
		matches!(self.phase, Phase::Scanning { .. })
	}

	pub fn page_size(&self) -> usize {
		self.viewport_rows.max(1)
	}

	/// Keep the cursor inside `[0, len)`.
	pub(crate) fn clamp_cursor(&mut self) {
		let len = self.results.len();
		self.cursor = match self.cursor {
			_ if len == 0 => None,
			None => Some(0),
			Some(index) => Some(index.min(len - 1)),
		};
	}
}
