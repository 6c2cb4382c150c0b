use crate::systems::filesystem::FilterState;
use crate::systems::search::{ScanOutcome, ScanRequest, SortKey};

use super::model::{Focus, Model, Phase, Status};

/// User intents, already decoded from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	SetQuery(String),
	FocusSearch,
	FocusResults,
	Sort(SortKey),
	ToggleScriptOnly,
	ToggleBinary,
	Up,
	Down,
	PageUp,
	PageDown,
	Top,
	Bottom,
	Quit,
}

/// Work the runtime must perform after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	None,
	/// Start a scan; any scan with a lower id is now stale.
	Scan(ScanRequest),
	/// Mark every in-flight scan stale without starting a new one.
	CancelScan { id: u64 },
	Quit,
}

/// The shell state machine.
///
/// Owns the [`Model`] and hands out monotonically increasing request ids.
/// It never touches the filesystem: scans are requested through [`Effect`]
/// and fed back through [`Shell::complete`].
#[derive(Debug, Clone)]
pub struct Shell {
	model: Model,
	next_id: u64,
}

impl Shell {
	pub fn new(filters: FilterState, sort: SortKey) -> Self {
		Self {
			model: Model::new(filters, sort),
			next_id: 0,
		}
	}

	pub fn model(&self) -> &Model {
		&self.model
	}

	pub fn is_quit(&self) -> bool {
		self.model.phase == Phase::Quit
	}

	pub fn set_viewport_rows(&mut self, rows: usize) {
		self.model.viewport_rows = rows.max(1);
	}

	pub fn apply(&mut self, command: Command) -> Effect {
		if self.is_quit() {
			return Effect::None;
		}

		match command {
			Command::SetQuery(query) => self.set_query(query),
			Command::FocusSearch => {
				self.model.focus = Focus::Query;
				Effect::None
			}
			Command::FocusResults => {
				self.model.focus = Focus::Results;
				Effect::None
			}
			Command::Sort(key) => {
				self.resort(key);
				Effect::None
			}
			Command::ToggleScriptOnly => {
				self.model.filters.toggle_script_only();
				self.rescan()
			}
			Command::ToggleBinary => {
				self.model.filters.toggle_binary();
				self.rescan()
			}
			Command::Up => self.move_cursor(|index, _, _| index.saturating_sub(1)),
			Command::Down => self.move_cursor(|index, last, _| (index + 1).min(last)),
			Command::PageUp => self.move_cursor(|index, _, page| index.saturating_sub(page)),
			Command::PageDown => self.move_cursor(|index, last, page| (index + page).min(last)),
			Command::Top => self.move_cursor(|_, _, _| 0),
			Command::Bottom => self.move_cursor(|_, last, _| last),
			Command::Quit => {
				self.model.phase = Phase::Quit;
				Effect::Quit
			}
		}
	}

	/// Apply a finished scan. Returns `false` when the outcome belongs to a
	/// request that has since been superseded.
	pub fn complete(&mut self, outcome: ScanOutcome) -> bool {
		if self.model.phase != (Phase::Scanning { id: outcome.id }) {
			log::debug!("discarding stale scan {}", outcome.id);
			return false;
		}

		let mut results = outcome.results;
		if outcome.sort != self.model.sort {
			results.sort(self.model.sort);
		}
		self.model.results = results;
		self.model.cursor = None;
		self.model.clamp_cursor();
		self.model.phase = Phase::Displaying;
		self.model.status = if self.model.results.is_empty() {
			Status::NoMatches {
				query: outcome.query,
			}
		} else {
			Status::Matches {
				query: outcome.query,
				count: self.model.results.len(),
				stats: outcome.stats,
			}
		};
		true
	}

	fn set_query(&mut self, query: String) -> Effect {
		if query == self.model.query {
			return Effect::None;
		}
		self.model.query = query;
		if !self.model.query.is_empty() {
			return self.start_scan();
		}

		let was_scanning = self.model.is_scanning();
		self.model.results = Default::default();
		self.model.cursor = None;
		self.model.phase = Phase::Idle;
		self.model.status = Status::Prompt;
		if was_scanning {
			Effect::CancelScan { id: self.allocate_id() }
		} else {
			Effect::None
		}
	}

	fn rescan(&mut self) -> Effect {
		if self.model.query.is_empty() {
			Effect::None
		} else {
			self.start_scan()
		}
	}

	fn start_scan(&mut self) -> Effect {
		let id = self.allocate_id();
		self.model.phase = Phase::Scanning { id };
		self.model.status = Status::Scanning {
			query: self.model.query.clone(),
		};
		Effect::Scan(ScanRequest {
			id,
			query: self.model.query.clone(),
			filters: self.model.filters,
			sort: self.model.sort,
		})
	}

	/// Reorder in place, keeping the selected match selected.
	fn resort(&mut self, key: SortKey) {
		if key == self.model.sort {
			return;
		}
		let selected = self
			.model
			.selected()
			.map(|entry| (entry.relative.clone(), entry.line_number));
		self.model.sort = key;
		self.model.results.sort(key);
		self.model.cursor = selected
			.and_then(|(relative, line)| self.model.results.position_of(&relative, line));
		self.model.clamp_cursor();
	}

	fn move_cursor(&mut self, step: impl FnOnce(usize, usize, usize) -> usize) -> Effect {
		if let Some(index) = self.model.cursor {
			let last = self.model.results.len().saturating_sub(1);
			self.model.cursor = Some(step(index, last, self.model.page_size()));
			self.model.clamp_cursor();
		}
		Effect::None
	}

	fn allocate_id(&mut self) -> u64 {
		self.next_id += 1;
		self.next_id
	}
}
