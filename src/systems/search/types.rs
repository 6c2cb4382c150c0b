use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::SystemTime;

use thiserror::Error;

use super::sort::sort_matches;
use crate::systems::filesystem::FilterState;

/// Ordering applied to the result list. Never affects the match set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
	/// Root-relative path, ascending.
	#[default]
	Name,
	/// Last-modified time, most recent first.
	Modified,
	/// File size, largest first.
	Size,
}

impl SortKey {
	pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Modified, SortKey::Size];

	/// Short label shown in the toolbar.
	pub fn label(self) -> &'static str {
		match self {
			SortKey::Name => "NAME",
			SortKey::Modified => "DATE",
			SortKey::Size => "SIZE",
		}
	}

	/// Name used in configuration files and on the command line.
	pub fn as_str(self) -> &'static str {
		match self {
			SortKey::Name => "name",
			SortKey::Modified => "date",
			SortKey::Size => "size",
		}
	}
}

impl fmt::Display for SortKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key '{0}' (expected name, date or size)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
	type Err = UnknownSortKey;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"name" | "path" => Ok(SortKey::Name),
			"date" | "mtime" | "modified" => Ok(SortKey::Modified),
			"size" => Ok(SortKey::Size),
			_ => Err(UnknownSortKey(value.to_string())),
		}
	}
}

/// One matching line, with the file metadata captured when it was scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
	/// Absolute path of the owning file.
	pub path: PathBuf,
	/// Root-relative path with `/` separators.
	pub relative: String,
	/// 1-based line number.
	pub line_number: usize,
	/// Full decoded line without its terminator.
	pub line: String,
	pub modified: SystemTime,
	pub size: u64,
}

/// Ordered matches of one scan. Replaced wholesale on every rescan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultList {
	entries: Vec<MatchResult>,
}

impl ResultList {
	pub fn new(entries: Vec<MatchResult>) -> Self {
		Self { entries }
	}

	/// Build a list already ordered by `key`.
	pub fn sorted(mut entries: Vec<MatchResult>, key: SortKey) -> Self {
		sort_matches(&mut entries, key);
		Self { entries }
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&MatchResult> {
		self.entries.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
		self.entries.iter()
	}

	pub fn as_slice(&self) -> &[MatchResult] {
		&self.entries
	}

	/// Reorder in place.
	pub fn sort(&mut self, key: SortKey) {
		sort_matches(&mut self.entries, key);
	}

	/// Index of the entry for `relative` at `line_number`, if present.
	pub fn position_of(&self, relative: &str, line_number: usize) -> Option<usize> {
		self.entries
			.iter()
			.position(|entry| entry.relative == relative && entry.line_number == line_number)
	}
}

impl<'a> IntoIterator for &'a ResultList {
	type Item = &'a MatchResult;
	type IntoIter = std::slice::Iter<'a, MatchResult>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

/// A rescan request as issued by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
	/// Identifier that allows the UI to correlate responses with the originating request.
	pub id: u64,
	pub query: String,
	pub filters: FilterState,
	pub sort: SortKey,
}

/// Counters gathered during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
	/// Regular files seen by the walker.
	pub files_visited: usize,
	/// Files that passed the filters and were read.
	pub files_searched: usize,
	/// Set to the cap when the scan stopped early at the match limit.
	pub truncated_at: Option<usize>,
}

/// Completed scan, delivered whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
	pub id: u64,
	pub query: String,
	pub filters: FilterState,
	/// Ordering the results were produced in.
	pub sort: SortKey,
	pub results: ResultList,
	pub stats: ScanStats,
}
