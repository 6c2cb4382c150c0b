//! Directory walking for the scan pipeline.
//!
//! [`candidate_files`] yields the regular files under a root that survive the
//! ignore-list and the runtime [`FilterState`]. Nothing here is cached: each
//! scan builds a fresh walker.

pub mod binary;
mod options;
mod root;
mod traversal;

pub use options::{DEFAULT_MAX_MATCHES, DEFAULT_SNIFF_BYTES, ScanOptions, normalize_extension};
pub use root::{RootError, validate_root};
pub use traversal::{CandidateFiles, FileCandidate, candidate_files};

/// Runtime filter toggles. They persist across queries within one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
	/// Restrict the walk to files with the configured script extension.
	pub script_only: bool,
	/// Search files that the binary heuristic would otherwise skip.
	pub include_binary: bool,
}

impl FilterState {
	pub fn toggle_script_only(&mut self) {
		self.script_only = !self.script_only;
	}

	pub fn toggle_binary(&mut self) {
		self.include_binary = !self.include_binary;
	}
}
