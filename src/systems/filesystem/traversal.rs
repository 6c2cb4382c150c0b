use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::{Walk, WalkBuilder};

use super::binary::sniff_file;
use super::{FilterState, ScanOptions};

/// A regular file that passed the ignore-list and the active filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
	/// Absolute path used for reading.
	pub path: PathBuf,
	/// Root-relative path with `/` separators, used for display and ordering.
	pub relative: String,
}

/// Lazy sequence of candidate files under a root.
///
/// Walk errors (permission denied, vanished entries) are logged and skipped.
/// [`CandidateFiles::visited`] counts every regular file seen, including the
/// ones rejected by the filters.
pub struct CandidateFiles {
	walk: Walk,
	root: PathBuf,
	options: ScanOptions,
	filters: FilterState,
	visited: usize,
}

impl CandidateFiles {
	/// Number of regular files encountered so far.
	pub fn visited(&self) -> usize {
		self.visited
	}

	fn accepts(&self, path: &Path) -> bool {
		if self.filters.script_only && !self.options.is_script(path) {
			return false;
		}
		if !self.filters.include_binary && sniff_file(path, self.options.binary_sniff_bytes) {
			log::debug!("skipping binary file {}", path.display());
			return false;
		}
		true
	}
}

impl Iterator for CandidateFiles {
	type Item = FileCandidate;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let entry = match self.walk.next()? {
				Ok(entry) => entry,
				Err(err) => {
					log::debug!("walk error: {err}");
					continue;
				}
			};

			// Symlinks report their own type here since links are never followed.
			let Some(file_type) = entry.file_type() else {
				continue;
			};
			if !file_type.is_file() {
				continue;
			}

			self.visited += 1;
			let path = entry.path();
			if !self.accepts(path) {
				continue;
			}

			let relative = path.strip_prefix(&self.root).unwrap_or(path);
			let relative = relative.to_string_lossy().replace('\\', "/");
			return Some(FileCandidate {
				path: path.to_path_buf(),
				relative,
			});
		}
	}
}

/// Enumerate the files under `root` that the current filters allow.
pub fn candidate_files(root: &Path, options: &ScanOptions, filters: FilterState) -> CandidateFiles {
	CandidateFiles {
		walk: build_walk(root, options).build(),
		root: root.to_path_buf(),
		options: options.clone(),
		filters,
		visited: 0,
	}
}

/// Build a configured filesystem walker for the given root and options.
pub(crate) fn build_walk(root: &Path, options: &ScanOptions) -> WalkBuilder {
	let ignores = options.ignore_dir_set();
	let mut walker = WalkBuilder::new(root);

	walker
		.standard_filters(false)
		.hidden(!options.include_hidden)
		.follow_links(false)
		.git_ignore(options.respect_gitignore)
		.git_global(options.respect_gitignore)
		.git_exclude(options.respect_gitignore)
		.parents(options.respect_gitignore)
		.sort_by_file_name(|a, b| a.cmp(b));

	if !ignores.is_empty() {
		let ignores = Arc::new(ignores);
		walker.filter_entry(move |entry| {
			let is_dir = entry.file_type().is_some_and(|kind| kind.is_dir());
			!(is_dir && ignores.contains(entry.file_name()))
		});
	}

	walker
}
