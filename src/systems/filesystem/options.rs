use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Number of leading bytes inspected when deciding whether a file is binary.
pub const DEFAULT_SNIFF_BYTES: usize = 1024;

/// Upper bound on the number of matches a single scan collects.
pub const DEFAULT_MAX_MATCHES: usize = 1000;

/// Configuration options for filesystem scanning and filtering.
#[derive(Debug, Clone)]
pub struct ScanOptions {
	/// Directory base names that are never descended into.
	pub ignore_dirs: Vec<String>,
	/// Extension accepted by the script-only filter, without a leading dot.
	pub script_extension: String,
	/// Stop collecting after this many matches. `None` means unlimited.
	pub max_matches: Option<usize>,
	/// Bytes read from the head of each file by the binary heuristic.
	pub binary_sniff_bytes: usize,
	/// Include hidden files and directories.
	pub include_hidden: bool,
	/// Respect `.gitignore`, `.git/info/exclude` and the global git excludes.
	pub respect_gitignore: bool,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self {
			ignore_dirs: vec![
				".git".to_string(),
				".hg".to_string(),
				".svn".to_string(),
				".venv".to_string(),
				".mypy_cache".to_string(),
				"__pycache__".to_string(),
				".ipynb_checkpoints".to_string(),
				"node_modules".to_string(),
			],
			script_extension: "py".to_string(),
			max_matches: Some(DEFAULT_MAX_MATCHES),
			binary_sniff_bytes: DEFAULT_SNIFF_BYTES,
			include_hidden: true,
			respect_gitignore: false,
		}
	}
}

impl ScanOptions {
	/// Create a set of directory names to skip during traversal.
	pub fn ignore_dir_set(&self) -> HashSet<OsString> {
		self.ignore_dirs
			.iter()
			.map(|entry| entry.trim())
			.filter(|entry| !entry.is_empty())
			.map(OsString::from)
			.collect()
	}

	/// Whether `path` carries the configured script extension.
	pub fn is_script(&self, path: &Path) -> bool {
		let wanted = normalize_extension(&self.script_extension);
		path.extension()
			.and_then(OsStr::to_str)
			.is_some_and(|ext| ext.eq_ignore_ascii_case(&wanted))
	}
}

/// Normalize an extension by trimming and removing leading dots.
pub fn normalize_extension(ext: &str) -> String {
	ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
