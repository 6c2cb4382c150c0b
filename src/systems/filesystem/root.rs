use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reasons a search root is rejected at startup.
#[derive(Debug, Error)]
pub enum RootError {
	/// The path does not exist or cannot be resolved.
	#[error("search root {path} does not exist: {source}")]
	Missing {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	/// The path exists but is not a directory.
	#[error("search root {path} is not a directory")]
	NotDirectory { path: PathBuf },
	/// The directory exists but cannot be listed.
	#[error("search root {path} is not readable: {source}")]
	Unreadable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Canonicalize `root` and confirm it is a listable directory.
pub fn validate_root(root: &Path) -> Result<PathBuf, RootError> {
	let resolved = fs::canonicalize(root).map_err(|source| RootError::Missing {
		path: root.to_path_buf(),
		source,
	})?;

	if !resolved.is_dir() {
		return Err(RootError::NotDirectory { path: resolved });
	}

	if let Err(source) = fs::read_dir(&resolved) {
		return Err(RootError::Unreadable {
			path: resolved,
			source,
		});
	}

	Ok(resolved)
}
