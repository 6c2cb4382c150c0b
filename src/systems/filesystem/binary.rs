//! Null-byte sniffing used to keep binary files out of the line matcher.
//!
//! A file is classified as binary when its first `limit` bytes contain a NUL
//! byte. Empty files are text. Files that cannot be opened are reported as
//! binary so the default filter skips them without a second error path.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Check whether a prefix of file content looks binary.
pub fn is_binary(bytes: &[u8]) -> bool {
	bytes.contains(&0)
}

/// Read up to `limit` bytes from `path` and apply [`is_binary`].
pub fn sniff_file(path: &Path, limit: usize) -> bool {
	match read_prefix(path, limit) {
		Ok(prefix) => is_binary(&prefix),
		Err(err) => {
			log::debug!("treating {} as binary: {err}", path.display());
			true
		}
	}
}

fn read_prefix(path: &Path, limit: usize) -> io::Result<Vec<u8>> {
	let file = File::open(path)?;
	let mut prefix = Vec::with_capacity(limit.min(8192));
	file.take(limit as u64).read_to_end(&mut prefix)?;
	Ok(prefix)
}
