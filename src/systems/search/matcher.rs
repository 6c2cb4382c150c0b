//! Literal, case-sensitive line matching.
//!
//! Lines are split on `\n` with a trailing `\r` removed and decoded as UTF-8,
//! replacing invalid sequences with U+FFFD, so no file is rejected for its
//! encoding. Only files that cannot be opened or read are skipped.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::ops::ControlFlow;
use std::path::Path;
use std::time::SystemTime;

use super::types::MatchResult;
use crate::systems::filesystem::FileCandidate;

/// Lines read between two checks of the cancellation flag.
pub const CANCEL_CHECK_LINES: usize = 4096;

/// Call `on_match` with the 1-based number and text of every line containing `query`.
///
/// Stops early once `is_cancelled` returns true. It is polled every
/// [`CANCEL_CHECK_LINES`] lines.
pub fn scan_lines<R, C, F>(
	mut reader: R,
	query: &str,
	is_cancelled: C,
	mut on_match: F,
) -> io::Result<()>
where
	R: BufRead,
	C: Fn() -> bool,
	F: FnMut(usize, String) -> ControlFlow<()>,
{
	let mut buffer = Vec::new();
	let mut line_number = 0;

	loop {
		buffer.clear();
		if reader.read_until(b'\n', &mut buffer)? == 0 {
			return Ok(());
		}
		line_number += 1;
		if line_number % CANCEL_CHECK_LINES == 0 && is_cancelled() {
			return Ok(());
		}

		if buffer.last() == Some(&b'\n') {
			buffer.pop();
		}
		if buffer.last() == Some(&b'\r') {
			buffer.pop();
		}

		let line = String::from_utf8_lossy(&buffer);
		if line.contains(query) && on_match(line_number, line.into_owned()).is_break() {
			return Ok(());
		}
	}
}

/// Collect up to `limit` matches of `query` in `candidate`.
///
/// File metadata is read once, when the first match is found. A cancelled
/// read returns what was found so far; the caller discards it.
pub fn match_file<C>(
	candidate: &FileCandidate,
	query: &str,
	limit: Option<usize>,
	is_cancelled: C,
) -> io::Result<Vec<MatchResult>>
where
	C: Fn() -> bool,
{
	if query.is_empty() || limit == Some(0) {
		return Ok(Vec::new());
	}

	let reader = BufReader::new(File::open(&candidate.path)?);
	let mut matches = Vec::new();
	let mut metadata = None;
	let mut metadata_error = None;

	scan_lines(reader, query, is_cancelled, |line_number, line| {
		let (modified, size) = match metadata {
			Some(found) => found,
			None => match file_stamp(&candidate.path) {
				Ok(found) => {
					metadata = Some(found);
					found
				}
				Err(err) => {
					metadata_error = Some(err);
					return ControlFlow::Break(());
				}
			},
		};

		matches.push(MatchResult {
			path: candidate.path.clone(),
			relative: candidate.relative.clone(),
			line_number,
			line,
			modified,
			size,
		});

		if limit.is_some_and(|limit| matches.len() >= limit) {
			ControlFlow::Break(())
		} else {
			ControlFlow::Continue(())
		}
	})?;

	match metadata_error {
		Some(err) => Err(err),
		None => Ok(matches),
	}
}

fn file_stamp(path: &Path) -> io::Result<(SystemTime, u64)> {
	let metadata = fs::metadata(path)?;
	Ok((metadata.modified()?, metadata.len()))
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use tempfile::tempdir;

	use super::*;

	fn lines_matching(content: &[u8], query: &str) -> Vec<(usize, String)> {
		let mut found = Vec::new();
		scan_lines(Cursor::new(content), query, || false, |number, line| {
			found.push((number, line));
			ControlFlow::Continue(())
		})
		.unwrap();
		found
	}

	fn candidate(path: &Path, relative: &str) -> FileCandidate {
		FileCandidate {
			path: path.to_path_buf(),
			relative: relative.to_string(),
		}
	}

	#[test]
	fn matching_is_literal_and_case_sensitive() {
		let content = b"import os\ndef search(query):\n    return Search.run(query)\nre.*\n";
		assert_eq!(
			lines_matching(content, "search"),
			vec![(2, "def search(query):".to_string())]
		);
		assert_eq!(lines_matching(content, "re.*"), vec![(4, "re.*".to_string())]);
		assert!(lines_matching(content, "r.*n").is_empty());
	}

	#[test]
	fn crlf_and_missing_trailing_newline() {
		let content = b"first hit\r\nsecond\r\nlast hit";
		assert_eq!(
			lines_matching(content, "hit"),
			vec![(1, "first hit".to_string()), (3, "last hit".to_string())]
		);
	}

	#[test]
	fn invalid_utf8_is_replaced_not_rejected() {
		let content = b"caf\xe9 latte\nplain\n";
		let found = lines_matching(content, "latte");
		assert_eq!(found, vec![(1, "caf\u{fffd} latte".to_string())]);
	}

	#[test]
	fn match_file_captures_metadata_and_respects_limit() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("a.py");
		std::fs::write(&path, "x = 1\nx = 2\ny = 3\nx = 4\n").unwrap();
		let expected_size = std::fs::metadata(&path).unwrap().len();

		let all = match_file(&candidate(&path, "a.py"), "x =", None, || false).unwrap();
		assert_eq!(
			all.iter().map(|m| m.line_number).collect::<Vec<_>>(),
			vec![1, 2, 4]
		);
		assert!(all.iter().all(|m| m.size == expected_size));
		assert!(all.iter().all(|m| m.relative == "a.py"));

		let capped = match_file(&candidate(&path, "a.py"), "x =", Some(2), || false).unwrap();
		assert_eq!(capped.len(), 2);
	}

	#[test]
	fn unreadable_file_is_an_error_for_the_caller_to_skip() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("gone.txt");
		assert!(match_file(&candidate(&missing, "gone.txt"), "x", None, || false).is_err());
	}

	#[test]
	fn cancellation_stops_a_long_file_midway() {
		let content = "hit\n".repeat(CANCEL_CHECK_LINES * 3);
		let mut found = 0;
		scan_lines(Cursor::new(content.as_bytes()), "hit", || true, |_, _| {
			found += 1;
			ControlFlow::Continue(())
		})
		.unwrap();
		assert_eq!(found, CANCEL_CHECK_LINES - 1);

		let dir = tempdir().unwrap();
		let path = dir.path().join("big.log");
		std::fs::write(&path, &content).unwrap();
		let partial = match_file(&candidate(&path, "big.log"), "hit", None, || true).unwrap();
		assert_eq!(partial.len(), CANCEL_CHECK_LINES - 1);
		let full = match_file(&candidate(&path, "big.log"), "hit", None, || false).unwrap();
		assert_eq!(full.len(), CANCEL_CHECK_LINES * 3);
	}
}
