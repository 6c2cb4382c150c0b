use std::cmp::Ordering;

use super::types::{MatchResult, SortKey};

/// Sort `entries` by `key`.
///
/// Every key falls back to (path, line) so the order is total and repeated
/// scans of an unchanged tree render identically.
pub fn sort_matches(entries: &mut [MatchResult], key: SortKey) {
	entries.sort_by(|a, b| compare(a, b, key));
}

pub(crate) fn compare(a: &MatchResult, b: &MatchResult, key: SortKey) -> Ordering {
	let primary = match key {
		SortKey::Name => Ordering::Equal,
		SortKey::Modified => b.modified.cmp(&a.modified),
		SortKey::Size => b.size.cmp(&a.size),
	};
	primary
		.then_with(|| a.relative.cmp(&b.relative))
		.then_with(|| a.line_number.cmp(&b.line_number))
}
