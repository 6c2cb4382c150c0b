use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use super::matcher::match_file;
use super::types::{ResultList, ScanOutcome, ScanRequest, ScanStats};
use crate::systems::filesystem::{ScanOptions, candidate_files};

/// Runs the walk, match and sort pipeline for one root.
#[derive(Debug, Clone)]
pub struct Scanner {
	root: PathBuf,
	options: ScanOptions,
}

impl Scanner {
	pub fn new(root: PathBuf, options: ScanOptions) -> Self {
		Self { root, options }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn options(&self) -> &ScanOptions {
		&self.options
	}

	/// Run `request` to completion.
	pub fn run(&self, request: &ScanRequest) -> ScanOutcome {
		let latest = AtomicU64::new(request.id);
		self.scan(request, &latest)
			.unwrap_or_else(|| empty_outcome(request))
	}

	/// Run `request`, abandoning it as soon as `latest_request_id` moves past
	/// `request.id`. Returns `None` for an abandoned scan.
	pub fn scan(&self, request: &ScanRequest, latest_request_id: &AtomicU64) -> Option<ScanOutcome> {
		if request.query.is_empty() {
			return Some(empty_outcome(request));
		}

		let is_stale = || latest_request_id.load(Ordering::Acquire) != request.id;
		let limit = self.options.max_matches;
		let mut files = candidate_files(&self.root, &self.options, request.filters);
		let mut matches = Vec::new();
		let mut stats = ScanStats::default();

		for candidate in files.by_ref() {
			if is_stale() {
				log::debug!("abandoning scan {} for '{}'", request.id, request.query);
				return None;
			}

			stats.files_searched += 1;
			let remaining = limit.map(|limit| limit.saturating_sub(matches.len()));
			match match_file(&candidate, &request.query, remaining, is_stale) {
				Ok(found) => matches.extend(found),
				Err(err) => {
					log::debug!("skipping {}: {err}", candidate.path.display());
					continue;
				}
			}

			if limit.is_some_and(|limit| matches.len() >= limit) {
				stats.truncated_at = limit;
				break;
			}
		}
		stats.files_visited = files.visited();

		if is_stale() {
			return None;
		}

		log::info!(
			"scan {} for '{}': {} matches in {}/{} files",
			request.id,
			request.query,
			matches.len(),
			stats.files_searched,
			stats.files_visited
		);

		Some(ScanOutcome {
			id: request.id,
			query: request.query.clone(),
			filters: request.filters,
			sort: request.sort,
			results: ResultList::sorted(matches, request.sort),
			stats,
		})
	}
}

fn empty_outcome(request: &ScanRequest) -> ScanOutcome {
	ScanOutcome {
		id: request.id,
		query: request.query.clone(),
		filters: request.filters,
		sort: request.sort,
		results: ResultList::default(),
		stats: ScanStats::default(),
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::{TempDir, tempdir};

	use super::*;
	use crate::systems::filesystem::FilterState;
	use crate::systems::search::SortKey;

	fn request(query: &str, filters: FilterState) -> ScanRequest {
		ScanRequest {
			id: 1,
			query: query.to_string(),
			filters,
			sort: SortKey::Name,
		}
	}

	fn summary(outcome: &ScanOutcome) -> Vec<(String, usize, String)> {
		outcome
			.results
			.iter()
			.map(|m| (m.relative.clone(), m.line_number, m.line.clone()))
			.collect()
	}

	fn sample_tree() -> TempDir {
		let dir = tempdir().unwrap();
		let root = dir.path();
		fs::write(root.join("a.py"), "import os\n\ndef search(query):\n    pass\n").unwrap();
		fs::write(root.join("b.txt"), "no match here\n").unwrap();
		dir
	}

	fn scanner(dir: &TempDir) -> Scanner {
		Scanner::new(dir.path().to_path_buf(), ScanOptions::default())
	}

	#[test]
	fn sample_scenario_search_match_and_filter() {
		let dir = sample_tree();
		let scanner = scanner(&dir);

		let outcome = scanner.run(&request("search", FilterState::default()));
		assert_eq!(
			summary(&outcome),
			vec![("a.py".into(), 3, "def search(query):".into())]
		);
		assert_eq!(outcome.stats.files_searched, 2);
		assert_eq!(outcome.stats.files_visited, 2);

		let script_only = FilterState {
			script_only: true,
			..FilterState::default()
		};
		let filtered = scanner.run(&request("search", script_only));
		assert_eq!(summary(&filtered), summary(&outcome));
		assert_eq!(filtered.stats.files_searched, 1);

		let other = scanner.run(&request("match", FilterState::default()));
		assert_eq!(
			summary(&other),
			vec![("b.txt".into(), 1, "no match here".into())]
		);
	}

	#[test]
	fn every_result_contains_the_query() {
		let dir = sample_tree();
		fs::write(dir.path().join("c.md"), "Search\nsearching\nre-search\n").unwrap();
		let outcome = scanner(&dir).run(&request("search", FilterState::default()));

		assert_eq!(outcome.results.len(), 3);
		assert!(outcome.results.iter().all(|m| m.line.contains("search")));
	}

	#[test]
	fn empty_query_yields_no_results_without_walking() {
		let dir = sample_tree();
		let outcome = scanner(&dir).run(&request("", FilterState::default()));
		assert!(outcome.results.is_empty());
		assert_eq!(outcome.stats, ScanStats::default());
	}

	#[test]
	fn repeated_scans_are_identical() {
		let dir = sample_tree();
		fs::write(dir.path().join("z.py"), "search\nsearch again\n").unwrap();
		let scanner = scanner(&dir);

		for sort in SortKey::ALL {
			let req = ScanRequest {
				sort,
				..request("search", FilterState::default())
			};
			assert_eq!(scanner.run(&req), scanner.run(&req));
		}
	}

	#[test]
	fn binary_file_follows_the_binary_toggle() {
		let dir = sample_tree();
		fs::write(dir.path().join("blob.bin"), b"\x00\x01search\x02").unwrap();
		let scanner = scanner(&dir);

		let default = scanner.run(&request("search", FilterState::default()));
		assert!(default.results.iter().all(|m| m.relative != "blob.bin"));

		let with_binary = scanner.run(&request(
			"search",
			FilterState {
				include_binary: true,
				..FilterState::default()
			},
		));
		let binary_hits: Vec<_> = with_binary
			.results
			.iter()
			.filter(|m| m.relative == "blob.bin")
			.collect();
		assert_eq!(binary_hits.len(), 1);

		// Files that pass both filter states keep identical entries.
		let shared: Vec<_> = with_binary
			.results
			.iter()
			.filter(|m| m.relative != "blob.bin")
			.cloned()
			.collect();
		assert_eq!(shared, default.results.as_slice());
	}

	#[test]
	fn files_inside_ignored_directories_never_match() {
		let dir = sample_tree();
		fs::create_dir_all(dir.path().join(".git")).unwrap();
		fs::write(dir.path().join(".git/HEAD"), "search in vcs metadata\n").unwrap();
		let scanner = scanner(&dir);

		for filters in [
			FilterState::default(),
			FilterState {
				script_only: false,
				include_binary: true,
			},
		] {
			let outcome = scanner.run(&request("search", filters));
			assert!(outcome.results.iter().all(|m| !m.relative.starts_with(".git/")));
		}
	}

	#[test]
	fn match_cap_truncates_and_reports() {
		let dir = tempdir().unwrap();
		for index in 0..4 {
			fs::write(dir.path().join(format!("f{index}.txt")), "hit\nhit\nhit\n").unwrap();
		}
		let options = ScanOptions {
			max_matches: Some(5),
			..ScanOptions::default()
		};
		let scanner = Scanner::new(dir.path().to_path_buf(), options);

		let outcome = scanner.run(&request("hit", FilterState::default()));
		assert_eq!(outcome.results.len(), 5);
		assert_eq!(outcome.stats.truncated_at, Some(5));
		assert_eq!(outcome.stats.files_searched, 2);
	}

	#[test]
	fn stale_request_is_abandoned() {
		let dir = sample_tree();
		let latest = AtomicU64::new(2);
		let stale = request("search", FilterState::default());

		assert!(scanner(&dir).scan(&stale, &latest).is_none());
	}

	#[cfg(unix)]
	#[test]
	fn unreadable_entries_are_skipped_and_the_walk_continues() {
		use std::os::unix::fs::PermissionsExt;

		let dir = sample_tree();
		let root = dir.path();
		let locked_dir = root.join("locked");
		fs::create_dir(&locked_dir).unwrap();
		fs::write(locked_dir.join("inner.txt"), "search hidden away\n").unwrap();
		let locked_file = root.join("secret.txt");
		fs::write(&locked_file, "search in a locked file\n").unwrap();
		fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o000)).unwrap();
		fs::set_permissions(&locked_file, fs::Permissions::from_mode(0o000)).unwrap();
		// Permission bits do not stop a privileged user.
		let enforced = fs::File::open(&locked_file).is_err();

		let scanner = scanner(&dir);
		for include_binary in [false, true] {
			let filters = FilterState {
				script_only: false,
				include_binary,
			};
			let outcome = scanner.run(&request("search", filters));
			assert!(
				outcome.results.iter().any(|m| m.relative == "a.py" && m.line_number == 3),
				"readable match lost with include_binary={include_binary}"
			);
			if enforced {
				assert_eq!(
					summary(&outcome),
					vec![("a.py".into(), 3, "def search(query):".into())]
				);
			}
		}

		fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o755)).unwrap();
		fs::set_permissions(&locked_file, fs::Permissions::from_mode(0o644)).unwrap();
	}

	#[test]
	fn file_removed_after_the_walk_is_skipped() {
		let dir = sample_tree();
		let scanner = scanner(&dir);
		let vanished = dir.path().join("gone.txt");
		fs::write(&vanished, "search\n").unwrap();

		let candidates: Vec<_> =
			candidate_files(scanner.root(), scanner.options(), FilterState::default()).collect();
		assert!(candidates.iter().any(|c| c.relative == "gone.txt"));
		fs::remove_file(&vanished).unwrap();

		let found: Vec<_> = candidates
			.iter()
			.filter_map(|candidate| match_file(candidate, "search", None, || false).ok())
			.flatten()
			.map(|m| m.relative)
			.collect();
		assert_eq!(found, vec!["a.py".to_string()]);
	}
}
