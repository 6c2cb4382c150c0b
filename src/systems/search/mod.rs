//! Line matching, result ordering and the background scan worker.
//!
//! A scan is the whole pipeline: walk the root, match every candidate file,
//! sort the collected matches. [`Scanner`] runs it synchronously; [`spawn`]
//! runs it on a worker thread that drops superseded requests.

pub mod matcher;
mod scan;
mod sort;
mod types;
mod worker;

pub use scan::Scanner;
pub use sort::sort_matches;
pub use types::{
	MatchResult, ResultList, ScanOutcome, ScanRequest, ScanStats, SortKey, UnknownSortKey,
};
pub use worker::{SearchCommand, spawn};
