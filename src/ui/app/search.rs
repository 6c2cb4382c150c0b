//! Communication with the background scan worker.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::systems::search::{self, ScanOutcome, ScanRequest, Scanner, SearchCommand};

/// UI-side handle to the scan worker.
///
/// Publishes the newest request id through the shared counter so the worker
/// can abandon superseded scans.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<ScanOutcome>,
	latest_request_id: Arc<AtomicU64>,
}

impl SearchRuntime {
	pub(crate) fn spawn(scanner: Scanner) -> Self {
		let (tx, rx, latest_request_id) = search::spawn(scanner);
		Self {
			tx,
			rx,
			latest_request_id,
		}
	}

	pub(crate) fn issue(&self, request: ScanRequest) {
		self.latest_request_id.store(request.id, Ordering::Release);
		let id = request.id;
		if self.tx.send(SearchCommand::Scan(request)).is_err() {
			log::warn!("scan worker is gone; request {id} dropped");
		}
	}

	/// Make every outstanding request stale.
	pub(crate) fn cancel(&self, id: u64) {
		self.latest_request_id.store(id, Ordering::Release);
	}

	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		self.latest_request_id.load(Ordering::Acquire) == id
	}

	pub(crate) fn try_recv(&self) -> Result<ScanOutcome, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}
}
