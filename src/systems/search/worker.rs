use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::scan::Scanner;
use super::types::{ScanOutcome, ScanRequest};

/// Commands understood by the background scan worker.
#[derive(Debug)]
pub enum SearchCommand {
	/// Run the full pipeline for a query.
	Scan(ScanRequest),
	/// Stop the background worker thread.
	Shutdown,
}

/// Launches the background scan worker thread and returns communication channels.
///
/// The returned counter holds the id of the newest request. The worker
/// abandons any scan whose id no longer matches it.
pub fn spawn(scanner: Scanner) -> (Sender<SearchCommand>, Receiver<ScanOutcome>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_request_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_request_id);

	thread::spawn(move || worker_loop(&scanner, command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_request_id)
}

fn worker_loop(
	scanner: &Scanner,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<ScanOutcome>,
	latest_request_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		let command = drain_to_latest(command, &command_rx);
		if !handle_command(scanner, &result_tx, &latest_request_id, command) {
			break;
		}
	}
}

/// Skip queued scans that a newer request has already replaced.
fn drain_to_latest(mut command: SearchCommand, command_rx: &Receiver<SearchCommand>) -> SearchCommand {
	if matches!(command, SearchCommand::Shutdown) {
		return command;
	}
	while let Ok(next) = command_rx.try_recv() {
		let shutdown = matches!(next, SearchCommand::Shutdown);
		command = next;
		if shutdown {
			break;
		}
	}
	command
}

fn handle_command(
	scanner: &Scanner,
	result_tx: &Sender<ScanOutcome>,
	latest_request_id: &Arc<AtomicU64>,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Scan(request) => {
			if latest_request_id.load(Ordering::Acquire) != request.id {
				return true;
			}
			match scanner.scan(&request, latest_request_id) {
				Some(outcome) => result_tx.send(outcome).is_ok(),
				None => true,
			}
		}
		SearchCommand::Shutdown => false,
	}
}
