//! Application runtime and event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::ui::App;
use crate::ui::config::SessionConfig;

/// Construct an [`App`] for `config` and run it until the user quits.
pub fn run(config: SessionConfig) -> Result<()> {
	let mut app = App::new(config);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the shell reaches its quit phase.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
		terminal.clear().context("failed to clear terminal")?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<()> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					self.handle_key(key);
				}
				if self.is_quit() {
					break;
				}
			}

			if self.is_quit() {
				break Ok(());
			}

			self.pump_search_results();
			if self.model().is_scanning() {
				self.throbber_state.calc_next();
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err).context("failed to draw frame");
			}

			thread::sleep(Duration::from_millis(16));
		};

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
