//! Core state container for the terminal front-end.

use std::sync::mpsc::TryRecvError;

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::search::SearchRuntime;
use crate::shell::{Command, Effect, Focus, Model, Shell};
use crate::systems::search::Scanner;
use crate::ui::components::LogPane;
use crate::ui::config::SessionConfig;
use crate::ui::input::QueryInput;
use crate::ui::theme::Theme;

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
///
/// The [`Shell`] owns the session model; `App` adds the widgets and the
/// channel to the scan worker around it.
pub struct App<'a> {
	pub(crate) shell: Shell,
	pub(crate) search_input: QueryInput<'a>,
	pub(crate) search: SearchRuntime,
	pub(crate) table_state: TableState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) logs: LogPane,
	pub(crate) theme: Theme,
	pub(crate) preview_width: usize,
	pub(crate) script_extension: String,
	pub(crate) root_label: String,
}

impl<'a> App<'a> {
	pub fn new(config: SessionConfig) -> Self {
		let SessionConfig {
			root,
			options,
			filters,
			sort,
			theme,
			preview_width,
			initial_query,
			log_level,
		} = config;

		let root_label = root.display().to_string();
		let script_extension = options.script_extension.clone();
		let search = SearchRuntime::spawn(Scanner::new(root, options));

		let mut app = Self {
			shell: Shell::new(filters, sort),
			search_input: QueryInput::new(initial_query.clone()),
			search,
			table_state: TableState::default(),
			throbber_state: ThrobberState::default(),
			logs: LogPane::new(log_level),
			theme,
			preview_width,
			script_extension,
			root_label,
		};
		app.execute(Command::SetQuery(initial_query));
		app
	}

	pub fn model(&self) -> &Model {
		self.shell.model()
	}

	pub(crate) fn is_quit(&self) -> bool {
		self.shell.is_quit()
	}

	/// Run a command through the shell and perform the resulting effect.
	pub(crate) fn execute(&mut self, command: Command) {
		let effect = self.shell.apply(command);
		match effect {
			Effect::None | Effect::Quit => {}
			Effect::Scan(request) => {
				log::debug!("scan {} requested for '{}'", request.id, request.query);
				self.search.issue(request);
			}
			Effect::CancelScan { id } => self.search.cancel(id),
		}
		self.sync_widgets();
	}

	/// Drain finished scans waiting on the worker channel.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(outcome) => {
					if !self.search.matches_latest(outcome.id) {
						log::debug!("dropping superseded scan {}", outcome.id);
						continue;
					}
					self.shell.complete(outcome);
					self.sync_widgets();
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					log::warn!("scan worker disconnected");
					break;
				}
			}
		}
	}

	/// Mirror the model's cursor and focus into the ratatui widgets.
	fn sync_widgets(&mut self) {
		let model = self.shell.model();
		self.table_state.select(model.cursor);
		if model.cursor.is_none() {
			*self.table_state.offset_mut() = 0;
		}
		self.search_input.set_focused(model.focus == Focus::Query);
	}
}
