use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::shell::{Command, Focus};
use crate::systems::search::SortKey;

/// What a key press means in the current focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum KeyAction {
	/// Hand the key to the query editor.
	Edit,
	Shell(Command),
	ToggleLogs,
	Ignore,
}

/// Map a key press to an action. Pure so the binding table is testable.
pub(crate) fn map_key(key: KeyEvent, focus: Focus) -> KeyAction {
	if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
		return KeyAction::Shell(Command::Quit);
	}

	let global = match key.code {
		KeyCode::F(2) => Some(Command::Sort(SortKey::Name)),
		KeyCode::F(3) => Some(Command::Sort(SortKey::Modified)),
		KeyCode::F(4) => Some(Command::Sort(SortKey::Size)),
		KeyCode::F(5) => Some(Command::ToggleScriptOnly),
		KeyCode::F(6) => Some(Command::ToggleBinary),
		KeyCode::F(12) => return KeyAction::ToggleLogs,
		KeyCode::Up => Some(Command::Up),
		KeyCode::Down => Some(Command::Down),
		KeyCode::PageUp => Some(Command::PageUp),
		KeyCode::PageDown => Some(Command::PageDown),
		_ => None,
	};
	if let Some(command) = global {
		return KeyAction::Shell(command);
	}

	match focus {
		Focus::Query => match key.code {
			KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => KeyAction::Shell(Command::FocusResults),
			_ => KeyAction::Edit,
		},
		Focus::Results => match key.code {
			KeyCode::Char('/') | KeyCode::Tab => KeyAction::Shell(Command::FocusSearch),
			KeyCode::Char('k') => KeyAction::Shell(Command::Up),
			KeyCode::Char('j') => KeyAction::Shell(Command::Down),
			KeyCode::Char('g') | KeyCode::Home => KeyAction::Shell(Command::Top),
			KeyCode::Char('G') | KeyCode::End => KeyAction::Shell(Command::Bottom),
			KeyCode::Char('q') => KeyAction::Shell(Command::Quit),
			_ => KeyAction::Ignore,
		},
	}
}

impl<'a> App<'a> {
	/// Process a keyboard event.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) {
		match map_key(key, self.model().focus) {
			KeyAction::Edit => {
				if self.search_input.input(key) {
					let query = self.search_input.text().to_string();
					self.execute(Command::SetQuery(query));
				}
			}
			KeyAction::Shell(command) => self.execute(command),
			KeyAction::ToggleLogs => self.logs.toggle(),
			KeyAction::Ignore => {}
		}
	}
}
