//! Single-line query editor built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// The query field. Keeps exactly one line; newline keys are rejected.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		let mut input = Self { textarea };
		input.set_focused(true);
		input
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_newline(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Show or hide the block cursor.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_edits_the_single_line() {
		let mut input = QueryInput::new("");
		assert!(input.input(key(KeyCode::Char('d'))));
		assert!(input.input(key(KeyCode::Char('e'))));
		assert!(input.input(key(KeyCode::Char('f'))));
		assert_eq!(input.text(), "def");

		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "de");
	}

	#[test]
	fn initial_text_places_cursor_at_end() {
		let mut input = QueryInput::new("sea");
		input.input(key(KeyCode::Char('r')));
		assert_eq!(input.text(), "sear");
	}

	#[test]
	fn newlines_are_rejected() {
		let mut input = QueryInput::new("abc");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "abc");
	}

	#[test]
	fn cursor_motion_is_not_a_change() {
		let mut input = QueryInput::new("abc");
		assert!(!input.input(key(KeyCode::Left)));
		assert!(!input.input(key(KeyCode::Home)));
		assert_eq!(input.text(), "abc");
	}
}
