use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::systems::filesystem::FilterState;
use crate::systems::search::SortKey;
use crate::ui::theme::Theme;

const KEY_HINTS: &str = "F2/F3/F4 sort  F5/F6 filter  / search  q quit";

fn on_off(enabled: bool) -> &'static str {
	if enabled { "ON" } else { "OFF" }
}

/// Plain text of the toolbar, e.g.
/// `Sort: NAME | .py: OFF | Binary: OFF | F2/F3/F4 sort ...`.
#[must_use]
pub fn toolbar_text(sort: SortKey, filters: FilterState, script_extension: &str) -> String {
	format!(
		"Sort: {} | .{script_extension}: {} | Binary: {} | {KEY_HINTS}",
		sort.label(),
		on_off(filters.script_only),
		on_off(filters.include_binary),
	)
}

/// Render the toolbar, highlighting toggles that are switched on.
pub fn render_toolbar(
	frame: &mut Frame,
	area: Rect,
	sort: SortKey,
	filters: FilterState,
	script_extension: &str,
	theme: &Theme,
) {
	let flag = |enabled: bool| {
		let style = if enabled { theme.highlight } else { theme.empty };
		Span::styled(on_off(enabled), style)
	};
	let line = Line::from(vec![
		Span::raw("Sort: "),
		Span::styled(sort.label(), theme.highlight),
		Span::raw(format!(" | .{script_extension}: ")),
		flag(filters.script_only),
		Span::raw(" | Binary: "),
		flag(filters.include_binary),
		Span::raw(" | "),
		Span::styled(KEY_HINTS, theme.empty),
	]);
	frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	#[test]
	fn default_toolbar() {
		insta::assert_snapshot!(
			toolbar_text(SortKey::Name, FilterState::default(), "py"),
			@"Sort: NAME | .py: OFF | Binary: OFF | F2/F3/F4 sort  F5/F6 filter  / search  q quit"
		);
	}

	#[test]
	fn toolbar_reflects_state() {
		let filters = FilterState {
			script_only: true,
			include_binary: true,
		};
		let text = toolbar_text(SortKey::Size, filters, "rs");
		assert!(text.starts_with("Sort: SIZE | .rs: ON | Binary: ON |"));
	}

	#[test]
	fn rendered_toolbar_matches_text() {
		let text = toolbar_text(SortKey::Modified, FilterState::default(), "py");
		let width = text.len() as u16;
		let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
		terminal
			.draw(|frame| {
				render_toolbar(
					frame,
					frame.area(),
					SortKey::Modified,
					FilterState::default(),
					"py",
					&Theme::default(),
				);
			})
			.unwrap();
		let buffer = terminal.backend().buffer();
		let row: String = (0..width).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
		assert_eq!(row, text);
	}
}
