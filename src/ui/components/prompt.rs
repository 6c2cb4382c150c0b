use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::input::QueryInput;
use crate::ui::theme::Theme;

const PROMPT: &str = "> ";

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub search_input: &'a QueryInput<'a>,
	/// Shown dimmed while the query is empty.
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Spinner shown at the right edge of the input row.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	/// Spin only while work is outstanding.
	pub active: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the `> ` prompt, the query editor and the progress indicator.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		placeholder,
		area,
		theme,
	} = input;

	let [prompt_area, input_area] =
		Layout::horizontal([Constraint::Length(PROMPT.len() as u16), Constraint::Fill(1)])
			.areas(area);
	frame.render_widget(
		Paragraph::new(PROMPT).style(theme.prompt_style()),
		prompt_area,
	);
	search_input.render_textarea(frame, input_area);

	if search_input.text().is_empty()
		&& let Some(placeholder) = placeholder
	{
		render_placeholder(frame, input_area, placeholder, theme);
	}

	render_progress(frame, input_area, progress, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width <= 1 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first column to the cursor.
	let display: String = text.chars().take(usize::from(area.width) - 1).collect();
	frame.buffer_mut().set_line(
		area.left() + 1,
		area.top(),
		&Line::from(Span::styled(display, theme.empty_style())),
		area.width - 1,
	);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	let ProgressState {
		progress_text,
		active,
		throbber_state,
	} = progress;
	if !active || area.width == 0 || area.height == 0 {
		return;
	}

	let muted = theme.empty_style();
	let spinner = Throbber::default().style(muted).throbber_style(muted);
	let spinner_span = spinner.to_symbol_span(throbber_state);
	let line = Line::from(vec![
		spinner_span,
		Span::styled(progress_text.to_string(), muted),
	]);
	let line_width = line.width() as u16;
	if line_width == 0 || line_width >= area.width {
		return;
	}

	let start_x = area.right().saturating_sub(line_width);
	frame
		.buffer_mut()
		.set_line(start_x, area.top(), &line, line_width);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn first_row(terminal: &Terminal<TestBackend>) -> String {
		let buffer = terminal.backend().buffer();
		(0..buffer.area.width)
			.map(|x| buffer[(x, 0)].symbol().to_string())
			.collect()
	}

	fn draw(query: &str, active: bool) -> String {
		let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
		let input = QueryInput::new(query);
		let theme = Theme::default();
		let throbber_state = ThrobberState::default();
		terminal
			.draw(|frame| {
				let ctx = InputContext {
					search_input: &input,
					placeholder: Some("type to search"),
					area: frame.area(),
					theme: &theme,
				};
				let progress = ProgressState {
					progress_text: "scanning",
					active,
					throbber_state: &throbber_state,
				};
				render_input(frame, ctx, progress);
			})
			.unwrap();
		first_row(&terminal)
	}

	#[test]
	fn empty_query_shows_placeholder() {
		let row = draw("", false);
		assert!(row.starts_with("> "));
		assert!(row.contains("type to search"));
	}

	#[test]
	fn query_replaces_placeholder() {
		let row = draw("needle", false);
		assert!(row.starts_with("> needle"));
		assert!(!row.contains("type to search"));
	}

	#[test]
	fn progress_only_while_active() {
		assert!(draw("needle", true).trim_end().ends_with("scanning"));
		assert!(!draw("needle", false).contains("scanning"));
	}
}
