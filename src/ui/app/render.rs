use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;

use super::App;
use crate::shell::Phase;
use crate::ui::components::{
	InputContext, LOG_PANE_HEIGHT, MATCH_HEADERS, ProgressState, TableSpec, build_match_rows,
	match_widths, render_input, render_table, render_toolbar, visible_rows,
};

const PLACEHOLDER: &str = "type a literal pattern";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let log_height = if self.logs.is_visible() {
			LOG_PANE_HEIGHT
		} else {
			0
		};
		let [input_area, toolbar_area, results_area, log_area, status_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(log_height),
			Constraint::Length(1),
		])
		.areas(area);

		self.shell.set_viewport_rows(visible_rows(results_area));

		let scanning = self.model().is_scanning();
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				placeholder: Some(PLACEHOLDER),
				area: input_area,
				theme: &self.theme,
			},
			ProgressState {
				progress_text: " scanning",
				active: scanning,
				throbber_state: &self.throbber_state,
			},
		);

		let model = self.shell.model();
		render_toolbar(
			frame,
			toolbar_area,
			model.sort,
			model.filters,
			&self.script_extension,
			&self.theme,
		);

		self.render_results(frame, results_area);

		if self.logs.is_visible() {
			self.logs.render(frame, log_area, &self.theme);
		}

		let status = Paragraph::new(self.model().status.to_string()).style(self.theme.empty_style());
		frame.render_widget(status, status_area);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let model = self.shell.model();
		let rows = build_match_rows(&model.results, self.preview_width);
		let show_empty = model.results.is_empty() && model.phase == Phase::Displaying;
		let spec = TableSpec {
			headers: MATCH_HEADERS.to_vec(),
			widths: match_widths(),
			rows,
			title: Some(format!(" {} ", self.root_label)),
		};
		render_table(frame, area, &mut self.table_state, spec, &self.theme);

		if show_empty {
			render_empty_message(frame, area, &self.theme);
		}
	}
}

fn render_empty_message(frame: &mut Frame, area: Rect, theme: &crate::ui::theme::Theme) {
	// Border (2) plus header and separator (2).
	const CHROME_HEIGHT: u16 = 4;
	if area.height <= CHROME_HEIGHT || area.width <= 2 {
		return;
	}
	let message_area = Rect {
		x: area.x + 1,
		y: area.y + 3,
		width: area.width - 2,
		height: area.height - CHROME_HEIGHT,
	};
	let empty = Paragraph::new("No results")
		.alignment(Alignment::Center)
		.style(theme.empty_style());
	frame.render_widget(empty, message_area);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use crate::ui::app::state::tests::{app_for, sample_root, wait_for_scan};

	fn buffer_to_string(buf: &Buffer) -> String {
		let mut lines = Vec::new();
		for y in 0..buf.area.height {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line.trim_end().to_string());
		}
		lines.join("\n")
	}

	fn render(app: &mut crate::ui::App<'_>, width: u16, height: u16) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		buffer_to_string(terminal.backend().buffer())
	}

	#[test]
	fn idle_frame_shows_prompt_toolbar_and_status() {
		let dir = sample_root();
		let mut app = app_for(&dir, "");
		let screen = render(&mut app, 120, 12);

		assert!(screen.contains("Sort: NAME | .py: OFF | Binary: OFF"));
		assert!(screen.contains("Preview"));
		assert!(screen.contains("Modified"));
		assert!(screen.lines().last().unwrap_or_default().contains("Enter pattern to search."));
		assert!(!screen.contains("No results"));
	}

	#[test]
	fn results_frame_lists_matches() {
		let dir = sample_root();
		let mut app = app_for(&dir, "search");
		wait_for_scan(&mut app);
		let screen = render(&mut app, 140, 12);

		assert!(screen.contains("a.py"));
		assert!(screen.contains("def search(query):"));
		assert!(screen.contains("b.txt"));
		assert!(screen.contains("Pattern 'search': 2 matches in 2/2 files."));
	}

	#[test]
	fn no_matches_frame() {
		let dir = sample_root();
		let mut app = app_for(&dir, "zzz");
		wait_for_scan(&mut app);
		let screen = render(&mut app, 120, 12);

		assert!(screen.contains("No results"));
		assert!(screen.contains("No matches for: 'zzz'"));
	}

	#[test]
	fn render_records_page_size_and_log_pane_toggles() {
		let dir = sample_root();
		let mut app = app_for(&dir, "");
		render(&mut app, 120, 12);
		// 12 rows minus input, toolbar, status, border and header.
		assert_eq!(app.model().viewport_rows, 5);

		app.handle_key(KeyEvent::new(KeyCode::F(12), KeyModifiers::NONE));
		let screen = render(&mut app, 120, 20);
		assert!(screen.contains("Log (F12)"));
	}
}
