use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use super::scrollbar::render_scrollbar;
use crate::ui::theme::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row plus separator inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: usize = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<&'static str>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
}

/// Number of data rows that fit in a bordered table drawn into `area`.
#[must_use]
pub fn visible_rows(area: Rect) -> usize {
	usize::from(area.height.saturating_sub(2)).saturating_sub(TABLE_HEADER_ROWS)
}

/// Render a bordered table with header separator and overflow scrollbar.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	if let Some(title) = spec.title {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header = Row::new(spec.headers.into_iter().map(Cell::from))
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let available_rows = usize::from(inner.height).saturating_sub(TABLE_HEADER_ROWS);
	let total_rows = spec.rows.len();
	let needs_scrollbar = total_rows > available_rows && available_rows > 0;

	let table_area = if needs_scrollbar {
		let mut scrollbar_state = ScrollbarState::new(total_rows)
			.viewport_content_length(available_rows)
			.position(table_state.selected().unwrap_or(0));
		render_scrollbar(frame, inner, &mut scrollbar_state, theme)
	} else {
		inner
	};

	let table = Table::new(spec.rows, spec.widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	render_header_separator(frame, table_area, theme);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width == 0 {
		return;
	}
	let sep_rect = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};

	let width = usize::from(area.width);
	let line = if width <= 2 {
		Line::raw(" ".repeat(width))
	} else {
		Line::from(vec![
			Span::raw(" "),
			Span::styled("─".repeat(width - 2), theme.border_style()),
			Span::raw(" "),
		])
	};
	frame.render_widget(Paragraph::new(line), sep_rect);
}
