use std::time::SystemTime;

use ratatui::layout::Constraint;
use ratatui::widgets::{Cell, Row};
use time::OffsetDateTime;
use time::macros::format_description;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::systems::search::{MatchResult, ResultList};

pub const MATCH_HEADERS: [&str; 6] = ["#", "Path", "Line", "Preview", "Size", "Modified"];
const ELLIPSIS: &str = "...";
const TAB_EXPANSION: &str = "    ";

#[must_use]
pub fn match_widths() -> Vec<Constraint> {
	vec![
		Constraint::Length(5),
		Constraint::Fill(2),
		Constraint::Length(6),
		Constraint::Fill(5),
		Constraint::Length(10),
		Constraint::Length(16),
	]
}

/// Build one table row per match, numbered from 1.
#[must_use]
pub fn build_match_rows(results: &ResultList, preview_width: usize) -> Vec<Row<'static>> {
	results
		.iter()
		.enumerate()
		.map(|(index, entry)| match_row(index + 1, entry, preview_width))
		.collect()
}

fn match_row(number: usize, entry: &MatchResult, preview_width: usize) -> Row<'static> {
	Row::new([
		Cell::from(number.to_string()),
		Cell::from(entry.relative.clone()),
		Cell::from(entry.line_number.to_string()),
		Cell::from(preview_text(&entry.line, preview_width)),
		Cell::from(entry.size.to_string()),
		Cell::from(format_modified(entry.modified)),
	])
}

/// Expand tabs and cut the line to `width` display columns, marking the cut
/// with `...`.
#[must_use]
pub fn preview_text(line: &str, width: usize) -> String {
	let expanded = line.replace('\t', TAB_EXPANSION);
	if expanded.width() <= width {
		return expanded;
	}
	let budget = width.saturating_sub(ELLIPSIS.len());
	let (kept, _) = expanded.unicode_truncate(budget);
	format!("{kept}{ELLIPSIS}")
}

/// `YYYY-MM-DD HH:MM` in UTC, or `-` when the time is outside the
/// representable calendar range.
#[must_use]
pub fn format_modified(modified: SystemTime) -> String {
	let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
	to_datetime(modified)
		.and_then(|stamp| stamp.format(&format).ok())
		.unwrap_or_else(|| "-".to_string())
}

fn to_datetime(stamp: SystemTime) -> Option<OffsetDateTime> {
	match stamp.duration_since(SystemTime::UNIX_EPOCH) {
		Ok(after) => {
			OffsetDateTime::UNIX_EPOCH.checked_add(time::Duration::try_from(after).ok()?)
		}
		Err(err) => OffsetDateTime::UNIX_EPOCH
			.checked_sub(time::Duration::try_from(err.duration()).ok()?),
	}
}
