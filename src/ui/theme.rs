use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for headers, borders and separators.
	pub header: Style,
	/// Style for the selected row.
	pub row_highlight: Style,
	/// Style for the `> ` prompt.
	pub prompt: Style,
	/// Style for placeholders and muted text.
	pub empty: Style,
	/// Style for toggles that are switched on.
	pub highlight: Style,
}

impl Theme {
	/// Bright text on a dark terminal background.
	#[must_use]
	pub fn dark() -> Self {
		Self {
			header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
			row_highlight: Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
			prompt: Style::new().fg(Color::LightCyan),
			empty: Style::new().fg(Color::Gray),
			highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
		}
	}

	/// Dark text for light terminal backgrounds.
	#[must_use]
	pub fn light() -> Self {
		Self {
			header: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
			row_highlight: Style::new().bg(Color::Gray).add_modifier(Modifier::BOLD),
			prompt: Style::new().fg(Color::Blue),
			empty: Style::new().fg(Color::DarkGray),
			highlight: Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
		}
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Foreground color used for borders and scrollbars.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::default().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}

const BUILTIN: [(&str, fn() -> Theme); 2] = [("dark", Theme::dark), ("light", Theme::light)];

/// Names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTIN.iter().map(|(name, _)| *name).collect()
}

/// Look up a built-in theme, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTIN
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
		.map(|(_, build)| build())
}
