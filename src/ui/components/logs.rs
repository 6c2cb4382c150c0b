//! In-memory log pane backed by `tui-logger`.

use log::LevelFilter;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::ui::theme::Theme;

/// Height of the log pane including its border.
pub const LOG_PANE_HEIGHT: u16 = 8;

pub struct LogPane {
	visible: bool,
	widget: TuiWidgetState,
}

impl LogPane {
	pub fn new(level: LevelFilter) -> Self {
		Self {
			visible: false,
			widget: TuiWidgetState::new().set_default_display_level(level),
		}
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn toggle(&mut self) {
		self.visible = !self.visible;
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}

		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style())
			.title("Log (F12)");
		let widget = TuiLoggerWidget::default()
			.block(block)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.style(theme.empty_style())
			.state(&self.widget);
		frame.render_widget(widget, area);
	}
}
