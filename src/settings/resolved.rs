use std::path::PathBuf;

use log::LevelFilter;
use scopefind::ui::{SessionConfig, Theme};
use scopefind::{FilterState, ScanOptions, SortKey};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub root: PathBuf,
	pub options: ScanOptions,
	pub filters: FilterState,
	pub sort: SortKey,
	pub theme_name: String,
	pub theme: Theme,
	pub preview_width: usize,
	pub initial_query: String,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		for line in self.summary_lines() {
			println!("{line}");
		}
	}

	fn summary_lines(&self) -> Vec<String> {
		let options = &self.options;
		let mut lines = vec![
			"Effective configuration:".to_string(),
			format!("  Root: {}", self.root.display()),
			format!("  Ignored directories: {}", options.ignore_dirs.join(", ")),
			format!("  Script extension: .{}", options.script_extension),
		];
		lines.push(match options.max_matches {
			Some(limit) => format!("  Max matches: {limit}"),
			None => "  Max matches: unlimited".to_string(),
		});
		lines.extend([
			format!("  Binary sniff bytes: {}", options.binary_sniff_bytes),
			format!("  Include hidden: {}", bool_to_word(options.include_hidden)),
			format!("  Respect gitignore: {}", bool_to_word(options.respect_gitignore)),
			format!("  Script only: {}", bool_to_word(self.filters.script_only)),
			format!("  Include binary: {}", bool_to_word(self.filters.include_binary)),
			format!("  Sort: {}", self.sort),
			format!("  UI theme: {}", self.theme_name),
			format!("  Preview width: {}", self.preview_width),
			format!("  Log level: {}", self.log_level),
		]);
		if !self.initial_query.is_empty() {
			lines.push(format!("  Initial query: {}", self.initial_query));
		}
		lines
	}

	/// Hand the interactive session what it needs.
	pub fn into_session(self) -> SessionConfig {
		SessionConfig {
			root: self.root,
			options: self.options,
			filters: self.filters,
			sort: self.sort,
			theme: self.theme,
			preview_width: self.preview_width,
			initial_query: self.initial_query,
			log_level: self.log_level,
		}
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
