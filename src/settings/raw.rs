use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use scopefind::systems::filesystem::normalize_extension;
use scopefind::ui::{DEFAULT_PREVIEW_WIDTH, theme};
use scopefind::{FilterState, ScanOptions, SortKey, validate_root};
use serde::Deserialize;

use super::errors::{Origin, SettingsError};
use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	scan: ScanSection,
	filters: FiltersSection,
	ui: UiSection,
	/// Keys whose value came from a command-line flag.
	#[serde(skip)]
	from_cli: BTreeSet<&'static str>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ScanSection {
	ignore_dirs: Option<Vec<String>>,
	script_extension: Option<String>,
	max_matches: Option<usize>,
	binary_sniff_bytes: Option<usize>,
	include_hidden: Option<bool>,
	respect_gitignore: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FiltersSection {
	script_only: Option<bool>,
	include_binary: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	sort: Option<String>,
	theme: Option<String>,
	preview_width: Option<usize>,
	initial_query: Option<String>,
	log_level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(dirs) = &cli.ignore_dirs {
			self.scan.ignore_dirs = Some(dirs.clone());
			self.from_cli.insert("scan.ignore_dirs");
		}
		if let Some(ext) = &cli.script_extension {
			self.scan.script_extension = Some(ext.clone());
			self.from_cli.insert("scan.script_extension");
		}
		if let Some(limit) = cli.max_matches {
			self.scan.max_matches = Some(limit);
			self.from_cli.insert("scan.max_matches");
		}
		if cli.script_only {
			self.filters.script_only = Some(true);
			self.from_cli.insert("filters.script_only");
		}
		if cli.include_binary {
			self.filters.include_binary = Some(true);
			self.from_cli.insert("filters.include_binary");
		}
		if let Some(sort) = cli.sort {
			self.ui.sort = Some(SortKey::from(sort).as_str().to_string());
			self.from_cli.insert("ui.sort");
		}
		if let Some(theme) = &cli.theme {
			self.ui.theme = Some(theme.clone());
			self.from_cli.insert("ui.theme");
		}
		if let Some(query) = &cli.initial_query {
			self.ui.initial_query = Some(query.clone());
			self.from_cli.insert("ui.initial_query");
		}
		if let Some(level) = &cli.log_level {
			self.ui.log_level = Some(level.clone());
			self.from_cli.insert("ui.log_level");
		}
	}

	/// Validate every value and fill defaults, producing a [`ResolvedConfig`].
	pub(super) fn resolve(self, root: Option<PathBuf>) -> Result<ResolvedConfig, SettingsError> {
		let RawConfig {
			scan,
			filters,
			ui,
			from_cli,
		} = self;
		let invalid = |key: &'static str, value: String, reason: String| SettingsError::Invalid {
			key,
			value,
			origin: if from_cli.contains(key) {
				Origin::CommandLine
			} else {
				Origin::Configuration
			},
			reason,
		};

		let root = match root {
			Some(path) => path,
			None => env::current_dir().map_err(SettingsError::WorkingDir)?,
		};
		let root = validate_root(&root)?;

		let defaults = ScanOptions::default();
		let script_extension = match scan.script_extension {
			Some(ext) => {
				let normalized = normalize_extension(&ext);
				if normalized.is_empty() {
					return Err(invalid("scan.script_extension", ext, "must not be empty".into()));
				}
				normalized
			}
			None => defaults.script_extension,
		};
		let binary_sniff_bytes = scan.binary_sniff_bytes.unwrap_or(defaults.binary_sniff_bytes);
		if binary_sniff_bytes == 0 {
			return Err(invalid("scan.binary_sniff_bytes", "0".into(), "must be at least 1".into()));
		}
		let ignore_dirs = match scan.ignore_dirs {
			Some(dirs) => dirs
				.into_iter()
				.map(|dir| dir.trim().to_string())
				.filter(|dir| !dir.is_empty())
				.collect(),
			None => defaults.ignore_dirs,
		};
		let max_matches = match scan.max_matches {
			Some(0) => None,
			Some(limit) => Some(limit),
			None => defaults.max_matches,
		};
		let options = ScanOptions {
			ignore_dirs,
			script_extension,
			max_matches,
			binary_sniff_bytes,
			include_hidden: scan.include_hidden.unwrap_or(defaults.include_hidden),
			respect_gitignore: scan.respect_gitignore.unwrap_or(defaults.respect_gitignore),
		};

		let filters = FilterState {
			script_only: filters.script_only.unwrap_or(false),
			include_binary: filters.include_binary.unwrap_or(false),
		};

		let sort = match ui.sort {
			Some(value) => match SortKey::from_str(&value) {
				Ok(sort) => sort,
				Err(err) => return Err(invalid("ui.sort", value, err.to_string())),
			},
			None => SortKey::default(),
		};

		let theme_name = ui
			.theme
			.map(|name| name.trim().to_ascii_lowercase())
			.unwrap_or_else(|| "dark".to_string());
		let Some(theme) = theme::by_name(&theme_name) else {
			let reason = format!("expected one of {}", theme::names().join(", "));
			return Err(invalid("ui.theme", theme_name, reason));
		};

		let preview_width = ui.preview_width.unwrap_or(DEFAULT_PREVIEW_WIDTH);
		if preview_width == 0 {
			return Err(invalid("ui.preview_width", "0".into(), "must be at least 1".into()));
		}

		let log_level = match ui.log_level {
			Some(value) => match LevelFilter::from_str(value.trim()) {
				Ok(level) => level,
				Err(_) => {
					let reason = "expected off, error, warn, info, debug or trace".to_string();
					return Err(invalid("ui.log_level", value, reason));
				}
			},
			None => LevelFilter::Info,
		};

		Ok(ResolvedConfig {
			root,
			options,
			filters,
			sort,
			theme_name,
			theme,
			preview_width,
			initial_query: ui.initial_query.unwrap_or_default(),
			log_level,
		})
	}
}
