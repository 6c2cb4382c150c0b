use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum};
use scopefind::SortKey;
use scopefind::app_dirs;

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("scopefind {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`], exiting on error.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "scopefind",
	version,
	long_version = long_version(),
	about = "Incremental literal text search over a directory tree",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `scopefind` binary.
pub(crate) struct CliArgs {
	#[arg(
		value_name = "ROOT",
		help = "Directory to search (default: current directory)"
	)]
	pub(crate) root: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SCOPEFIND_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip the user and working-directory configuration files"
	)]
	pub(crate) no_config: bool,
	#[arg(long, value_enum, help = "Initial sort order (default: name)")]
	pub(crate) sort: Option<SortArg>,
	#[arg(long = "script-only", help = "Start with the script-only filter on")]
	pub(crate) script_only: bool,
	#[arg(long = "include-binary", help = "Start with binary files included")]
	pub(crate) include_binary: bool,
	#[arg(
		long = "ext",
		value_name = "EXT",
		help = "Extension used by the script-only filter (default: py)"
	)]
	pub(crate) script_extension: Option<String>,
	#[arg(
		long = "ignore",
		value_delimiter = ',',
		value_name = "NAME",
		help = "Comma-separated directory names to skip (replaces the built-in list)"
	)]
	pub(crate) ignore_dirs: Option<Vec<String>>,
	#[arg(
		long = "max-matches",
		value_name = "N",
		help = "Stop a scan after N matches, 0 for unlimited (default: 1000)"
	)]
	pub(crate) max_matches: Option<usize>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: dark)")]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Level captured by the log pane (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running"
	)]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List built-in themes and exit")]
	pub(crate) list_themes: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Sort orders accepted on the command line.
pub(crate) enum SortArg {
	Name,
	Date,
	Size,
}

impl From<SortArg> for SortKey {
	fn from(value: SortArg) -> Self {
		match value {
			SortArg::Name => SortKey::Name,
			SortArg::Date => SortKey::Modified,
			SortArg::Size => SortKey::Size,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> CliArgs {
		let mut matches = CliArgs::command()
			.try_get_matches_from(args)
			.expect("arguments parse");
		CliArgs::from_arg_matches_mut(&mut matches).expect("arguments convert")
	}

	#[test]
	fn command_definition_is_valid() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn defaults_leave_everything_unset() {
		let cli = parse(&["scopefind"]);
		assert_eq!(cli.root, None);
		assert!(!cli.no_config);
		assert!(!cli.script_only);
		assert!(!cli.include_binary);
		assert_eq!(cli.sort, None);
		assert_eq!(cli.max_matches, None);
	}

	#[test]
	fn positional_root_and_flags() {
		let cli = parse(&[
			"scopefind",
			"/tmp",
			"--sort",
			"date",
			"--script-only",
			"--ignore",
			"target,dist",
			"-q",
			"def",
			"-n",
		]);
		assert_eq!(cli.root, Some(PathBuf::from("/tmp")));
		assert_eq!(cli.sort.map(SortKey::from), Some(SortKey::Modified));
		assert!(cli.script_only);
		assert_eq!(cli.ignore_dirs, Some(vec!["target".into(), "dist".into()]));
		assert_eq!(cli.initial_query.as_deref(), Some("def"));
		assert!(cli.no_config);
	}

	#[test]
	fn unknown_sort_is_rejected() {
		assert!(
			CliArgs::command()
				.try_get_matches_from(["scopefind", "--sort", "size-desc"])
				.is_err()
		);
	}
}
