use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use scopefind::app_dirs;

use super::errors::SettingsError;
use crate::cli::CliArgs;

const ENV_PREFIX: &str = "SCOPEFIND";
const LOCAL_CONFIG_FILE: &str = ".scopefind.toml";

/// Build a [`Config`] from the default locations, `--config` files and the
/// environment. `env_vars` replaces the process environment when given.
pub(super) fn build_config(
	cli: &CliArgs,
	env_vars: Option<HashMap<String, String>>,
) -> Result<Config, SettingsError> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).format(FileFormat::Toml).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("scan.ignore_dirs")
			.source(env_vars),
	);

	Ok(builder.build()?)
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	match app_dirs::get_config_dir() {
		Ok(dir) => files.push(dir.join("config.toml")),
		Err(err) => log::debug!("no user config directory: {err}"),
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(LOCAL_CONFIG_FILE));
	}

	files
}
