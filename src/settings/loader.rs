use std::collections::HashMap;

use super::errors::SettingsError;
use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining config files, environment variables and
/// CLI arguments.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig, SettingsError> {
	load_with_env(cli, None)
}

fn load_with_env(
	cli: &CliArgs,
	env_vars: Option<HashMap<String, String>>,
) -> Result<ResolvedConfig, SettingsError> {
	let mut raw: RawConfig = build_config(cli, env_vars)?.try_deserialize()?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli.root.clone())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use scopefind::SortKey;
	use tempfile::tempdir;

	use super::*;

	fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
		Some(
			pairs
				.iter()
				.map(|(key, value)| (key.to_string(), value.to_string()))
				.collect(),
		)
	}

	#[test]
	fn layers_apply_in_precedence_order() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("scopefind.toml");
		fs::write(
			&file,
			"[scan]\nscript_extension = \"rb\"\nmax_matches = 50\n\n[ui]\nsort = \"size\"\npreview_width = 90\n",
		)
		.unwrap();
		let root = dir.path().to_str().unwrap();
		let config = file.to_str().unwrap();

		let cli = CliArgs::parse_from(["scopefind", root, "-n", "-c", config]);
		let resolved = load_with_env(&cli, env(&[])).unwrap();
		assert_eq!(resolved.options.script_extension, "rb");
		assert_eq!(resolved.options.max_matches, Some(50));
		assert_eq!(resolved.sort, SortKey::Size);
		assert_eq!(resolved.preview_width, 90);

		let vars = env(&[
			("SCOPEFIND__UI__SORT", "date"),
			("SCOPEFIND__SCAN__IGNORE_DIRS", "target,dist"),
		]);
		let resolved = load_with_env(&cli, vars.clone()).unwrap();
		assert_eq!(resolved.sort, SortKey::Modified);
		assert_eq!(resolved.options.ignore_dirs, ["target", "dist"]);
		assert_eq!(resolved.options.script_extension, "rb");

		let cli = CliArgs::parse_from(["scopefind", root, "-n", "-c", config, "--sort", "name"]);
		let resolved = load_with_env(&cli, vars).unwrap();
		assert_eq!(resolved.sort, SortKey::Name);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from([
			"scopefind",
			dir.path().to_str().unwrap(),
			"-n",
			"-c",
			missing.to_str().unwrap(),
		]);
		assert!(matches!(
			load_with_env(&cli, env(&[])),
			Err(SettingsError::Load(_))
		));
	}

	#[test]
	fn malformed_value_in_file_is_reported() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("bad.toml");
		fs::write(&file, "[ui]\ntheme = \"neon\"\n").unwrap();
		let cli = CliArgs::parse_from([
			"scopefind",
			dir.path().to_str().unwrap(),
			"-n",
			"-c",
			file.to_str().unwrap(),
		]);
		let err = load_with_env(&cli, env(&[])).unwrap_err();
		assert!(err.to_string().contains("`ui.theme` from configuration"));
	}
}
