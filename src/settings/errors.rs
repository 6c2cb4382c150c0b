use std::fmt;
use std::io;

use scopefind::RootError;
use thiserror::Error;

/// Which layer supplied an offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
	/// Config files or environment variables.
	Configuration,
	CommandLine,
}

impl fmt::Display for Origin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Origin::Configuration => f.write_str("configuration"),
			Origin::CommandLine => f.write_str("command line"),
		}
	}
}

/// Failures while loading or validating settings. All abort startup.
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("failed to load configuration: {0}")]
	Load(#[from] config::ConfigError),
	#[error("invalid value {value:?} for `{key}` from {origin}: {reason}")]
	Invalid {
		key: &'static str,
		value: String,
		origin: Origin,
		reason: String,
	},
	#[error("failed to determine working directory")]
	WorkingDir(#[source] io::Error),
	#[error(transparent)]
	InvalidRoot(#[from] RootError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_value_names_key_value_and_origin() {
		let err = SettingsError::Invalid {
			key: "ui.sort",
			value: "sideways".into(),
			origin: Origin::CommandLine,
			reason: "expected name, date or size".into(),
		};
		insta::assert_snapshot!(
			err.to_string(),
			@r#"invalid value "sideways" for `ui.sort` from command line: expected name, date or size"#
		);
	}
}
