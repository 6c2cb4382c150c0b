//! Log capture for the terminal UI.
//!
//! Records go to `tui-logger`'s in-memory buffer and are shown in the log
//! pane. `init_logger` starts the thread that moves buffered records into the
//! widget history. Nothing is printed to stdout or written to disk.

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Install the in-memory logger at `level`. Fails if a logger is already set.
pub fn initialize(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(level).map_err(|err| anyhow!("failed to install logger: {err}"))?;
	tui_logger::set_default_level(level);
	log::debug!("logging initialized at {level}");
	Ok(())
}
