mod cli;
mod settings;

use anyhow::Result;
use cli::parse_cli;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in scopefind::ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	scopefind::logging::initialize(resolved.log_level)?;

	if cli.print_config {
		resolved.print_summary();
	}

	log::info!("searching under {}", resolved.root.display());
	scopefind::run(resolved.into_session())
}
