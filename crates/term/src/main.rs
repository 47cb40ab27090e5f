//! `mapart`: block presets and share links for map art.

mod app;
mod cli;
mod commands;

use anyhow::Context;
use app::App;
use clap::Parser;
use cli::Cli;
use mapart_config::Config;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => Config::load(path),
		None => Config::load_default(),
	}
	.context("failed to load config")?;

	let mut app = App::open(&config, cli.state.as_deref(), cli.mc_version.as_deref())?;

	let mut stdout = std::io::stdout().lock();
	let changed = commands::run(&cli.command, &mut app.session, &mut stdout)?;
	if changed || cli.mc_version.is_some() {
		app.persist()?;
	}
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("MAPART_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("mapart=debug,mapart_session=debug,mapart_preset=debug,mapart_registry=debug,info")
			} else {
				EnvFilter::new("warn")
			}
		});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
