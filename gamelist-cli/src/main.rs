//! gamelist CLI
//!
//! Command-line tools for cleaning up EmulationStation `gamelist.xml`
//! catalogs: prune broken paths, hide by region or criteria, and resolve
//! duplicate titles.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use gamelist_lib::Settings;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let settings = Settings::load();
    if let Err(e) = run(cli.command, &settings, cli.quiet) {
        log::error!("{} {}", "Error:".if_supports_color(Stderr, |t| t.red()), e);
        std::process::exit(1);
    }
}

fn run(command: Commands, settings: &Settings, quiet: bool) -> Result<(), CliError> {
    let mut input = std::io::stdin().lock();

    match command {
        Commands::Validate { gamelist } => {
            commands::validate::run_validate(&gamelist, quiet, &mut input)
        }
        Commands::HideRegions {
            gamelist,
            allow_regions,
        } => {
            let allowed = settings.allowed_regions(allow_regions);
            commands::hide_regions::run_hide_regions(&gamelist, &allowed, &mut input)
        }
        Commands::Hide { gamelist, criteria } => {
            commands::hide::run_hide(&gamelist, criteria.into(), &mut input)
        }
        Commands::Dups(args) => {
            let gamelist = settings.dups_gamelist(args.gamelist.clone());
            commands::dups::run_dups(&gamelist, &args, quiet, &mut input)
        }
        Commands::Settings => {
            commands::settings::run_settings(settings);
            Ok(())
        }
    }
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
