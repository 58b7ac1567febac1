use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::Settings;
use gamelist_lib::settings::{load_settings_string, settings_path};

/// Show the settings file and the values the other commands will use.
pub(crate) fn run_settings(settings: &Settings) {
    let path = settings_path();

    log::info!("{}", "gamelist Settings".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    log::info!(
        "  Allowed regions: {}",
        settings.allowed_regions(None).join(", "),
    );
    log::info!(
        "  Duplicate resolver gamelist: {}",
        settings.dups_gamelist(None).display(),
    );

    if let Some(contents) = load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
}
