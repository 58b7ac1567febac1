use std::io::BufRead;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::validate::{
    BrokenPath, ValidateProgress, base_dir, find_broken_paths, prune_broken_paths,
};

use crate::CliError;
use crate::commands::{confirm, open_gamelist};

fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        pb.set_style(style.tick_chars("/-\\|"));
    }
    pb
}

/// Run the validate command.
pub(crate) fn run_validate<R: BufRead>(
    gamelist: &Path,
    quiet: bool,
    input: &mut R,
) -> Result<(), CliError> {
    let mut doc = open_gamelist(gamelist)?;
    let base = base_dir(gamelist);

    log::info!(
        "Checking game paths in: {}",
        gamelist.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let pb = spinner(quiet);
    let progress_callback = |progress: ValidateProgress| match progress {
        ValidateProgress::Checking {
            ref path,
            index,
            total,
        } => {
            pb.set_message(format!("[{}/{}] Checking {}", index + 1, total, path));
            pb.tick();
        }
        ValidateProgress::Done => pb.finish_and_clear(),
    };
    let broken = find_broken_paths(&doc, &base, &progress_callback);
    pb.finish_and_clear();

    if broken.is_empty() {
        log::info!(
            "{} All game paths are valid!",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        );
        return Ok(());
    }

    print_broken_paths(&broken);
    crate::log_blank();

    if !confirm(input, "Do you want to remove these invalid entries? (y/n):")? {
        log::info!("{}", "No changes made.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    let summary = prune_broken_paths(&mut doc, &broken, gamelist)?;
    log::info!(
        "{} {} invalid entries removed",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.removed,
    );
    log::info!(
        "  Original file backed up as {}",
        summary
            .backup
            .display()
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    Ok(())
}

fn print_broken_paths(broken: &[BrokenPath]) {
    log::info!("{}", "Invalid game entries:".if_supports_color(Stdout, |t| t.bold()));
    for entry in broken {
        log::info!(
            "  {} {}: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            entry.path,
            entry.name.as_deref().unwrap_or("N/A"),
        );
    }
    log::info!("Total invalid entries: {}", broken.len());
}

#[cfg(test)]
#[path = "../tests/validate_tests.rs"]
mod tests;
