use std::io::BufRead;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::{HideCriteria, apply_hide, plan_criteria_hide};

use crate::CliError;
use crate::commands::{confirm, open_gamelist};

/// Run the hide command.
pub(crate) fn run_hide<R: BufRead>(
    gamelist: &Path,
    criteria: HideCriteria,
    input: &mut R,
) -> Result<(), CliError> {
    // Reject a bad threshold before touching the file.
    criteria.validate()?;

    let mut doc = open_gamelist(gamelist)?;
    let to_hide = plan_criteria_hide(&doc, &criteria)?;
    if to_hide.is_empty() {
        log::info!("No games matched the criteria or games are already hidden.");
        return Ok(());
    }

    for game in to_hide.iter().filter_map(|id| doc.game(*id)) {
        log::info!("{}", game.display_name());
    }
    crate::log_blank();
    log::info!(
        "Count of games that will be hidden: {}",
        to_hide.len().if_supports_color(Stdout, |t| t.bold()),
    );

    if !confirm(input, "Do you want to hide these games? (y/n)")? {
        log::info!("{}", "No changes made.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    let hidden = apply_hide(&mut doc, &to_hide);
    doc.write_to(gamelist)?;
    log::info!(
        "{} {} games hidden, changes written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        hidden,
        gamelist.display(),
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/hide_tests.rs"]
mod tests;
