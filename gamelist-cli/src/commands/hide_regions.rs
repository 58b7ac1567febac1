use std::io::BufRead;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::{RegionFilter, apply_hide, plan_region_hide};

use crate::CliError;
use crate::commands::{confirm, open_gamelist};

/// Run the hide-regions command.
pub(crate) fn run_hide_regions<R: BufRead>(
    gamelist: &Path,
    allowed: &[String],
    input: &mut R,
) -> Result<(), CliError> {
    let mut doc = open_gamelist(gamelist)?;
    let filter = RegionFilter::new(allowed);
    log::info!(
        "{}",
        format!("Allowed regions: {}", filter.allowed().join(", "))
            .if_supports_color(Stdout, |t| t.dimmed()),
    );

    let affected = plan_region_hide(&doc, &filter);
    log::info!("Total games affected: {}", affected.len());
    if affected.is_empty() {
        return Ok(());
    }

    log::info!("{}", "Affected game entries:".if_supports_color(Stdout, |t| t.bold()));
    for game in affected.iter().filter_map(|id| doc.game(*id)) {
        log::info!("  {}", game.display_name());
    }
    crate::log_blank();

    if !confirm(input, "You are about to affect these items, are you sure? [y/n]")? {
        log::info!("{}", "No changes were written.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    let hidden = apply_hide(&mut doc, &affected);
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
#[path = "../tests/hide_regions_tests.rs"]
mod tests;
