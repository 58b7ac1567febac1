use std::io::BufRead;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::{
    Choice, DuplicateEntry, DuplicateReport, DuplicateSession, Gamelist, SessionOptions,
    SessionOutcome, find_duplicates, unhide_all,
};

use crate::CliError;
use crate::cli_types::DupsArgs;
use crate::commands::{open_gamelist, read_answer};

const PATH_WIDTH: usize = 50;
const NAME_WIDTH: usize = 50;

const KEEP_PROMPT: &str =
    "Enter the number of the game to keep (or 'q' to quit and save, 'x' to quit with nosave): ";

/// Run the dups command: unhide everything, resolve interactively, or
/// just report.
pub(crate) fn run_dups<R: BufRead>(
    gamelist: &Path,
    args: &DupsArgs,
    quiet: bool,
    input: &mut R,
) -> Result<(), CliError> {
    // The group listing goes through the logger, which --quiet silences.
    if quiet && args.interactive && !args.unhide_all {
        return Err(CliError::usage(
            "--quiet cannot be combined with dups --interactive",
        ));
    }

    let mut doc = open_gamelist(gamelist)?;

    if args.unhide_all {
        let unhidden = unhide_all(&mut doc);
        doc.write_to(gamelist)?;
        log::info!(
            "{} {} games unhidden",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            unhidden,
        );
        log::info!("Wrote file: {}", gamelist.display());
        return Ok(());
    }

    if !args.interactive {
        if args.skip || args.start_at.is_some() {
            log::warn!("--skip and --start-at only apply with --interactive");
        }
        print_report(&find_duplicates(&doc));
        return Ok(());
    }

    let options = SessionOptions {
        start_at: args.start_at.clone(),
        skip_existing: args.skip,
    };
    match resolve_interactively(&mut doc, options, input)? {
        SessionOutcome::Saved { applied } => {
            doc.write_to(gamelist)?;
            log::debug!("{applied} groups resolved");
            log::info!("Wrote file: {}", gamelist.display());
        }
        SessionOutcome::Unchanged | SessionOutcome::Discarded => log::info!("No changes"),
    }
    Ok(())
}

/// Drive a [`DuplicateSession`] from `input`, one line per group. End of
/// input counts as `q`.
pub(crate) fn resolve_interactively<R: BufRead>(
    doc: &mut Gamelist,
    options: SessionOptions,
    input: &mut R,
) -> Result<SessionOutcome, CliError> {
    let mut session = DuplicateSession::new(doc, options);
    let total = session.group_count();

    while let Some((position, group)) = session.next_group() {
        crate::log_blank();
        log::info!(
            "{}",
            format!("Duplicates Found ({position} of {total}):")
                .if_supports_color(Stdout, |t| t.bold()),
        );
        for (i, entry) in group.entries.iter().enumerate() {
            log::info!("{}. {}", i + 1, format_entry(entry));
        }
        let len = group.len();
        crate::log_blank();

        let choice = match read_answer(input, KEEP_PROMPT)? {
            Some(answer) => Choice::parse(&answer, len),
            None => Choice::Quit,
        };
        if choice == Choice::Skip {
            log::info!("Skipping");
        }
        if !session.apply(choice) {
            break;
        }
    }

    Ok(session.finish())
}

fn print_report(report: &DuplicateReport) {
    log::info!("{}", "Duplicates Found:".if_supports_color(Stdout, |t| t.bold()));
    for group in &report.groups {
        for entry in &group.entries {
            log::info!("{}", format_entry(entry));
        }
        crate::log_blank();
    }

    log::info!("Total games in the list: {}", report.total_games);
    log::info!("Number of duplicate games: {}", report.duplicate_count());
    log::info!(
        "Games that can be hidden if we only kept one of the duplicates: {}",
        report.hideable_count(),
    );
}

/// One listing line: visibility marker, padded path and name, then the
/// region/language tag.
pub(crate) fn format_entry(entry: &DuplicateEntry) -> String {
    let marker = if entry.hidden { ' ' } else { '*' };
    let path = format!("{:<width$}", entry.path, width = PATH_WIDTH);
    let name = format!("{:<width$}", entry.name, width = NAME_WIDTH);

    let mut line = format!(
        "{}{}: {}",
        marker,
        path.if_supports_color(Stdout, |t| t.bright_white()),
        name.if_supports_color(Stdout, |t| t.bright_yellow()),
    );
    if let Some(tag) = region_tag(entry.region.as_deref(), entry.lang.as_deref()) {
        line.push(' ');
        line.push_str(&tag.if_supports_color(Stdout, |t| t.bright_red()).to_string());
    }
    line
}

/// `[region:us, lang:en]`, `[region:us]`, `[lang:en]`, or nothing.
pub(crate) fn region_tag(region: Option<&str>, lang: Option<&str>) -> Option<String> {
    let region = region.filter(|r| !r.is_empty());
    let lang = lang.filter(|l| !l.is_empty());
    match (region, lang) {
        (Some(region), Some(lang)) => Some(format!("[region:{region}, lang:{lang}]")),
        (Some(region), None) => Some(format!("[region:{region}]")),
        (None, Some(lang)) => Some(format!("[lang:{lang}]")),
        (None, None) => None,
    }
}

#[cfg(test)]
#[path = "../tests/dups_tests.rs"]
mod tests;
