//! Find games whose ROM path no longer exists and prune them.

use std::fs;
use std::path::{Path, PathBuf};

use gamelist_core::{GameId, Gamelist, GamelistError};

/// A game whose `<path>` does not resolve to an existing file.
#[derive(Debug, Clone, PartialEq)]
pub struct BrokenPath {
    pub id: GameId,
    /// The path as written in the gamelist.
    pub path: String,
    pub name: Option<String>,
    /// Where the path was looked up on disk.
    pub resolved: PathBuf,
}

/// Progress updates emitted while paths are checked.
#[derive(Debug, Clone)]
pub enum ValidateProgress {
    Checking {
        path: String,
        index: usize,
        total: usize,
    },
    Done,
}

/// Result of pruning broken entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PruneSummary {
    pub removed: usize,
    /// Where the original gamelist was moved to.
    pub backup: PathBuf,
}

/// Directory that relative game paths are resolved against: the gamelist's
/// parent, or `.` for a bare file name.
pub fn base_dir(gamelist: &Path) -> PathBuf {
    match gamelist.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Absolute paths are used as-is; anything else is relative to `base`.
pub fn resolve_game_path(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// `gamelist.xml` -> `gamelist.xml.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{ext}.bak"),
        None => "bak".to_string(),
    };
    path.with_extension(ext)
}

/// Check every game's path. Games without a `<path>` element are skipped.
pub fn find_broken_paths(
    doc: &Gamelist,
    base: &Path,
    progress: &dyn Fn(ValidateProgress),
) -> Vec<BrokenPath> {
    let total = doc.len();
    let mut broken = Vec::new();

    for (index, (id, game)) in doc.games().enumerate() {
        let Some(path) = game.path() else {
            log::debug!("Skipping {} with no path", game.display_name());
            continue;
        };

        progress(ValidateProgress::Checking {
            path: path.to_string(),
            index,
            total,
        });

        let resolved = resolve_game_path(base, path);
        if !resolved.exists() {
            log::debug!("Missing: {}", resolved.display());
            broken.push(BrokenPath {
                id,
                path: path.to_string(),
                name: game.name().map(str::to_string),
                resolved,
            });
        }
    }

    progress(ValidateProgress::Done);
    broken
}

/// Remove `broken` games from `doc`, move the original file at
/// `gamelist_path` to its `.bak` path, and write the pruned document in its
/// place.
pub fn prune_broken_paths(
    doc: &mut Gamelist,
    broken: &[BrokenPath],
    gamelist_path: &Path,
) -> Result<PruneSummary, GamelistError> {
    let backup = backup_path(gamelist_path);
    fs::rename(gamelist_path, &backup)?;

    let ids: Vec<GameId> = broken.iter().map(|b| b.id).collect();
    let removed = doc.remove_games(&ids);
    doc.write_to(gamelist_path)?;

    Ok(PruneSummary { removed, backup })
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
