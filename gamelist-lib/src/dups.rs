//! Duplicate detection by normalized title.
//!
//! Games whose titles normalize to the same string (see
//! [`normalize_title`]) form a duplicate group. Within a group, entries are
//! presented best-candidate first:
//!
//! 1. visible before hidden
//! 2. region `us`, then `eu`, then `wr`, then anything else (or nothing)
//! 3. language `en` before anything else (or nothing)
//!
//! Ties keep document order.

use std::collections::BTreeMap;

use gamelist_core::{GameId, GameRecord, Gamelist};

use crate::title::normalize_title;

/// Region codes in presentation order. Unlisted codes rank after these.
pub const REGION_ORDER: &[&str] = &["us", "eu", "wr"];

/// The preferred language code.
pub const PREFERRED_LANGUAGE: &str = "en";

/// Sort key for presentation order within a group: `(hidden, region, lang)`.
pub type SortKey = (u8, u8, u8);

/// A snapshot of one game as seen by the duplicate finder.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateEntry {
    pub id: GameId,
    pub path: String,
    pub name: String,
    pub region: Option<String>,
    pub lang: Option<String>,
    pub hidden: bool,
}

impl DuplicateEntry {
    /// `None` for games without a `<name>`; they take no part in grouping.
    pub fn from_record(id: GameId, game: &GameRecord) -> Option<Self> {
        Some(Self {
            id,
            path: game.path().unwrap_or_default().to_string(),
            name: game.name()?.to_string(),
            region: game.region().map(str::to_string),
            lang: game.lang().map(str::to_string),
            hidden: game.is_hidden(),
        })
    }

    pub fn sort_key(&self) -> SortKey {
        (
            u8::from(self.hidden),
            region_rank(self.region.as_deref()),
            lang_rank(self.lang.as_deref()),
        )
    }
}

/// `us` = 0, `eu` = 1, `wr` = 2, anything else = 3.
pub fn region_rank(region: Option<&str>) -> u8 {
    region
        .and_then(|r| {
            REGION_ORDER
                .iter()
                .position(|known| known.eq_ignore_ascii_case(r.trim()))
        })
        .unwrap_or(REGION_ORDER.len()) as u8
}

/// `en` = 0, anything else = 1.
pub fn lang_rank(lang: Option<&str>) -> u8 {
    match lang {
        Some(lang) if lang.trim().eq_ignore_ascii_case(PREFERRED_LANGUAGE) => 0,
        _ => 1,
    }
}

/// Games sharing one normalized title, in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub title: String,
    pub entries: Vec<DuplicateEntry>,
}

impl DuplicateGroup {
    fn new(title: String, mut entries: Vec<DuplicateEntry>) -> Self {
        // Stable: equal keys keep document order.
        entries.sort_by_key(DuplicateEntry::sort_key);
        Self { title, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many members are currently not hidden.
    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.hidden).count()
    }
}

/// All duplicate groups of a gamelist.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateReport {
    /// Groups with two or more members, sorted by normalized title.
    pub groups: Vec<DuplicateGroup>,
    /// Number of games in the whole gamelist.
    pub total_games: usize,
}

impl DuplicateReport {
    /// Games that belong to some duplicate group.
    pub fn duplicate_count(&self) -> usize {
        self.groups.iter().map(DuplicateGroup::len).sum()
    }

    /// Games that could be hidden if only one per group were kept.
    pub fn hideable_count(&self) -> usize {
        self.duplicate_count() - self.groups.len()
    }
}

/// Map every normalized title to the games carrying it, in document order.
pub fn group_by_title(doc: &Gamelist) -> BTreeMap<String, Vec<DuplicateEntry>> {
    let mut by_title: BTreeMap<String, Vec<DuplicateEntry>> = BTreeMap::new();
    for (id, game) in doc.games() {
        let Some(entry) = DuplicateEntry::from_record(id, game) else {
            log::debug!(
                "Skipping {} with no name",
                game.path().unwrap_or("N/A")
            );
            continue;
        };
        by_title
            .entry(normalize_title(&entry.name))
            .or_default()
            .push(entry);
    }
    by_title
}

/// Find every group of two or more games sharing a normalized title.
pub fn find_duplicates(doc: &Gamelist) -> DuplicateReport {
    let groups = group_by_title(doc)
        .into_iter()
        .filter(|(_, entries)| entries.len() > 1)
        .map(|(title, entries)| DuplicateGroup::new(title, entries))
        .collect();

    DuplicateReport {
        groups,
        total_games: doc.len(),
    }
}

#[cfg(test)]
#[path = "tests/dups_tests.rs"]
mod tests;
