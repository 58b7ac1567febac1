//! Hide games released for regions or languages outside an allow-list.

use gamelist_core::{GameId, GameRecord, Gamelist};

/// Region codes kept visible when no allow-list is configured.
pub const DEFAULT_ALLOWED_REGIONS: &[&str] = &["en", "eu", "us", "wr"];

/// Code assumed for a missing (or empty) `<region>` or `<lang>`.
pub const DEFAULT_CODE: &str = "en";

/// World releases stay visible only in this language.
const WORLD_REGION: &str = "wr";
const WORLD_LANGUAGE: &str = "en";

/// Decides which region/language combinations get hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFilter {
    allowed: Vec<String>,
}

impl Default for RegionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_REGIONS.iter().copied())
    }
}

impl RegionFilter {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: allowed
                .into_iter()
                .map(|code| code.as_ref().trim().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// Hide when the region is not allowed, or when it is a world release in
    /// a language other than English (whatever the allow-list says).
    pub fn should_hide(&self, region: Option<&str>, lang: Option<&str>) -> bool {
        let region = code_or_default(region);
        let lang = code_or_default(lang);

        if !self.allowed.iter().any(|allowed| *allowed == region) {
            return true;
        }
        region == WORLD_REGION && lang != WORLD_LANGUAGE
    }

    fn should_hide_game(&self, game: &GameRecord) -> bool {
        self.should_hide(game.region(), game.lang())
    }
}

fn code_or_default(code: Option<&str>) -> String {
    match code.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_ascii_lowercase(),
        _ => DEFAULT_CODE.to_string(),
    }
}

/// Visible games the filter would hide, in document order.
pub fn plan_region_hide(doc: &Gamelist, filter: &RegionFilter) -> Vec<GameId> {
    doc.games()
        .filter(|(_, game)| !game.is_hidden())
        .filter(|(_, game)| {
            let hide = filter.should_hide_game(game);
            if hide {
                log::debug!(
                    "Hiding {} (region {:?}, lang {:?})",
                    game.display_name(),
                    game.region(),
                    game.lang()
                );
            }
            hide
        })
        .map(|(id, _)| id)
        .collect()
}

#[cfg(test)]
#[path = "tests/regions_tests.rs"]
mod tests;
