//! Hide games matching any of a set of independently enabled predicates.

use gamelist_core::{GameId, GameRecord, Gamelist, GamelistError};

/// Which predicates are enabled. A game is a candidate when it is visible and
/// at least one enabled predicate matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HideCriteria {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Description missing, empty, or whitespace only.
    pub empty_desc: bool,
    /// Rating strictly below this value (0.0 to 1.0).
    pub rating_below: Option<f32>,
    /// No image reference.
    pub no_image: bool,
    /// Case-insensitive substring of the genre.
    pub genre: Option<String>,
}

impl HideCriteria {
    /// True when no predicate is enabled. Empty substrings count as disabled.
    pub fn is_empty(&self) -> bool {
        non_empty(&self.title).is_none()
            && !self.empty_desc
            && self.rating_below.is_none()
            && !self.no_image
            && non_empty(&self.genre).is_none()
    }

    /// Reject an out-of-range rating threshold or a run with nothing enabled.
    pub fn validate(&self) -> Result<(), GamelistError> {
        if let Some(threshold) = self.rating_below {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(GamelistError::InvalidThreshold(threshold));
            }
        }
        if self.is_empty() {
            return Err(GamelistError::no_criteria(
                "use at least one of --hide-title, --hide-empty-desc, --hide-rating, --hide-no-image, --hide-genre",
            ));
        }
        Ok(())
    }

    /// Whether any enabled predicate matches. Hidden games never match.
    pub fn matches(&self, game: &GameRecord) -> bool {
        if game.is_hidden() {
            return false;
        }

        let title_match = non_empty(&self.title)
            .is_some_and(|needle| contains_ignore_case(game.name(), needle));
        let desc_match = self.empty_desc && is_blank(game.desc());
        let rating_match = self
            .rating_below
            .is_some_and(|threshold| game.rating().is_some_and(|rating| rating < threshold));
        let image_match = self.no_image && is_blank(game.image());
        let genre_match = non_empty(&self.genre)
            .is_some_and(|needle| contains_ignore_case(game.genre(), needle));

        title_match || desc_match || rating_match || image_match || genre_match
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// Validate `criteria` and return the matching games in document order, each
/// listed once even when several predicates match it.
pub fn plan_criteria_hide(
    doc: &Gamelist,
    criteria: &HideCriteria,
) -> Result<Vec<GameId>, GamelistError> {
    criteria.validate()?;
    Ok(doc
        .games()
        .filter(|(_, game)| criteria.matches(game))
        .map(|(id, _)| id)
        .collect())
}

#[cfg(test)]
#[path = "tests/criteria_tests.rs"]
mod tests;
