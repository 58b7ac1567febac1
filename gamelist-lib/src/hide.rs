//! Mutation steps shared by the hiding tools.

use gamelist_core::{GameId, Gamelist};

/// Mark every game in `ids` hidden. Returns how many games changed state.
pub fn apply_hide(doc: &mut Gamelist, ids: &[GameId]) -> usize {
    let mut changed = 0;
    for &id in ids {
        if let Some(game) = doc.game_mut(id) {
            if game.set_hidden(true) {
                changed += 1;
            }
        }
    }
    changed
}

/// Remove the `<hidden>` element from every game, whatever its value.
/// Nothing else is touched. Returns how many games were hidden before.
pub fn unhide_all(doc: &mut Gamelist) -> usize {
    let mut unhidden = 0;
    for (_, game) in doc.games_mut() {
        if game.set_hidden(false) {
            unhidden += 1;
        }
    }
    unhidden
}
