//! Interactive duplicate resolution as a state machine.
//!
//! The session walks the duplicate groups of a gamelist in title order. For
//! each group it hands out, the caller shows the members and feeds back a
//! [`Choice`]. Keeping a member unhides it and hides the rest of its group,
//! directly in the document. The caller writes the document once, after
//! [`DuplicateSession::finish`], and only for [`SessionOutcome::Saved`].

use gamelist_core::Gamelist;

use crate::dups::{DuplicateGroup, find_duplicates};

/// Filters controlling which groups the session visits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Skip every group before the first one whose title contains this text
    /// (case-insensitive). Later groups are all visited, matching or not.
    pub start_at: Option<String>,
    /// Skip groups where exactly one member is visible already.
    pub skip_existing: bool,
}

/// A response to one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Keep the member at this 1-based position, hide the others.
    Keep(usize),
    /// Leave the group unchanged.
    Skip,
    /// Stop and save what was chosen so far.
    Quit,
    /// Stop and throw away everything chosen in this run.
    Discard,
}

impl Choice {
    /// Parse a line of user input for a group of `group_len` members.
    /// Empty, unknown, or out-of-range input is a skip.
    pub fn parse(input: &str, group_len: usize) -> Self {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "q" => Self::Quit,
            "x" => Self::Discard,
            _ => match input.parse::<usize>() {
                Ok(n) if (1..=group_len).contains(&n) => Self::Keep(n),
                _ => Self::Skip,
            },
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// At least one choice was applied; the document should be written.
    Saved { applied: usize },
    /// Nothing was chosen; leave the file alone.
    Unchanged,
    /// The user discarded the run; the document was restored.
    Discarded,
}

pub struct DuplicateSession<'a> {
    doc: &'a mut Gamelist,
    original: Gamelist,
    groups: Vec<DuplicateGroup>,
    options: SessionOptions,
    cursor: usize,
    current: Option<usize>,
    started: bool,
    stopped: bool,
    discarded: bool,
    applied: usize,
}

impl<'a> DuplicateSession<'a> {
    pub fn new(doc: &'a mut Gamelist, options: SessionOptions) -> Self {
        let groups = find_duplicates(doc).groups;
        let original = doc.clone();
        let started = options.start_at.is_none();
        Self {
            doc,
            original,
            groups,
            options,
            cursor: 0,
            current: None,
            started,
            stopped: false,
            discarded: false,
            applied: 0,
        }
    }

    /// Number of duplicate groups in the document.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of choices applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Advance to the next group to show, with its 1-based position among
    /// all groups. `None` once the groups run out or the user stopped.
    pub fn next_group(&mut self) -> Option<(usize, &DuplicateGroup)> {
        self.current = None;
        if self.stopped {
            return None;
        }

        while self.cursor < self.groups.len() {
            let index = self.cursor;
            self.cursor += 1;
            let group = &self.groups[index];

            if !self.started {
                let needle = self.options.start_at.as_deref().unwrap_or_default();
                if !group.title.to_lowercase().contains(&needle.to_lowercase()) {
                    continue;
                }
                log::debug!("Starting at {:?}", group.title);
                self.started = true;
            }

            if self.options.skip_existing && group.visible_count() == 1 {
                log::debug!("Skipping {:?}: one member already visible", group.title);
                continue;
            }

            self.current = Some(index);
            return Some((index + 1, &self.groups[index]));
        }

        None
    }

    /// Apply a choice to the group last returned by [`next_group`].
    /// Returns `false` once the session has stopped.
    ///
    /// [`next_group`]: DuplicateSession::next_group
    pub fn apply(&mut self, choice: Choice) -> bool {
        match choice {
            Choice::Keep(position) => {
                let Some(index) = self.current.take() else {
                    return !self.stopped;
                };
                let group = &self.groups[index];
                if position == 0 || position > group.len() {
                    return true;
                }
                for (i, entry) in group.entries.iter().enumerate() {
                    if let Some(game) = self.doc.game_mut(entry.id) {
                        game.set_hidden(i + 1 != position);
                    }
                }
                self.applied += 1;
                true
            }
            Choice::Skip => {
                self.current = None;
                true
            }
            Choice::Quit => {
                self.stopped = true;
                false
            }
            Choice::Discard => {
                self.stopped = true;
                self.discarded = true;
                false
            }
        }
    }

    /// End the session. A discarded run puts the document back the way it
    /// was loaded.
    pub fn finish(self) -> SessionOutcome {
        if self.discarded {
            *self.doc = self.original;
            SessionOutcome::Discarded
        } else if self.applied > 0 {
            SessionOutcome::Saved {
                applied: self.applied,
            }
        } else {
            SessionOutcome::Unchanged
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
