//! A single `<game>` entry and typed access to its fields.
//!
//! Records keep every child element they were read with, in document order,
//! so rewriting a gamelist does not drop fields this crate does not know
//! about (`developer`, `releasedate`, `marquee`, ...). The typed accessors
//! return `None` when an element is absent and `Some("")` when it is present
//! but empty; callers decide what a missing value defaults to.

/// Element names of the fields the tools read or write.
pub mod tags {
    pub const GAME: &str = "game";
    pub const PATH: &str = "path";
    pub const NAME: &str = "name";
    pub const REGION: &str = "region";
    pub const LANG: &str = "lang";
    pub const GENRE: &str = "genre";
    pub const RATING: &str = "rating";
    pub const DESC: &str = "desc";
    pub const IMAGE: &str = "image";
    pub const HIDDEN: &str = "hidden";
}

/// Text written into `<hidden>` when a record is hidden.
pub const HIDDEN_TRUE: &str = "true";

/// One child element of a `<game>`: a tag and its (unescaped) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub tag: String,
    pub value: String,
}

impl Field {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// A game entry from a gamelist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameRecord {
    attributes: Vec<(String, String)>,
    fields: Vec<Field>,
}

impl GameRecord {
    /// Create a record with the two fields every entry is expected to carry.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self::default()
            .with_field(tags::PATH, path)
            .with_field(tags::NAME, name)
    }

    pub(crate) fn with_attributes(attributes: Vec<(String, String)>) -> Self {
        Self {
            attributes,
            fields: Vec::new(),
        }
    }

    /// Builder-style variant of [`GameRecord::set_field`].
    pub fn with_field(mut self, tag: &str, value: impl Into<String>) -> Self {
        self.set_field(tag, value);
        self
    }

    /// Attributes of the `<game>` tag (e.g. `id`, `source`).
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// All child elements in document order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Text of the first child element named `tag`.
    pub fn field(&self, tag: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.tag == tag)
            .map(|f| f.value.as_str())
    }

    /// Update the first element named `tag`, or append one.
    pub fn set_field(&mut self, tag: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.tag == tag) {
            Some(field) => field.value = value,
            None => self.fields.push(Field::new(tag, value)),
        }
    }

    /// Remove every element named `tag`. Returns whether anything was removed.
    pub fn remove_field(&mut self, tag: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| f.tag != tag);
        self.fields.len() != before
    }

    pub fn path(&self) -> Option<&str> {
        self.field(tags::PATH)
    }

    pub fn name(&self) -> Option<&str> {
        self.field(tags::NAME)
    }

    pub fn region(&self) -> Option<&str> {
        self.field(tags::REGION)
    }

    pub fn lang(&self) -> Option<&str> {
        self.field(tags::LANG)
    }

    pub fn genre(&self) -> Option<&str> {
        self.field(tags::GENRE)
    }

    pub fn desc(&self) -> Option<&str> {
        self.field(tags::DESC)
    }

    pub fn image(&self) -> Option<&str> {
        self.field(tags::IMAGE)
    }

    /// Rating from 0.0 to 1.0. Text that is not a number reads as `None`.
    pub fn rating(&self) -> Option<f32> {
        let text = self.field(tags::RATING)?;
        match text.trim().parse::<f32>() {
            Ok(rating) => Some(rating),
            Err(_) => {
                log::debug!(
                    "Ignoring unparseable rating {:?} on {}",
                    text,
                    self.display_name()
                );
                None
            }
        }
    }

    /// Whether the record carries `<hidden>true</hidden>`.
    pub fn is_hidden(&self) -> bool {
        self.field(tags::HIDDEN)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case(HIDDEN_TRUE))
    }

    /// Hide or unhide the record. Unhiding removes the `<hidden>` element
    /// entirely. Returns whether the hidden state changed.
    pub fn set_hidden(&mut self, hidden: bool) -> bool {
        let was_hidden = self.is_hidden();
        if hidden {
            self.set_field(tags::HIDDEN, HIDDEN_TRUE);
        } else {
            self.remove_field(tags::HIDDEN);
        }
        was_hidden != hidden
    }

    /// Name for user-facing listings: the title, else the path, else `N/A`.
    pub fn display_name(&self) -> &str {
        self.name().or_else(|| self.path()).unwrap_or("N/A")
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
