//! Gamelist data model and XML I/O.
//!
//! A gamelist is the `gamelist.xml` file ES-DE (and EmulationStation before
//! it) keeps per system: a root element holding one `<game>` per ROM. This
//! crate reads it into a [`Gamelist`], gives typed access to the fields the
//! tools care about, and writes it back without losing the ones they don't.

pub mod document;
pub mod error;
pub mod record;

pub use document::{GameId, Gamelist, Node, parse_gamelist, parse_gamelist_file};
pub use error::GamelistError;
pub use record::{Field, GameRecord, tags};
