//! Catalog maintenance operations over a [`Gamelist`].
//!
//! Every tool follows the same shape: a pure planning function picks the
//! affected games, the caller shows them and asks for confirmation, and a
//! single mutation step applies the plan before the document is written
//! once.

pub mod criteria;
pub mod dups;
pub mod hide;
pub mod regions;
pub mod session;
pub mod settings;
pub mod title;
pub mod validate;

pub use gamelist_core::{GameId, GameRecord, Gamelist, GamelistError, tags};

pub use criteria::{HideCriteria, plan_criteria_hide};
pub use dups::{DuplicateEntry, DuplicateGroup, DuplicateReport, find_duplicates};
pub use hide::{apply_hide, unhide_all};
pub use regions::{RegionFilter, plan_region_hide};
pub use session::{Choice, DuplicateSession, SessionOptions, SessionOutcome};
pub use settings::Settings;
pub use title::normalize_title;
pub use validate::{BrokenPath, PruneSummary, ValidateProgress, find_broken_paths};
