//! Core library for relnotes.
//!
//! Turns a JSON list of change records into a categorized Markdown
//! document:
//! - [`parse_records`]: reads the JSON input into [`ChangeRecord`]s
//! - [`PullRequestLinker`]: rewrites `(#123)` references into links
//! - [`ReleaseNotes`]: groups descriptions by [`Category`] and renders them
//! - [`generate`]: the whole file-to-file conversion

mod error;
mod generate;
mod link;
mod notes;
mod record;

pub use error::{NotesError, NotesResult};
pub use generate::{Summary, format, generate};
pub use link::PullRequestLinker;
pub use notes::{Category, ReleaseNotes};
pub use record::{ChangeRecord, parse_records};
