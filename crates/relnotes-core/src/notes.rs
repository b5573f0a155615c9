//! Grouping and Markdown rendering.

use std::fmt::{self, Write};

use relnotes_config::SectionLabels;
use tracing::debug;

use crate::{ChangeRecord, PullRequestLinker};

/// Release-note section a change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `type = "feat"`
    Features,
    /// `type = "fix"`
    BugFixes,
    /// Any other type, or none.
    Other,
}

impl Category {
    /// All categories in render order.
    pub const ALL: [Self; 3] = [Self::Features, Self::BugFixes, Self::Other];

    /// Classifies a record by its `type` tag.
    ///
    /// Matching is exact: `"Feat"` or `" fix"` land in [`Category::Other`].
    #[must_use]
    pub fn from_type(kind: Option<&str>) -> Self {
        match kind {
            Some("feat") => Self::Features,
            Some("fix") => Self::BugFixes,
            _ => Self::Other,
        }
    }

    /// Returns this category's heading from `labels`.
    #[must_use]
    pub fn label(self, labels: &SectionLabels) -> &str {
        match self {
            Self::Features => &labels.features,
            Self::BugFixes => &labels.bug_fixes,
            Self::Other => &labels.other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Features => write!(f, "features"),
            Self::BugFixes => write!(f, "bug-fixes"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Linked descriptions grouped by category, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseNotes {
    features: Vec<String>,
    bug_fixes: Vec<String>,
    others: Vec<String>,
    skipped: usize,
}

impl ReleaseNotes {
    /// Creates empty release notes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds release notes from `records`, linking pull request references.
    ///
    /// Records with a blank or missing description are counted as skipped
    /// and otherwise ignored.
    #[must_use]
    pub fn collect(records: &[ChangeRecord], linker: &PullRequestLinker) -> Self {
        let mut notes = Self::new();
        for record in records {
            notes.push(record, linker);
        }
        notes
    }

    /// Adds one record.
    pub fn push(&mut self, record: &ChangeRecord, linker: &PullRequestLinker) {
        let Some(description) = record.trimmed_description() else {
            debug!(kind = ?record.kind, "skipping record without description");
            self.skipped += 1;
            return;
        };

        let category = Category::from_type(record.kind.as_deref());
        let entry = linker.rewrite(description).into_owned();
        self.entries_mut(category).push(entry);
    }

    /// Returns the entries of a category, in insertion order.
    #[must_use]
    pub fn entries(&self, category: Category) -> &[String] {
        match category {
            Category::Features => &self.features,
            Category::BugFixes => &self.bug_fixes,
            Category::Other => &self.others,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Features => &mut self.features,
            Category::BugFixes => &mut self.bug_fixes,
            Category::Other => &mut self.others,
        }
    }

    /// Number of records dropped for lacking a description.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns true if no category has entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.entries(*c).is_empty())
    }

    /// Renders the notes as Markdown.
    ///
    /// Each non-empty category becomes a `###` heading, one bullet per entry
    /// and a trailing blank line. Empty categories are omitted, so notes with
    /// no entries render to an empty string.
    #[must_use]
    pub fn render(&self, labels: &SectionLabels) -> String {
        let mut output = String::new();

        for category in Category::ALL {
            let entries = self.entries(category);
            if entries.is_empty() {
                continue;
            }

            _ = writeln!(output, "### {}", category.label(labels));
            for entry in entries {
                _ = writeln!(output, "- {entry}");
            }
            output.push('\n');
        }

        output
    }
}
