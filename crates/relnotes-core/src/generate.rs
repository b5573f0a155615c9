//! File-to-file release note generation.

use std::path::Path;

use relnotes_config::Settings;
use tracing::{debug, info};

use crate::{Category, ChangeRecord, NotesError, NotesResult, PullRequestLinker, ReleaseNotes};

/// Entry counts of a generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub features: usize,
    pub bug_fixes: usize,
    pub others: usize,
    /// Records dropped for lacking a description.
    pub skipped: usize,
}

impl Summary {
    fn of(notes: &ReleaseNotes) -> Self {
        Self {
            features: notes.entries(Category::Features).len(),
            bug_fixes: notes.entries(Category::BugFixes).len(),
            others: notes.entries(Category::Other).len(),
            skipped: notes.skipped(),
        }
    }

    /// Total number of rendered entries.
    #[must_use]
    pub fn total(&self) -> usize {
        self.features + self.bug_fixes + self.others
    }
}

fn collect(records: &[ChangeRecord], settings: &Settings) -> ReleaseNotes {
    let linker = PullRequestLinker::new(settings.pull_url_prefix());
    ReleaseNotes::collect(records, &linker)
}

/// Formats change records as a Markdown document.
#[must_use]
pub fn format(records: &[ChangeRecord], settings: &Settings) -> String {
    collect(records, settings).render(&settings.labels)
}

/// Reads change records from `input` and writes release notes to `output`.
///
/// The output file is created or overwritten only after the input has been
/// read and parsed in full; on any earlier failure it is left untouched.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the output
/// cannot be written.
pub fn generate(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    settings: &Settings,
) -> NotesResult<Summary> {
    let input = input.as_ref();
    let output = output.as_ref();

    debug!(?input, "reading change records");
    let json = std::fs::read_to_string(input).map_err(|source| NotesError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let records = crate::parse_records(&json)?;
    debug!(count = records.len(), "parsed change records");

    let notes = collect(&records, settings);
    let markdown = notes.render(&settings.labels);

    std::fs::write(output, markdown).map_err(|source| NotesError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let summary = Summary::of(&notes);
    info!(
        ?output,
        features = summary.features,
        bug_fixes = summary.bug_fixes,
        others = summary.others,
        skipped = summary.skipped,
        "wrote release notes"
    );

    Ok(summary)
}
