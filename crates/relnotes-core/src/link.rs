//! Pull request reference rewriting.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static PR_REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#(\d+)\)").expect("invalid regex"));

/// Rewrites `(#123)` references into Markdown links to the pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLinker {
    prefix: String,
}

impl PullRequestLinker {
    /// Creates a linker that appends pull request numbers to `prefix`.
    ///
    /// The prefix is used verbatim, e.g. `https://github.com/acme/widget/pull/`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the URL prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replaces every `(#N)` in `text` with `[#N](<prefix>N)`.
    ///
    /// Text without references is returned borrowed.
    #[must_use]
    pub fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        PR_REFERENCE_RE.replace_all(text, |caps: &Captures<'_>| {
            let number = &caps[1];
            format!("[#{number}]({}{number})", self.prefix)
        })
    }
}
