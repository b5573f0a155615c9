//! Resolved settings for a single run.

use tracing::{debug, warn};

use crate::{Config, SectionLabels};

/// Default GitHub host.
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Settings after merging flags, environment and the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Repository identifier in `owner/name` form, if known.
    pub repository: Option<String>,

    /// Base URL of the GitHub host, without trailing slash.
    pub server_url: String,

    /// Section headings.
    pub labels: SectionLabels,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repository: None,
            server_url: DEFAULT_SERVER_URL.to_string(),
            labels: SectionLabels::default(),
        }
    }
}

impl Settings {
    /// Merges explicit values over a config file.
    ///
    /// `repository` and `server_url` come from flags or the environment and
    /// win over the file. A missing repository is not an error: links are
    /// still produced, with an empty repository segment.
    #[must_use]
    pub fn resolve(
        config: Config,
        repository: Option<String>,
        server_url: Option<String>,
    ) -> Self {
        let repository = repository.or(config.github.repository);
        if repository.is_none() {
            warn!("no repository configured, pull request links will be incomplete");
        }

        let server_url = server_url
            .or(config.github.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let server_url = server_url.trim_end_matches('/').to_string();

        debug!(?repository, %server_url, "resolved settings");

        Self {
            repository,
            server_url,
            labels: config.sections,
        }
    }

    /// Sets the repository identifier.
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// Returns the URL prefix that a pull request number is appended to.
    #[must_use]
    pub fn pull_url_prefix(&self) -> String {
        format!(
            "{}/{}/pull/",
            self.server_url,
            self.repository.as_deref().unwrap_or_default()
        )
    }
}
