//! Configuration file schema.

use serde::{Deserialize, Serialize};

/// Contents of a `relnotes.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub link settings.
    #[serde(default)]
    pub github: GithubConfig,

    /// Section headings.
    #[serde(default)]
    pub sections: SectionLabels,
}

/// GitHub link settings.
///
/// Both values are normally supplied by the CI environment; the file only
/// provides a fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Base URL of the GitHub host (e.g. `https://github.com`).
    pub server_url: Option<String>,

    /// Repository identifier in `owner/name` form.
    pub repository: Option<String>,
}

/// Heading text for each release-note section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLabels {
    #[serde(default = "default_features")]
    pub features: String,

    #[serde(default = "default_bug_fixes")]
    pub bug_fixes: String,

    #[serde(default = "default_other")]
    pub other: String,
}

impl Default for SectionLabels {
    fn default() -> Self {
        Self {
            features: default_features(),
            bug_fixes: default_bug_fixes(),
            other: default_other(),
        }
    }
}

fn default_features() -> String {
    "Features".to_string()
}

fn default_bug_fixes() -> String {
    "Bug Fixes".to_string()
}

fn default_other() -> String {
    "Other Changes".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = SectionLabels::default();
        assert_eq!(labels.features, "Features");
        assert_eq!(labels.bug_fixes, "Bug Fixes");
        assert_eq!(labels.other, "Other Changes");
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: Config = toml::from_str(
            r#"
            [sections]
            features = "New Features"
        "#,
        )
        .unwrap();

        assert_eq!(config.sections.features, "New Features");
        assert_eq!(config.sections.bug_fixes, "Bug Fixes");
        assert_eq!(config.sections.other, "Other Changes");
    }

    #[test]
    fn test_github_table() {
        let config: Config = toml::from_str(
            r#"
            [github]
            server_url = "https://ghe.example.com"
            repository = "acme/widget"
        "#,
        )
        .unwrap();

        assert_eq!(
            config.github.server_url.as_deref(),
            Some("https://ghe.example.com")
        );
        assert_eq!(config.github.repository.as_deref(), Some("acme/widget"));
    }
}
