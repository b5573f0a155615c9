//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "relnotes.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read or is not
/// valid TOML.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_name() {
        assert_eq!(CONFIG_FILE_NAME, "relnotes.toml");
    }

    #[test]
    fn test_load_config_not_found() {
        let result = load_config("/nonexistent/path/relnotes.toml");
        match result {
            Err(ConfigError::NotFound(path)) => {
                assert!(path.to_string_lossy().contains("relnotes.toml"));
            }
            other => panic!("Expected NotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_custom_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"
            [github]
            repository = "acme/widget"

            [sections]
            bug_fixes = "Fixes"
            other = "Misc"
        "#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.github.repository.as_deref(), Some("acme/widget"));
        assert_eq!(config.github.server_url, None);
        assert_eq!(config.sections.features, "Features");
        assert_eq!(config.sections.bug_fixes, "Fixes");
        assert_eq!(config.sections.other, "Misc");
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::InvalidToml(_))));
    }
}
