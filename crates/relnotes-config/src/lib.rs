//! Configuration for relnotes.
//!
//! Settings come from three layers, highest precedence first:
//! command-line flags and environment variables, an optional
//! `relnotes.toml` file, and built-in defaults.

mod error;
mod loader;
mod schema;
mod settings;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, load_config};
pub use schema::{Config, GithubConfig, SectionLabels};
pub use settings::{DEFAULT_SERVER_URL, Settings};
