//! Configuration loading for czjira.
//!
//! Settings live in the `[tool.commitizen]` table of `cz.toml`, `.cz.toml`
//! or `pyproject.toml`. This crate finds that table and deserializes it into
//! [`Settings`]; resolving defaults and validating values is left to the
//! plugin that consumes them.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAMES, find_and_load_config, find_and_load_config_from, load_config};
pub use schema::{CommitTypeSetting, PromptStyleSetting, Settings};
