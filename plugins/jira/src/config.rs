//! Resolved plugin configuration.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use czjira_config::{CommitTypeSetting, PromptStyleSetting, Settings};
use czjira_plugin::{BumpType, PluginError, PluginResult};
use regex::Regex;
use tracing::debug;

use crate::Defaults;

static JIRA_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(http|https)://.*?\.net").expect("invalid regex"));

const JIRA_URL_EXAMPLE: &str = "https://<project name>.atlassian.net";

/// Settings layered over [`Defaults`], validated once and immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraConfig {
    /// Jira base URL without trailing slash.
    pub jira_url: String,
    /// Default project key, used when the answer set has none.
    pub project_key: Option<String>,
    pub commit_types: Vec<CommitTypeSetting>,
    pub minimum_length: usize,
    pub prompt_style: Vec<PromptStyleSetting>,
    pub bump_map: BTreeMap<String, BumpType>,
    pub change_type_map: BTreeMap<String, String>,
    pub change_type_order: Vec<String>,
}

impl JiraConfig {
    /// Resolves settings against defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::RequiredConfig`] when `jira_url` is missing and
    /// [`PluginError::IncorrectConfig`] when `jira_url` or a `bump_map` value
    /// is malformed.
    pub fn resolve(settings: &Settings, defaults: Defaults) -> PluginResult<Self> {
        let jira_url = resolve_jira_url(settings.jira_url.as_deref())?;

        let bump_map = match &settings.bump_map {
            Some(map) => map
                .iter()
                .map(|(change_type, bump)| Ok((change_type.clone(), bump.parse::<BumpType>()?)))
                .collect::<PluginResult<_>>()?,
            None => defaults.bump_map,
        };

        let project_key = settings
            .jira_project_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from);

        let config = Self {
            jira_url,
            project_key,
            commit_types: settings
                .commit_types
                .clone()
                .unwrap_or(defaults.commit_types),
            minimum_length: settings
                .commit_message_minimum_length
                .unwrap_or(defaults.minimum_length),
            prompt_style: settings
                .prompt_style
                .clone()
                .unwrap_or(defaults.prompt_style),
            bump_map,
            change_type_map: settings
                .change_type_map
                .clone()
                .unwrap_or(defaults.change_type_map),
            change_type_order: settings
                .change_type_order
                .clone()
                .unwrap_or(defaults.change_type_order),
        };

        debug!(
            jira_url = %config.jira_url,
            project_key = ?config.project_key,
            commit_types = config.commit_types.len(),
            minimum_length = config.minimum_length,
            "resolved jira configuration"
        );

        Ok(config)
    }
}

fn resolve_jira_url(jira_url: Option<&str>) -> PluginResult<String> {
    let jira_url = jira_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or(PluginError::RequiredConfig("jira_url"))?;

    if !JIRA_URL_RE.is_match(jira_url) {
        return Err(PluginError::IncorrectConfig(format!(
            "Config `jira_url` is incorrect, expected something like {JIRA_URL_EXAMPLE}, got {jira_url}"
        )));
    }

    Ok(jira_url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(jira_url: &str) -> Settings {
        Settings {
            jira_url: Some(jira_url.to_string()),
            ..Settings::default()
        }
    }

    #[test]
    fn test_missing_url() {
        let err = JiraConfig::resolve(&Settings::default(), Defaults::builtin()).unwrap_err();
        assert!(matches!(err, PluginError::RequiredConfig("jira_url")));
        assert_eq!(err.to_string(), "Config `jira_url` is required.");
    }

    #[test]
    fn test_blank_url_is_missing() {
        let err = JiraConfig::resolve(&settings("  "), Defaults::builtin()).unwrap_err();
        assert!(matches!(err, PluginError::RequiredConfig(_)));
    }

    #[test]
    fn test_malformed_url() {
        for url in ["acme.atlassian.net", "ftp://acme.atlassian.net", "https://acme.com"] {
            let err = JiraConfig::resolve(&settings(url), Defaults::builtin()).unwrap_err();
            assert!(matches!(err, PluginError::IncorrectConfig(_)), "{url}");
            assert!(err.to_string().contains(JIRA_URL_EXAMPLE));
        }
    }

    #[test]
    fn test_valid_urls() {
        for url in ["https://acme.atlassian.net", "http://jira.example.net"] {
            let config = JiraConfig::resolve(&settings(url), Defaults::builtin()).unwrap();
            assert_eq!(config.jira_url, url);
        }
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config =
            JiraConfig::resolve(&settings("https://acme.atlassian.net/"), Defaults::builtin())
                .unwrap();
        assert_eq!(config.jira_url, "https://acme.atlassian.net");
    }

    #[test]
    fn test_defaults_applied() {
        let config =
            JiraConfig::resolve(&settings("https://acme.atlassian.net"), Defaults::builtin())
                .unwrap();
        let defaults = Defaults::builtin();

        assert!(config.project_key.is_none());
        assert_eq!(config.minimum_length, 32);
        assert_eq!(config.commit_types, defaults.commit_types);
        assert_eq!(config.prompt_style, defaults.prompt_style);
        assert_eq!(config.bump_map, defaults.bump_map);
        assert_eq!(config.change_type_order, defaults.change_type_order);
    }

    #[test]
    fn test_settings_override_defaults() {
        let settings = Settings {
            jira_project_key: Some("CZ".to_string()),
            commit_message_minimum_length: Some(10),
            commit_types: Some(vec![CommitTypeSetting {
                value: "chore".to_string(),
                name: "chore: housekeeping".to_string(),
            }]),
            bump_map: Some(BTreeMap::from([("chore".to_string(), "patch".to_string())])),
            ..settings("https://acme.atlassian.net")
        };

        let config = JiraConfig::resolve(&settings, Defaults::builtin()).unwrap();
        assert_eq!(config.project_key.as_deref(), Some("CZ"));
        assert_eq!(config.minimum_length, 10);
        assert_eq!(config.commit_types.len(), 1);
        assert_eq!(config.bump_map.len(), 1);
        assert_eq!(config.bump_map.get("chore"), Some(&BumpType::Patch));
    }

    #[test]
    fn test_blank_project_key_is_none() {
        let settings = Settings {
            jira_project_key: Some(String::new()),
            ..settings("https://acme.atlassian.net")
        };
        let config = JiraConfig::resolve(&settings, Defaults::builtin()).unwrap();
        assert!(config.project_key.is_none());
    }

    #[test]
    fn test_invalid_bump_map_value() {
        let settings = Settings {
            bump_map: Some(BTreeMap::from([("feat".to_string(), "HUGE".to_string())])),
            ..settings("https://acme.atlassian.net")
        };
        let err = JiraConfig::resolve(&settings, Defaults::builtin()).unwrap_err();
        assert!(matches!(err, PluginError::IncorrectConfig(_)));
    }

    #[test]
    fn test_caller_supplied_defaults() {
        let defaults = Defaults {
            minimum_length: 5,
            ..Defaults::builtin()
        };
        let config =
            JiraConfig::resolve(&settings("https://acme.atlassian.net"), defaults).unwrap();
        assert_eq!(config.minimum_length, 5);
    }
}
