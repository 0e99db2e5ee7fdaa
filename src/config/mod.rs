//! Configuration management module.
//!
//! This module handles loading and validating the conversion configuration:
//! repository and project identity, the user lookup table, label tables for
//! issue type and priority, and custom field specifications.

mod error;
mod table;

pub use error::ConfigError;
pub use table::LabelTable;

use crate::github::DEFAULT_API_URL;
use serde::Deserialize;
use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/gh2jira";
const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Source repository settings.
///
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GithubConfig {
    pub owner: String,
    pub repo: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_true")]
    pub include_comments: bool,
    #[serde(default)]
    pub include_pull_requests: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

/// Target project settings.
///
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct JiraConfig {
    pub project_key: String,
    pub project_name: String,
    #[serde(default)]
    pub external_name: Option<String>,
}

/// Label table plus the value used when no label matches.
///
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Classification {
    pub default: String,
    #[serde(default)]
    pub labels: LabelTable,
}

/// Where a custom field takes its values from.
///
#[derive(Clone, Debug, PartialEq)]
pub enum FieldSource {
    /// Explicit label → value table.
    Map(LabelTable),
    /// Labels starting with one of these prefixes, prefix stripped.
    Prefixes(Vec<String>),
}

/// Validated custom field specification.
///
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub field_name: String,
    pub field_type: String,
    pub source: FieldSource,
}

/// Custom field specification as written in the configuration file.
///
#[derive(Deserialize)]
struct RawFieldSpec {
    field_name: String,
    field_type: String,
    #[serde(default)]
    map: Option<LabelTable>,
    #[serde(default)]
    prefixes: Option<Vec<String>>,
}

impl TryFrom<RawFieldSpec> for FieldSpec {
    type Error = ConfigError;

    fn try_from(raw: RawFieldSpec) -> Result<Self, Self::Error> {
        let source = match (raw.map, raw.prefixes) {
            (Some(map), None) => FieldSource::Map(map),
            (None, Some(prefixes)) => FieldSource::Prefixes(prefixes),
            (Some(_), Some(_)) => {
                return Err(ConfigError::InvalidCustomField {
                    field: raw.field_name,
                    message: "only one of `map` or `prefixes` may be set".to_string(),
                })
            }
            (None, None) => {
                return Err(ConfigError::InvalidCustomField {
                    field: raw.field_name,
                    message: "one of `map` or `prefixes` must be set".to_string(),
                })
            }
        };
        Ok(FieldSpec {
            field_name: raw.field_name,
            field_type: raw.field_type,
            source,
        })
    }
}

/// Layout of the configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    pub github: GithubConfig,
    pub jira: JiraConfig,
    #[serde(default)]
    pub users: HashMap<String, String>,
    #[serde(default = "default_issue_types")]
    pub issue_types: Classification,
    #[serde(default = "default_priorities")]
    pub priorities: Classification,
    #[serde(default)]
    pub custom_fields: Vec<RawFieldSpec>,
}

fn default_true() -> bool {
    true
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_issue_types() -> Classification {
    Classification {
        default: "Task".to_string(),
        labels: LabelTable::default(),
    }
}

fn default_priorities() -> Classification {
    Classification {
        default: "Medium".to_string(),
        labels: LabelTable::default(),
    }
}

/// Oversees the conversion configuration.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub github: GithubConfig,
    pub jira: JiraConfig,
    pub users: HashMap<String, String>,
    pub issue_types: Classification,
    pub priorities: Classification,
    pub custom_fields: Vec<FieldSpec>,
    file_path: Option<PathBuf>,
}

impl Config {
    /// Load the configuration file at the custom path if provided, otherwise
    /// from the default location under the home directory.
    ///
    pub fn load(custom_path: Option<&str>) -> Result<Config, ConfigError> {
        let file_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !file_path.exists() {
            return Err(ConfigError::NotFound { path: file_path });
        }

        log::debug!("Loading configuration from {}...", file_path.display());
        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            source: e,
        })?;

        let mut config = Config::from_yaml(&contents)?;
        config.file_path = Some(file_path);
        Ok(config)
    }

    /// Parse and validate a configuration document.
    ///
    pub fn from_yaml(contents: &str) -> Result<Config, ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;

        if data.github.owner.trim().is_empty() {
            return Err(ConfigError::MissingValue("github.owner"));
        }
        if data.github.repo.trim().is_empty() {
            return Err(ConfigError::MissingValue("github.repo"));
        }
        if data.jira.project_key.trim().is_empty() {
            return Err(ConfigError::MissingValue("jira.project_key"));
        }

        let custom_fields = data
            .custom_fields
            .into_iter()
            .map(FieldSpec::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Config {
            github: data.github,
            jira: data.jira,
            users: data.users,
            issue_types: data.issue_types,
            priorities: data.priorities,
            custom_fields,
            file_path: None,
        })
    }

    /// Path the configuration was loaded from, if it came from disk.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Token from the configuration file, falling back to `GITHUB_TOKEN`.
    ///
    pub fn github_token(&self) -> Option<String> {
        self.github
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()))
    }

    /// External name recorded on the target project; `owner/repo` unless
    /// configured explicitly.
    ///
    pub fn external_name(&self) -> String {
        self.jira
            .external_name
            .clone()
            .unwrap_or_else(|| format!("{}/{}", self.github.owner, self.github.repo))
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH).join(FILE_NAME)),
            None => Err(ConfigError::HomeDirectoryNotFound),
        }
    }
}
