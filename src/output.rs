//! Reading and writing of conversion artifacts.
//!
//! The import document and the optional raw GitHub snapshot are written as
//! pretty-printed JSON. A snapshot written by an earlier run can be read
//! back to repeat the conversion without contacting GitHub.

use crate::github::{Comment, Issue};
use crate::jira::ImportDocument;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

pub const IMPORT_FILE_NAME: &str = "jira-import.json";
pub const SNAPSHOT_FILE_NAME: &str = "github-export.json";

/// Records exactly as retrieved from GitHub, before conversion.
///
/// `github_comments` is `None` when comments were not retrieved.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnapshot {
    pub github_issues: Vec<Issue>,
    pub github_comments: Option<Vec<Comment>>,
}

/// Errors that can occur while reading or writing artifacts.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Failed to create the output directory
    #[error("Failed to create output directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write an artifact
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read an artifact
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Artifact could not be (de)serialized
    #[error("Failed to serialize artifact: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write the import document into `directory`, returning the file path.
///
pub fn write_import(directory: &Path, document: &ImportDocument) -> Result<PathBuf, OutputError> {
    let path = directory.join(IMPORT_FILE_NAME);
    write_json(&path, document)?;
    Ok(path)
}

/// Write the raw snapshot into `directory`, returning the file path.
///
pub fn write_snapshot(directory: &Path, snapshot: &RawSnapshot) -> Result<PathBuf, OutputError> {
    let path = directory.join(SNAPSHOT_FILE_NAME);
    write_json(&path, snapshot)?;
    Ok(path)
}

/// Read a raw snapshot written by [`write_snapshot`].
///
pub fn read_snapshot(path: &Path) -> Result<RawSnapshot, OutputError> {
    read_json(path)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), OutputError> {
    let content = serde_json::to_string_pretty(value)?;

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| OutputError::CreateDirectoryFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    // Written next to the target and renamed into place, so a failed write
    // never leaves a truncated artifact behind.
    let staging = staging_path(path);
    let result = write_file(&staging, &content).and_then(|()| fs::rename(&staging, path));
    if let Err(e) = result {
        fs::remove_file(&staging).ok();
        return Err(OutputError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        });
    }
    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    writeln!(file, "{}", content)?;
    file.sync_all()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, OutputError> {
    let contents = fs::read_to_string(path).map_err(|e| OutputError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{IssueState, User};
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        env::temp_dir().join(format!("gh2jira-output-{}-{}", name, std::process::id()))
    }

    fn snapshot(comments: Option<Vec<Comment>>) -> RawSnapshot {
        RawSnapshot {
            github_issues: vec![Issue {
                number: 1,
                state: IssueState::Closed,
                user: User {
                    login: "octocat".to_string(),
                },
                assignee: None,
                created_at: "2021-01-01T00:00:00Z".to_string(),
                updated_at: "2021-01-01T00:00:00Z".to_string(),
                title: "First".to_string(),
                body: None,
                milestone: None,
                labels: vec![],
                pull_request: None,
            }],
            github_comments: comments,
        }
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let value = serde_json::to_value(snapshot(None)).expect("should serialize");
        assert!(value.get("githubIssues").is_some());
        assert_eq!(value["githubComments"], serde_json::Value::Null);
    }

    #[test]
    fn snapshot_written_can_be_read_back() {
        let dir = temp_dir("snapshot");
        let original = snapshot(Some(vec![]));
        let path = write_snapshot(&dir, &original).expect("should write");
        assert_eq!(path, dir.join(SNAPSHOT_FILE_NAME));
        let read = read_snapshot(&path).expect("should read");
        assert_eq!(read, original);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn write_import_creates_directory() {
        let dir = temp_dir("import").join("nested");
        let document = ImportDocument { projects: vec![] };
        let path = write_import(&dir, &document).expect("should write");
        let contents = fs::read_to_string(&path).expect("should exist");
        assert!(contents.contains("\"projects\""));
        fs::remove_dir_all(temp_dir("import")).ok();
    }

    #[test]
    fn write_import_leaves_no_staging_file() {
        let dir = temp_dir("staging");
        let document = ImportDocument { projects: vec![] };
        let path = write_import(&dir, &document).expect("should write");
        assert!(path.exists());
        assert!(!staging_path(&path).exists());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn failed_write_keeps_no_partial_file() {
        let dir = temp_dir("blocked");
        // A directory in place of the import file makes the final rename fail.
        fs::create_dir_all(dir.join(IMPORT_FILE_NAME).join("occupied"))
            .expect("should create blocking directory");
        let document = ImportDocument { projects: vec![] };
        let result = write_import(&dir, &document);
        assert!(matches!(result, Err(OutputError::WriteFailed { .. })));
        assert!(!staging_path(&dir.join(IMPORT_FILE_NAME)).exists());
        assert!(dir.join(IMPORT_FILE_NAME).is_dir());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn read_missing_snapshot() {
        let result = read_snapshot(Path::new("/nonexistent/gh2jira/github-export.json"));
        assert!(matches!(result, Err(OutputError::ReadFailed { .. })));
    }
}
