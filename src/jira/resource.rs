use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Workflow status every imported issue starts in.
///
pub const INITIAL_STATUS: &str = "To Do";

/// Resolution carried over for closed source issues.
///
pub const FIXED_RESOLUTION: &str = "Fixed";

/// Defines custom field value data structure.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValue {
    pub field_name: String,
    pub field_type: String,
    pub value: Vec<String>,
}

/// Defines comment data structure.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
    pub author: String,
    pub created: String,
}

/// Defines issue data structure.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub key: String,
    pub status: String,
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub fixed_versions: Vec<String>,
    pub created: String,
    pub updated: String,
    pub summary: String,
    pub description: String,
    pub issue_type: String,
    pub priority: String,
    pub labels: Vec<String>,
    pub custom_field_values: Vec<CustomFieldValue>,
    pub comments: Vec<Comment>,
}

/// Defines project data structure.
///
/// `versions` is a set; the `BTreeSet` keeps serialized output stable
/// between runs.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub external_name: String,
    pub key: String,
    pub issues: Vec<Issue>,
    pub versions: BTreeSet<String>,
}

/// Top-level document handed to the Jira importer.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDocument {
    pub projects: Vec<Project>,
}
