use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines GitHub account data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
}

/// Defines label data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

impl Label {
    pub fn new(name: &str) -> Label {
        Label {
            name: name.to_owned(),
        }
    }
}

/// Defines milestone data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
}

/// Issue state as reported by GitHub.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// Marker present on records returned by the issues endpoint that are
/// actually pull requests.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    #[serde(default)]
    pub url: Option<String>,
}

/// Defines issue data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub state: IssueState,
    pub user: User,
    #[serde(default)]
    pub assignee: Option<User>,
    pub created_at: String,
    pub updated_at: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Defines issue comment data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub body: Option<String>,
    pub user: User,
    pub created_at: String,
    pub issue_url: String,
}

impl Comment {
    /// Returns the parent issue number, parsed from the last path segment of
    /// `issue_url`, or `None` when that segment is not a number.
    ///
    pub fn issue_number(&self) -> Option<u64> {
        self.issue_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}
