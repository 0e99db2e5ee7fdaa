//! Assembly of converted issues into the target project record.

use crate::jira::{Issue, Project};
use std::collections::BTreeSet;

/// Identity of the target project.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectMeta {
    pub name: String,
    pub external_name: String,
    pub key: String,
}

/// Wrap the issues in a project whose `versions` is the distinct union of
/// every issue's fix versions.
///
pub fn assemble(issues: Vec<Issue>, meta: ProjectMeta) -> Project {
    let versions: BTreeSet<String> = issues
        .iter()
        .flat_map(|issue| issue.fixed_versions.iter().cloned())
        .collect();
    Project {
        name: meta.name,
        external_name: meta.external_name,
        key: meta.key,
        issues,
        versions,
    }
}
