//! Conversion pipeline from GitHub records to a Jira import document.
//!
//! Comments are grouped by parent issue, every issue is mapped together with
//! its group, and the mapped issues are assembled into a single project.
//! All steps are pure functions of the configuration and the input records.

mod classify;
mod comments;
mod custom_fields;
mod issue;
mod project;

pub use classify::classify;
pub use comments::{group_by_issue, CommentGroups};
pub use custom_fields::map_custom_fields;
pub use issue::IssueMapper;
pub use project::{assemble, ProjectMeta};

use crate::config::Config;
use crate::github;
use crate::jira::ImportDocument;
use log::*;

/// Runs the whole conversion for one configuration.
///
pub struct Converter<'a> {
    config: &'a Config,
}

impl<'a> Converter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Converter { config }
    }

    /// Convert issues and their comments. `comments` is `None` when comments
    /// were not retrieved, in which case every issue gets an empty comment
    /// list.
    ///
    pub fn convert(
        &self,
        issues: &[github::Issue],
        comments: Option<&[github::Comment]>,
    ) -> ImportDocument {
        let groups = comments.map(group_by_issue).unwrap_or_default();
        debug!("Grouped comments under {} issues", groups.len());

        let mapper = IssueMapper::new(self.config);
        let mapped: Vec<_> = issues
            .iter()
            .map(|issue| mapper.map_issue(issue, groups.get(&issue.number).map(Vec::as_slice)))
            .collect();
        info!("Converted {} issues", mapped.len());

        let project = assemble(
            mapped,
            ProjectMeta {
                name: self.config.jira.project_name.clone(),
                external_name: self.config.external_name(),
                key: self.config.jira.project_key.clone(),
            },
        );
        debug!(
            "Project {} references {} versions",
            project.key,
            project.versions.len()
        );

        ImportDocument {
            projects: vec![project],
        }
    }
}
