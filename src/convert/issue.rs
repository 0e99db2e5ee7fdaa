//! Conversion of one GitHub issue and its comments into a Jira issue.

use super::classify::classify;
use super::custom_fields::map_custom_fields;
use crate::config::Config;
use crate::github::{self, IssueState};
use crate::jira::{self, FIXED_RESOLUTION, INITIAL_STATUS};
use crate::utils::dates::normalize_timestamp;
use crate::utils::markup::markdown_to_jira;
use log::*;

/// Maps source issues using the user table, label tables, and custom field
/// specs of one configuration.
///
pub struct IssueMapper<'a> {
    config: &'a Config,
}

impl<'a> IssueMapper<'a> {
    pub fn new(config: &'a Config) -> Self {
        IssueMapper { config }
    }

    /// Convert one issue. `comments` is the issue's comment group, or `None`
    /// when it has none or comments were not retrieved at all.
    ///
    /// Issue type is classified before priority; a label consumed by the
    /// issue type table is not seen by the priority table, and neither
    /// consumed label reaches `labels` or the custom fields.
    ///
    pub fn map_issue(
        &self,
        issue: &github::Issue,
        comments: Option<&[&github::Comment]>,
    ) -> jira::Issue {
        let key = format!("{}-{}", self.config.jira.project_key, issue.number);

        let reporter = self.lookup_user(&issue.user.login);
        if reporter.is_none() {
            warn!(
                "{}: reporter '{}' has no Jira user mapping, leaving reporter unset",
                key, issue.user.login
            );
        }
        let assignee = issue
            .assignee
            .as_ref()
            .map(|user| self.user_or_login(&user.login));

        let (issue_type, labels) = classify(
            &issue.labels,
            &self.config.issue_types.labels,
            &self.config.issue_types.default,
        );
        let (priority, labels) = classify(
            &labels,
            &self.config.priorities.labels,
            &self.config.priorities.default,
        );
        let custom_field_values = map_custom_fields(&labels, &self.config.custom_fields);

        let comments = comments
            .unwrap_or_default()
            .iter()
            .map(|comment| self.map_comment(comment))
            .collect();

        jira::Issue {
            status: INITIAL_STATUS.to_string(),
            resolution: match issue.state {
                IssueState::Closed => Some(FIXED_RESOLUTION.to_string()),
                IssueState::Open => None,
            },
            reporter,
            assignee,
            fixed_versions: issue
                .milestone
                .as_ref()
                .map(|m| vec![m.title.clone()])
                .unwrap_or_default(),
            created: normalize_timestamp(&issue.created_at),
            updated: normalize_timestamp(&issue.updated_at),
            summary: issue.title.clone(),
            description: markdown_to_jira(issue.body.as_deref().unwrap_or_default()),
            issue_type,
            priority,
            labels: labels.into_iter().map(|l| l.name).collect(),
            custom_field_values,
            comments,
            key,
        }
    }

    fn map_comment(&self, comment: &github::Comment) -> jira::Comment {
        jira::Comment {
            body: markdown_to_jira(comment.body.as_deref().unwrap_or_default()),
            author: self.user_or_login(&comment.user.login),
            created: normalize_timestamp(&comment.created_at),
        }
    }

    fn lookup_user(&self, login: &str) -> Option<String> {
        self.config.users.get(login).cloned()
    }

    fn user_or_login(&self, login: &str) -> String {
        self.lookup_user(login).unwrap_or_else(|| login.to_string())
    }
}
