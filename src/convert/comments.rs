//! Association of loose comment records with their parent issue.

use crate::github::Comment;
use log::*;
use std::collections::HashMap;

/// Comments keyed by parent issue number, in input order within each group.
///
pub type CommentGroups<'a> = HashMap<u64, Vec<&'a Comment>>;

/// Partition comments by the issue number at the end of their `issue_url`.
///
/// The number is parsed once per comment. Comments whose URL does not end in
/// an issue number cannot belong to any issue and are dropped.
///
pub fn group_by_issue(comments: &[Comment]) -> CommentGroups<'_> {
    let mut groups: CommentGroups = HashMap::new();
    for comment in comments {
        match comment.issue_number() {
            Some(number) => groups.entry(number).or_default().push(comment),
            None => warn!(
                "Comment on '{}' does not reference an issue number, skipping",
                comment.issue_url
            ),
        }
    }
    groups
}
