//! Label-driven classification of single-valued fields.

use crate::config::LabelTable;
use crate::github::Label;

/// Classify an issue by its labels against one table.
///
/// Table entries are tried in table order; the first entry whose label is
/// on the issue wins. That label is consumed: the returned label list is
/// the input minus the matched label, and is what later classification
/// steps and custom field mapping must see. With an empty table, or when no
/// entry matches, `default` is returned along with the labels untouched.
///
pub fn classify(labels: &[Label], table: &LabelTable, default: &str) -> (String, Vec<Label>) {
    let matched = table.iter().find_map(|(label, value)| {
        labels
            .iter()
            .position(|l| l.name == label)
            .map(|index| (index, value))
    });

    match matched {
        Some((index, value)) => {
            let mut remaining = labels.to_vec();
            remaining.remove(index);
            (value.to_string(), remaining)
        }
        None => (default.to_string(), labels.to_vec()),
    }
}
