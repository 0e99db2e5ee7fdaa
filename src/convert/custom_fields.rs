//! Custom field values built from leftover labels.

use crate::config::{FieldSource, FieldSpec};
use crate::github::Label;
use crate::jira::CustomFieldValue;

/// Build one custom field value per spec, in spec order. A field whose
/// source matches none of the labels is still emitted, with no values.
///
pub fn map_custom_fields(labels: &[Label], specs: &[FieldSpec]) -> Vec<CustomFieldValue> {
    specs
        .iter()
        .map(|spec| CustomFieldValue {
            field_name: spec.field_name.clone(),
            field_type: spec.field_type.clone(),
            value: field_values(labels, &spec.source),
        })
        .collect()
}

fn field_values(labels: &[Label], source: &FieldSource) -> Vec<String> {
    match source {
        FieldSource::Map(table) => labels
            .iter()
            .filter_map(|label| table.get(&label.name))
            .map(str::to_string)
            .collect(),
        FieldSource::Prefixes(prefixes) => labels
            .iter()
            .filter(|label| prefixes.iter().any(|p| label.name.starts_with(p.as_str())))
            .map(|label| strip_prefixes(&label.name, prefixes).replace(' ', "_"))
            .collect(),
    }
}

/// Remove the first occurrence of each prefix in turn.
fn strip_prefixes(name: &str, prefixes: &[String]) -> String {
    prefixes
        .iter()
        .fold(name.to_string(), |acc, prefix| acc.replacen(prefix.as_str(), "", 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabelTable;

    fn labels(names: &[&str]) -> Vec<Label> {
        names.iter().map(|n| Label::new(n)).collect()
    }

    fn spec(name: &str, source: FieldSource) -> FieldSpec {
        FieldSpec {
            field_name: name.to_string(),
            field_type: "com.atlassian.jira.plugin.system.customfieldtypes:labels".to_string(),
            source,
        }
    }

    #[test]
    fn no_specs_yields_no_fields() {
        assert!(map_custom_fields(&labels(&["ui"]), &[]).is_empty());
    }

    #[test]
    fn prefix_is_stripped_and_spaces_replaced() {
        let specs = vec![spec("Team", FieldSource::Prefixes(vec!["team-".to_string()]))];
        let fields = map_custom_fields(&labels(&["team-backend infra", "ui"]), &specs);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field_name, "Team");
        assert_eq!(fields[0].value, vec!["backend_infra".to_string()]);
    }

    #[test]
    fn multiple_prefixes_apply_in_turn() {
        let specs = vec![spec(
            "Area",
            FieldSource::Prefixes(vec!["area:".to_string(), "team-".to_string()]),
        )];
        let fields = map_custom_fields(&labels(&["area:web", "team-ops", "other"]), &specs);
        assert_eq!(fields[0].value, vec!["web".to_string(), "ops".to_string()]);
    }

    #[test]
    fn map_keeps_label_order_and_drops_unmapped() {
        let table = LabelTable::new([("ui", "Frontend"), ("api", "Backend")]);
        let specs = vec![spec("Component", FieldSource::Map(table))];
        let fields = map_custom_fields(&labels(&["api", "docs", "ui"]), &specs);
        assert_eq!(
            fields[0].value,
            vec!["Backend".to_string(), "Frontend".to_string()]
        );
    }

    #[test]
    fn unmatched_field_is_still_emitted() {
        let specs = vec![
            spec("Component", FieldSource::Map(LabelTable::new([("ui", "Frontend")]))),
            spec("Team", FieldSource::Prefixes(vec!["team-".to_string()])),
        ];
        let fields = map_custom_fields(&labels(&["ui"]), &specs);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].value, vec!["Frontend".to_string()]);
        assert_eq!(fields[1].field_name, "Team");
        assert!(fields[1].value.is_empty());
    }
}
