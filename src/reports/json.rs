//! Machine-readable JSON report.

use serde::Serialize;

use crate::analysis::{ChangeSetAnalysis, ClassifiedChanges};
use crate::error::RenderError;
use crate::model::{ChangeSetDescription, KeyValueChanges};

#[derive(Serialize)]
struct JsonReport<'a> {
    stack_name: Option<&'a str>,
    change_set_name: Option<&'a str>,
    change_set_id: Option<&'a str>,
    resource_changes: &'a ClassifiedChanges,
    tag_changes: &'a KeyValueChanges,
    parameter_changes: &'a KeyValueChanges,
}

/// Serialize the full analysis for downstream tooling.
pub fn render_json(
    changeset: &ChangeSetDescription,
    analysis: &ChangeSetAnalysis,
) -> Result<String, RenderError> {
    let report = JsonReport {
        stack_name: changeset.stack_name.as_deref(),
        change_set_name: changeset.change_set_name.as_deref(),
        change_set_id: changeset.change_set_id.as_deref(),
        resource_changes: &analysis.resources,
        tag_changes: &analysis.tags,
        parameter_changes: &analysis.parameters,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KeyValueChange;

    #[test]
    fn test_json_report_round_trips() {
        let changeset = ChangeSetDescription {
            stack_name: Some("api".to_string()),
            ..ChangeSetDescription::default()
        };
        let analysis = ChangeSetAnalysis {
            resources: ClassifiedChanges::default(),
            tags: KeyValueChanges {
                added: vec![KeyValueChange::added("team", "platform")],
                ..KeyValueChanges::default()
            },
            parameters: KeyValueChanges::default(),
        };

        let rendered = render_json(&changeset, &analysis).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["stack_name"], "api");
        assert_eq!(value["tag_changes"]["added"][0]["Key"], "team");
    }
}
