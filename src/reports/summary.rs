//! Human-readable review report for terminal output.

use console::style;

use super::labels::{
    action_marker, key_value_line, recreation_label, replacement_label, resource_heading,
};
use crate::analysis::ChangeSetAnalysis;
use crate::error::RenderError;
use crate::model::{Action, ChangeSetDescription, KeyValueChanges, ResourceChange};

/// Renders the review sections the operator reads before approving.
pub struct SummaryReporter;

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Stack and change set identity, shown for every review — including
    /// reviews of empty change sets.
    pub fn render_header(&self, changeset: &ChangeSetDescription) -> String {
        let mut lines = vec![style("Summary").bold().to_string()];
        lines.push(format!(
            "- Stack Name: {}",
            changeset.stack_name.as_deref().unwrap_or_default()
        ));
        lines.push(format!(
            "- Change Set Name: {}",
            changeset.change_set_name.as_deref().unwrap_or_default()
        ));
        lines.join("\n")
    }

    /// The resource, tag and parameter change sections. Sections without
    /// changes are omitted entirely.
    pub fn render(&self, analysis: &ChangeSetAnalysis) -> Result<String, RenderError> {
        let mut sections = Vec::new();

        if !analysis.resources.is_empty() {
            sections.push(self.render_resource_changes(analysis)?);
        }
        if let Some(section) = self.render_key_value_changes("Tag Changes", &analysis.tags)? {
            sections.push(section);
        }
        if let Some(section) =
            self.render_key_value_changes("Parameter Changes", &analysis.parameters)?
        {
            sections.push(section);
        }

        Ok(sections.join("\n\n"))
    }

    fn render_resource_changes(
        &self,
        analysis: &ChangeSetAnalysis,
    ) -> Result<String, RenderError> {
        let mut lines = vec![style("Resource Changes").bold().to_string()];

        for change in analysis
            .resources
            .added
            .iter()
            .chain(&analysis.resources.removed)
            .chain(&analysis.resources.modified)
        {
            self.render_resource(change, &mut lines)?;
        }

        Ok(lines.join("\n"))
    }

    fn render_resource(
        &self,
        change: &ResourceChange,
        lines: &mut Vec<String>,
    ) -> Result<(), RenderError> {
        lines.push(format!(
            "{} {}{}",
            action_marker(&change.action)?,
            resource_heading(change),
            replacement_label(change)?
        ));

        for detail in &change.details {
            lines.push(format!(
                "    - {}{}",
                detail.summary.as_deref().unwrap_or_default(),
                recreation_label(detail)?
            ));
            for cause in detail.causes.as_deref().unwrap_or_default() {
                lines.push(format!("        caused by {cause}"));
            }
        }

        Ok(())
    }

    fn render_key_value_changes(
        &self,
        title: &str,
        changes: &KeyValueChanges,
    ) -> Result<Option<String>, RenderError> {
        if changes.is_empty() {
            return Ok(None);
        }

        let mut lines = vec![style(title).bold().to_string()];
        for (action, group) in [
            (Action::Add, &changes.added),
            (Action::Remove, &changes.removed),
            (Action::Modify, &changes.modified),
        ] {
            let marker = action_marker(&action)?;
            for change in group {
                lines.push(format!("{marker} {}", key_value_line(change)));
            }
        }

        Ok(Some(lines.join("\n")))
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}
