//! Label fragments shared by the terminal report.

use console::style;

use crate::error::RenderError;
use crate::model::{
    Action, ChangeDetail, KeyValueChange, Replacement, RequiresRecreation, ResourceChange,
};

/// `[+]` / `[-]` / `[*]` marker for a change action.
pub fn action_marker(action: &Action) -> Result<String, RenderError> {
    match action {
        Action::Add => Ok(style("[+]").green().to_string()),
        Action::Remove => Ok(style("[-]").red().to_string()),
        Action::Modify => Ok(style("[*]").yellow().to_string()),
        Action::Other(action) => Err(RenderError::UnknownAction(action.clone())),
    }
}

/// ` [Replacement: …]` label, or empty when the change replaces nothing.
pub fn replacement_label(change: &ResourceChange) -> Result<String, RenderError> {
    match &change.replacement {
        Some(Replacement::True) => Ok(format!(" {}", style("[Replacement: True]").yellow())),
        Some(Replacement::Conditional) => {
            Ok(format!(" {}", style("[Replacement: Conditional]").yellow()))
        }
        // Not a modify, or an in-place update
        Some(Replacement::False) | None => Ok(String::new()),
        Some(Replacement::Other(value)) => Err(RenderError::UnknownReplacement(value.clone())),
    }
}

/// ` [Recreation: …]` label, or empty when the detail never forces
/// recreation.
pub fn recreation_label(detail: &ChangeDetail) -> Result<String, RenderError> {
    match &detail.target.requires_recreation {
        Some(RequiresRecreation::Always) => {
            Ok(format!(" {}", style("[Recreation: Always]").yellow()))
        }
        Some(RequiresRecreation::Conditionally) => {
            Ok(format!(" {}", style("[Recreation: Conditional]").yellow()))
        }
        Some(RequiresRecreation::Never) => Ok(String::new()),
        Some(RequiresRecreation::Other(value)) => {
            Err(RenderError::UnknownRecreation(value.clone()))
        }
        None => Err(RenderError::UnknownRecreation("none".to_string())),
    }
}

/// One-line identity of the resource a change touches.
pub fn resource_heading(change: &ResourceChange) -> String {
    match &change.physical_id {
        Some(physical_id) => format!(
            "{} - {} ({})",
            change.logical_id, physical_id, change.resource_type
        ),
        None => format!("{} ({})", change.logical_id, change.resource_type),
    }
}

/// `Key: Value` or `Key: Old --> New` line for a tag/parameter change.
pub fn key_value_line(change: &KeyValueChange) -> String {
    match &change.old_value {
        Some(old_value) => format!("{}: {} --> {}", change.key, old_value, change.value),
        None => format!("{}: {}", change.key, change.value),
    }
}
