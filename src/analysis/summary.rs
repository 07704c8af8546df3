//! Human-readable summaries for single change details.

use crate::error::AnalysisError;
use crate::model::{ChangeDetail, Evaluation, TargetAttribute};

/// Produce a one-line summary of what this detail means for the resource.
///
/// Property changes distinguish certain impact ("will change", static
/// evaluation) from possible impact ("might change", dynamic evaluation —
/// the actual value depends on a reference not resolvable before
/// execution).
pub fn summarize_detail(detail: &ChangeDetail) -> Result<String, AnalysisError> {
    match &detail.target.attribute {
        TargetAttribute::Properties => {
            let name = detail.target.name.as_deref().unwrap_or_default();
            match &detail.evaluation {
                Some(Evaluation::Static) => Ok(format!("resource property {name} will change")),
                Some(Evaluation::Dynamic) => Ok(format!("resource property {name} might change")),
                other => Err(AnalysisError::UnknownEvaluation {
                    property: name.to_string(),
                    evaluation: other
                        .as_ref()
                        .map_or_else(|| "none".to_string(), |e| e.as_str().to_string()),
                }),
            }
        }

        attribute @ (TargetAttribute::Metadata
        | TargetAttribute::CreationPolicy
        | TargetAttribute::UpdatePolicy
        | TargetAttribute::DeletionPolicy
        | TargetAttribute::Tags) => Ok(format!("resource {} changed", attribute.display_name())),

        TargetAttribute::Other(attribute) => {
            Err(AnalysisError::UnknownAttribute(attribute.clone()))
        }
    }
}
