//! Resource change classification.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::{Action, ResourceChange};

/// Resource changes partitioned by lifecycle action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifiedChanges {
    pub added: Vec<ResourceChange>,
    pub removed: Vec<ResourceChange>,
    pub modified: Vec<ResourceChange>,
}

impl ClassifiedChanges {
    /// Total number of classified changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

/// Partition changes by their declared action.
///
/// An unrecognized action is fatal: it means the API contract changed,
/// and misfiling a change under the wrong bucket would misreport it to
/// the operator approving the change set.
pub fn classify(changes: Vec<ResourceChange>) -> Result<ClassifiedChanges, AnalysisError> {
    let mut classified = ClassifiedChanges::default();

    for change in changes {
        match &change.action {
            Action::Add => classified.added.push(change),
            Action::Remove => classified.removed.push(change),
            Action::Modify => classified.modified.push(change),
            Action::Other(action) => {
                return Err(AnalysisError::UnexpectedAction(action.clone()));
            }
        }
    }

    Ok(classified)
}
