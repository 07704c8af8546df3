//! Change analysis engine.
//!
//! Turns one raw change set payload plus the previous stack's tags and
//! parameters into three structured reports: resource changes (with a
//! summary and causal chain per field-level change), tag changes and
//! parameter changes.
//!
//! The engine is pure computation over in-memory data: no I/O, no shared
//! state across invocations, and every error is fatal to the review.

mod causes;
mod classify;
mod dedupe;
mod keyvalue;
mod summary;

pub use causes::CauseResolver;
pub use classify::{classify, ClassifiedChanges};
pub use dedupe::dedupe_details;
pub use keyvalue::diff_key_values;
pub use summary::summarize_detail;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::{ChangeSetDescription, KeyValueChanges, ResourceChange, StackDescription};

/// The three reports a review renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeSetAnalysis {
    pub resources: ClassifiedChanges,
    pub tags: KeyValueChanges,
    pub parameters: KeyValueChanges,
}

/// Analyze a change set against the deployed stack it modifies.
pub fn analyze(
    changeset: &ChangeSetDescription,
    stack: &StackDescription,
) -> Result<ChangeSetAnalysis, AnalysisError> {
    Ok(ChangeSetAnalysis {
        resources: analyze_resource_changes(changeset.resource_changes().cloned().collect())?,
        tags: analyze_tag_changes(changeset, stack),
        parameters: analyze_parameter_changes(changeset, stack),
    })
}

/// Classify resource changes, dedupe each modified resource's details and
/// decorate every surviving detail with its summary and causal chain.
pub fn analyze_resource_changes(
    changes: Vec<ResourceChange>,
) -> Result<ClassifiedChanges, AnalysisError> {
    let mut classified = classify(changes)?;

    for change in &mut classified.modified {
        change.details = dedupe_details(std::mem::take(&mut change.details));
    }

    for change in &mut classified.modified {
        for detail in &mut change.details {
            detail.summary = Some(summarize_detail(detail)?);
        }
    }

    // Causes are resolved against an immutable view first, so
    // cross-resource references can reach every resource's details, then
    // written back in one pass.
    let resolved: Vec<Vec<Vec<String>>> = {
        let mut resolver = CauseResolver::new(&classified.modified, &classified.added);
        classified
            .modified
            .iter()
            .enumerate()
            .map(|(i, change)| {
                (0..change.details.len())
                    .map(|j| resolver.resolve(i, j))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    for (change, chains) in classified.modified.iter_mut().zip(resolved) {
        for (detail, chain) in change.details.iter_mut().zip(chains) {
            if detail.causes.is_none() {
                detail.causes = Some(chain);
            }
        }
    }

    Ok(classified)
}

/// Diff the change set's tags against the deployed stack's tags.
pub fn analyze_tag_changes(
    changeset: &ChangeSetDescription,
    stack: &StackDescription,
) -> KeyValueChanges {
    let prev: IndexMap<String, String> = stack
        .tags
        .iter()
        .map(|t| (t.key.clone(), t.value.clone()))
        .collect();
    let next: IndexMap<String, String> = changeset
        .tags
        .iter()
        .map(|t| (t.key.clone(), t.value.clone()))
        .collect();

    diff_key_values(&prev, &next)
}

/// Diff the change set's parameters against the deployed stack's.
pub fn analyze_parameter_changes(
    changeset: &ChangeSetDescription,
    stack: &StackDescription,
) -> KeyValueChanges {
    let prev: IndexMap<String, String> = stack
        .parameters
        .iter()
        .filter_map(|p| {
            p.parameter_value
                .clone()
                .map(|value| (p.parameter_key.clone(), value))
        })
        .collect();

    let mut next: IndexMap<String, String> = IndexMap::new();
    for parameter in &changeset.parameters {
        // A reused parameter copies the deployed value, so it never shows
        // up as a spurious removal plus addition.
        let value = if parameter.use_previous_value {
            prev.get(&parameter.parameter_key).cloned()
        } else {
            parameter.parameter_value.clone()
        };
        if let Some(value) = value {
            next.insert(parameter.parameter_key.clone(), value);
        }
    }

    diff_key_values(&prev, &next)
}
