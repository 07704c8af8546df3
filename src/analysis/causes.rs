//! Causal chain resolution for change details.
//!
//! Explains *why* a field changed by following resource-to-resource
//! references until a root cause is reached: a direct template edit, a
//! parameter change, an automatic update, or the creation of a referenced
//! resource. Chains are ordered proximate cause first, root cause last.

use std::collections::{HashMap, HashSet};

use crate::error::AnalysisError;
use crate::model::{ChangeDetail, ChangeSource, ResourceChange, TargetAttribute};

/// A parsed `LogicalId.Attribute` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EntityRef {
    logical_id: String,
    attribute: Option<String>,
}

impl EntityRef {
    fn parse(entity: &str) -> Self {
        match entity.split_once('.') {
            Some((logical_id, attribute)) => Self {
                logical_id: logical_id.to_string(),
                attribute: Some(attribute.to_string()),
            },
            None => Self {
                logical_id: entity.to_string(),
                attribute: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Node {
    /// Index into the modified list
    Modified(usize),
    /// Added resources have no detail records; a reference to one is
    /// explained by its creation
    Added,
}

/// Resolves the chain of causes behind each change detail.
///
/// Holds an index from logical id to change record, built once per
/// analysis pass, plus an explicit per-detail cache so every detail is
/// resolved at most once. Details currently being resolved are tracked
/// separately; revisiting one means the reference graph has a genuine
/// cycle, which fails the review instead of recursing unboundedly.
pub struct CauseResolver<'a> {
    modified: &'a [ResourceChange],
    index: HashMap<&'a str, Node>,
    cache: HashMap<(usize, usize), Vec<String>>,
    in_progress: HashSet<(usize, usize)>,
}

impl<'a> CauseResolver<'a> {
    pub fn new(modified: &'a [ResourceChange], added: &'a [ResourceChange]) -> Self {
        let mut index = HashMap::new();
        for (i, change) in modified.iter().enumerate() {
            index
                .entry(change.logical_id.as_str())
                .or_insert(Node::Modified(i));
        }
        for change in added {
            index.entry(change.logical_id.as_str()).or_insert(Node::Added);
        }

        Self {
            modified,
            index,
            cache: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Resolve the causal chain for one detail of one modified resource.
    ///
    /// Already-decorated details are returned as-is, so decoration stays
    /// idempotent on re-entry.
    pub fn resolve(
        &mut self,
        resource: usize,
        detail_index: usize,
    ) -> Result<Vec<String>, AnalysisError> {
        let key = (resource, detail_index);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let modified = self.modified;
        let change = &modified[resource];
        let detail = change
            .details
            .get(detail_index)
            .ok_or_else(|| AnalysisError::MissingReference(change.logical_id.clone()))?;
        if let Some(existing) = &detail.causes {
            return Ok(existing.clone());
        }

        if !self.in_progress.insert(key) {
            return Err(AnalysisError::CyclicReference(change.logical_id.clone()));
        }
        let result = self.resolve_detail(detail);
        self.in_progress.remove(&key);

        let causes = result?;
        self.cache.insert(key, causes.clone());
        Ok(causes)
    }

    fn resolve_detail(&mut self, detail: &ChangeDetail) -> Result<Vec<String>, AnalysisError> {
        match &detail.change_source {
            Some(ChangeSource::DirectModification) => Ok(vec![format!(
                "direct modification of resource {}",
                detail.target.attribute.display_name()
            )]),

            Some(source @ ChangeSource::Automatic) => {
                let entity = causing_entity(detail, source)?;
                Ok(vec![format!("automatic update of {entity}")])
            }

            Some(source @ ChangeSource::ParameterReference) => {
                let entity = causing_entity(detail, source)?;
                Ok(vec![format!("changed parameter value of {entity}")])
            }

            Some(source @ (ChangeSource::ResourceReference | ChangeSource::ResourceAttribute)) => {
                let entity = causing_entity(detail, source)?;
                let reference = EntityRef::parse(entity);
                let mut causes = vec![format!("changed output value of {entity}")];
                causes.extend(self.resolve_reference(&reference)?);
                Ok(causes)
            }

            // Stack-level tag edits arrive with no change source at all
            None if detail.target.attribute == TargetAttribute::Tags => {
                Ok(vec!["changed stack tags".to_string()])
            }

            Some(ChangeSource::Other(source)) => {
                Err(AnalysisError::UnknownChangeSource(source.clone()))
            }
            None => Err(AnalysisError::UnknownChangeSource("none".to_string())),
        }
    }

    fn resolve_reference(&mut self, reference: &EntityRef) -> Result<Vec<String>, AnalysisError> {
        tracing::debug!(
            logical_id = %reference.logical_id,
            attribute = ?reference.attribute,
            "Following resource reference"
        );
        match self.index.get(reference.logical_id.as_str()).copied() {
            // Only the referenced resource's first recorded detail is
            // followed, even when it has several field changes.
            Some(Node::Modified(resource)) => self.resolve(resource, 0),
            Some(Node::Added) => Ok(vec!["creation of the resource".to_string()]),
            None => Err(AnalysisError::MissingReference(reference.logical_id.clone())),
        }
    }
}

fn causing_entity<'d>(
    detail: &'d ChangeDetail,
    source: &ChangeSource,
) -> Result<&'d str, AnalysisError> {
    detail
        .causing_entity
        .as_deref()
        .ok_or_else(|| AnalysisError::MissingCausingEntity {
            change_source: source.to_string(),
        })
}
