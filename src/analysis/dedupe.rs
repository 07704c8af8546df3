//! Change detail deduplication.
//!
//! The API reports some logical edits more than once. The known case: a
//! parameter value change emits both a static `ParameterReference` detail
//! and a dynamic `DirectModification` detail for the same target. Only
//! the static parameter-reference record should survive.

use indexmap::IndexMap;

use crate::model::{ChangeDetail, ChangeSource, Evaluation, TargetAttribute};

fn is_dynamic_direct(detail: &ChangeDetail) -> bool {
    detail.change_source == Some(ChangeSource::DirectModification)
        && detail.evaluation == Some(Evaluation::Dynamic)
}

fn is_static_parameter(detail: &ChangeDetail) -> bool {
    detail.change_source == Some(ChangeSource::ParameterReference)
        && detail.evaluation == Some(Evaluation::Static)
}

/// Collapse detail records that describe the same logical edit.
///
/// Scoped to a single resource's detail list. Surviving details keep
/// their input order.
pub fn dedupe_details(details: Vec<ChangeDetail>) -> Vec<ChangeDetail> {
    if details.len() < 2 {
        // Fast path: nothing can overlap
        return details;
    }

    let mut groups: IndexMap<(TargetAttribute, Option<String>), Vec<usize>> = IndexMap::new();
    for (index, detail) in details.iter().enumerate() {
        groups
            .entry((detail.target.attribute.clone(), detail.target.name.clone()))
            .or_default()
            .push(index);
    }

    let mut dropped = vec![false; details.len()];
    for indices in groups.values() {
        if indices.len() < 2 {
            // All fixups need at least two details on one target
            continue;
        }

        let dynamic_directs: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| is_dynamic_direct(&details[i]))
            .collect();
        let has_static_parameter = indices.iter().any(|&i| is_static_parameter(&details[i]));

        if !dynamic_directs.is_empty() && has_static_parameter {
            for index in dynamic_directs {
                dropped[index] = true;
            }
        }
    }

    details
        .into_iter()
        .zip(dropped)
        .filter_map(|(detail, drop)| (!drop).then_some(detail))
        .collect()
}
