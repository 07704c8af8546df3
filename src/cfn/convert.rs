//! Conversions from AWS SDK output types into the normalized model.
//!
//! The SDK leaves almost every field optional; the review depends on a
//! handful of them, and their absence is reported as a malformed
//! response instead of surfacing later as a confusing analysis error.

use aws_sdk_cloudformation::operation::describe_change_set::DescribeChangeSetOutput;
use aws_sdk_cloudformation::types as sdk;

use crate::error::{ReviewError, Result};
use crate::model::{
    Change, ChangeDetail, ChangeSetDescription, ChangeTarget, Parameter, ResourceChange,
    StackDescription, Tag,
};

pub fn changeset_from_sdk(output: DescribeChangeSetOutput) -> Result<ChangeSetDescription> {
    let changes = output
        .changes
        .unwrap_or_default()
        .into_iter()
        .map(change_from_sdk)
        .collect::<Result<Vec<_>>>()?;

    Ok(ChangeSetDescription {
        change_set_id: output.change_set_id,
        change_set_name: output.change_set_name,
        stack_id: output.stack_id,
        stack_name: output.stack_name,
        status: output.status.as_ref().map(|s| s.as_str().to_string()),
        status_reason: output.status_reason,
        execution_status: output
            .execution_status
            .as_ref()
            .map(|s| s.as_str().to_string()),
        tags: output
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(tag_from_sdk)
            .collect::<Result<Vec<_>>>()?,
        parameters: output
            .parameters
            .unwrap_or_default()
            .into_iter()
            .map(parameter_from_sdk)
            .collect::<Result<Vec<_>>>()?,
        changes,
    })
}

pub fn stack_from_sdk(stack: sdk::Stack) -> Result<StackDescription> {
    Ok(StackDescription {
        stack_id: stack.stack_id,
        stack_name: stack.stack_name,
        tags: stack
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(tag_from_sdk)
            .collect::<Result<Vec<_>>>()?,
        parameters: stack
            .parameters
            .unwrap_or_default()
            .into_iter()
            .map(parameter_from_sdk)
            .collect::<Result<Vec<_>>>()?,
    })
}

fn change_from_sdk(change: sdk::Change) -> Result<Change> {
    Ok(Change {
        resource_change: change
            .resource_change
            .map(resource_change_from_sdk)
            .transpose()?,
    })
}

fn resource_change_from_sdk(change: sdk::ResourceChange) -> Result<ResourceChange> {
    Ok(ResourceChange {
        logical_id: change
            .logical_resource_id
            .ok_or_else(|| ReviewError::malformed("resource change without LogicalResourceId"))?,
        physical_id: change.physical_resource_id,
        resource_type: change
            .resource_type
            .ok_or_else(|| ReviewError::malformed("resource change without ResourceType"))?,
        action: change
            .action
            .as_ref()
            .map(|a| a.as_str().into())
            .ok_or_else(|| ReviewError::malformed("resource change without Action"))?,
        replacement: change.replacement.as_ref().map(|r| r.as_str().into()),
        details: change
            .details
            .unwrap_or_default()
            .into_iter()
            .map(detail_from_sdk)
            .collect::<Result<Vec<_>>>()?,
    })
}

fn detail_from_sdk(detail: sdk::ResourceChangeDetail) -> Result<ChangeDetail> {
    let target = detail
        .target
        .ok_or_else(|| ReviewError::malformed("change detail without Target"))?;

    Ok(ChangeDetail {
        target: ChangeTarget {
            attribute: target
                .attribute
                .as_ref()
                .map(|a| a.as_str().into())
                .ok_or_else(|| ReviewError::malformed("change detail target without Attribute"))?,
            name: target.name,
            requires_recreation: target
                .requires_recreation
                .as_ref()
                .map(|r| r.as_str().into()),
        },
        evaluation: detail.evaluation.as_ref().map(|e| e.as_str().into()),
        change_source: detail.change_source.as_ref().map(|s| s.as_str().into()),
        causing_entity: detail.causing_entity,
        summary: None,
        causes: None,
    })
}

fn tag_from_sdk(tag: sdk::Tag) -> Result<Tag> {
    Ok(Tag {
        key: tag
            .key
            .ok_or_else(|| ReviewError::malformed("tag without Key"))?,
        value: tag
            .value
            .ok_or_else(|| ReviewError::malformed("tag without Value"))?,
    })
}

fn parameter_from_sdk(parameter: sdk::Parameter) -> Result<Parameter> {
    Ok(Parameter {
        parameter_key: parameter
            .parameter_key
            .ok_or_else(|| ReviewError::malformed("parameter without ParameterKey"))?,
        parameter_value: parameter.parameter_value,
        use_previous_value: parameter.use_previous_value.unwrap_or_default(),
    })
}
