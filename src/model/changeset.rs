//! Change set and stack description payloads.
//!
//! These mirror the two `DescribeChangeSet` / `DescribeStacks` payload
//! shapes the engine consumes, normalized to just the fields a review
//! needs.

use serde::{Deserialize, Serialize};

use super::ResourceChange;

/// Execution status of a change set that cannot be executed (e.g. empty).
pub const EXECUTION_STATUS_UNAVAILABLE: &str = "UNAVAILABLE";

/// A stack tag or change set tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// A template parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    pub parameter_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<String>,
    /// When set, the deployed stack's current value is reused
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_previous_value: bool,
}

/// Wire wrapper around a resource change entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Change {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_change: Option<ResourceChange>,
}

/// Description of a change set, as returned by `DescribeChangeSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeSetDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_set_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<Change>,
}

impl ChangeSetDescription {
    /// Iterate over the resource changes, skipping wire entries that carry
    /// no resource change payload.
    pub fn resource_changes(&self) -> impl Iterator<Item = &ResourceChange> {
        self.changes.iter().filter_map(|c| c.resource_change.as_ref())
    }

    /// Whether the change set contains no resource changes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resource_changes().next().is_none()
    }

    /// Whether the change set can never be executed (empty change sets
    /// report an `UNAVAILABLE` execution status).
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.execution_status.as_deref() == Some(EXECUTION_STATUS_UNAVAILABLE)
    }
}

/// Description of the deployed stack the change set applies to, as
/// returned by `DescribeStacks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

/// A change set paired with its owning stack — everything a single review
/// operates on. All of it is transient: constructed fresh per review,
/// decorated by the analysis pass and discarded after rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSubject {
    pub changeset: ChangeSetDescription,
    pub stack: StackDescription,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_change_set_output_deserializes() {
        // Shape of `aws cloudformation describe-change-set` output
        let json = r#"{
            "ChangeSetName": "release-42",
            "ChangeSetId": "arn:aws:cloudformation:eu-west-1:000000000000:changeSet/release-42/aaaa",
            "StackId": "arn:aws:cloudformation:eu-west-1:000000000000:stack/api/bbbb",
            "StackName": "api",
            "Status": "CREATE_COMPLETE",
            "ExecutionStatus": "AVAILABLE",
            "Parameters": [
                {"ParameterKey": "InstanceType", "ParameterValue": "t3.small"},
                {"ParameterKey": "VpcId", "UsePreviousValue": true}
            ],
            "Tags": [{"Key": "team", "Value": "platform"}],
            "Changes": [
                {"Type": "Resource", "ResourceChange": {
                    "LogicalResourceId": "Api",
                    "ResourceType": "AWS::ApiGateway::RestApi",
                    "Action": "Modify"
                }}
            ]
        }"#;

        let changeset: ChangeSetDescription = serde_json::from_str(json).expect("valid payload");
        assert_eq!(changeset.stack_name.as_deref(), Some("api"));
        assert_eq!(changeset.parameters.len(), 2);
        assert!(changeset.parameters[1].use_previous_value);
        assert_eq!(changeset.resource_changes().count(), 1);
        assert!(!changeset.is_empty());
        assert!(!changeset.is_unavailable());
    }

    #[test]
    fn test_empty_change_set_is_unavailable() {
        let changeset = ChangeSetDescription {
            execution_status: Some(EXECUTION_STATUS_UNAVAILABLE.to_string()),
            ..ChangeSetDescription::default()
        };
        assert!(changeset.is_empty());
        assert!(changeset.is_unavailable());
    }
}
