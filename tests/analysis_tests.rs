//! Integration tests for the change analysis engine.
//!
//! These drive the analysis façade end-to-end over payloads shaped like
//! real `DescribeChangeSet` / `DescribeStacks` responses.

use cfn_review::analysis::{analyze, analyze_resource_changes, classify, diff_key_values};
use cfn_review::error::AnalysisError;
use cfn_review::model::{
    Action, ChangeDetail, ChangeSetDescription, ChangeSource, Evaluation, ResourceChange,
    StackDescription, TargetAttribute,
};
use indexmap::IndexMap;

fn map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Key-value differ
// ============================================================================

mod key_value_tests {
    use super::*;

    #[test]
    fn test_added_key() {
        let changes = diff_key_values(&map(&[]), &map(&[("test", "123")]));
        assert_eq!(changes.added.len(), 1);
        assert_eq!(changes.added[0].key, "test");
        assert_eq!(changes.added[0].value, "123");
        assert!(changes.removed.is_empty());
        assert!(changes.modified.is_empty());
    }

    #[test]
    fn test_modified_key_keeps_old_value() {
        let changes = diff_key_values(&map(&[("a", "123")]), &map(&[("a", "456")]));
        assert!(changes.added.is_empty());
        assert!(changes.removed.is_empty());
        assert_eq!(changes.modified.len(), 1);
        assert_eq!(changes.modified[0].value, "456");
        assert_eq!(changes.modified[0].old_value.as_deref(), Some("123"));
    }

    #[test]
    fn test_identical_maps_yield_no_changes() {
        let m = map(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let changes = diff_key_values(&m, &m);
        assert!(changes.is_empty());
    }
}

// ============================================================================
// Classifier
// ============================================================================

mod classify_tests {
    use super::*;

    #[test]
    fn test_partition_is_total() {
        let changes = vec![
            ResourceChange::new("A", "AWS::S3::Bucket", Action::Add),
            ResourceChange::new("B", "AWS::S3::Bucket", Action::Remove),
            ResourceChange::new("C", "AWS::S3::Bucket", Action::Modify),
        ];
        let classified = classify(changes).unwrap();
        assert_eq!(
            classified.added.len() + classified.removed.len() + classified.modified.len(),
            3
        );
    }

    #[test]
    fn test_unknown_action_is_fatal() {
        let changes = vec![ResourceChange::new(
            "A",
            "AWS::S3::Bucket",
            Action::Other("Dynamic".to_string()),
        )];
        let err = classify(changes).expect_err("unknown action");
        assert!(matches!(err, AnalysisError::UnexpectedAction(_)));
    }
}

// ============================================================================
// Decoration: dedupe + summaries + causes through the façade
// ============================================================================

mod decoration_tests {
    use super::*;

    fn property_detail(name: &str, source: ChangeSource, evaluation: Evaluation) -> ChangeDetail {
        ChangeDetail::new(TargetAttribute::Properties)
            .with_name(name)
            .with_source(source)
            .with_evaluation(evaluation)
    }

    #[test]
    fn test_parameter_driven_change_dedupes_to_one_detail() {
        let change = ResourceChange::new("Fn", "AWS::Lambda::Function", Action::Modify)
            .with_details(vec![
                property_detail("Foo", ChangeSource::DirectModification, Evaluation::Dynamic),
                property_detail("Foo", ChangeSource::ParameterReference, Evaluation::Static)
                    .with_causing_entity("FooParam"),
            ]);

        let classified = analyze_resource_changes(vec![change]).unwrap();
        let details = &classified.modified[0].details;
        assert_eq!(details.len(), 1);
        assert_eq!(
            details[0].summary.as_deref(),
            Some("resource property Foo will change")
        );
        assert_eq!(
            details[0].causes.as_deref(),
            Some(&["changed parameter value of FooParam".to_string()][..])
        );
    }

    #[test]
    fn test_cross_resource_chain_ends_at_root_cause() {
        let resource_a = ResourceChange::new("ResourceA", "AWS::SQS::Queue", Action::Modify)
            .with_details(vec![property_detail(
                "X",
                ChangeSource::DirectModification,
                Evaluation::Static,
            )]);
        let resource_b = ResourceChange::new("ResourceB", "AWS::SNS::Topic", Action::Modify)
            .with_details(vec![property_detail(
                "Y",
                ChangeSource::ResourceReference,
                Evaluation::Dynamic,
            )
            .with_causing_entity("ResourceA.X")]);

        let classified = analyze_resource_changes(vec![resource_a, resource_b]).unwrap();
        let detail = &classified.modified[1].details[0];
        assert_eq!(
            detail.causes.as_deref(),
            Some(
                &[
                    "changed output value of ResourceA.X".to_string(),
                    "direct modification of resource properties".to_string(),
                ][..]
            )
        );
    }

    #[test]
    fn test_reference_to_added_resource_resolves_to_creation() {
        let added = ResourceChange::new("NewQueue", "AWS::SQS::Queue", Action::Add);
        let modified = ResourceChange::new("Fn", "AWS::Lambda::Function", Action::Modify)
            .with_details(vec![property_detail(
                "DeadLetterTarget",
                ChangeSource::ResourceAttribute,
                Evaluation::Dynamic,
            )
            .with_causing_entity("NewQueue.Arn")]);

        let classified = analyze_resource_changes(vec![added, modified]).unwrap();
        let detail = &classified.modified[0].details[0];
        assert_eq!(
            detail.causes.as_deref(),
            Some(
                &[
                    "changed output value of NewQueue.Arn".to_string(),
                    "creation of the resource".to_string(),
                ][..]
            )
        );
    }

    #[test]
    fn test_dangling_reference_is_fatal() {
        let modified = ResourceChange::new("Fn", "AWS::Lambda::Function", Action::Modify)
            .with_details(vec![property_detail(
                "Role",
                ChangeSource::ResourceReference,
                Evaluation::Static,
            )
            .with_causing_entity("MissingRole.Arn")]);

        let err = analyze_resource_changes(vec![modified]).expect_err("dangling reference");
        assert!(matches!(err, AnalysisError::MissingReference(id) if id == "MissingRole"));
    }

    #[test]
    fn test_reference_cycle_is_fatal() {
        let resource_a = ResourceChange::new("A", "AWS::SQS::Queue", Action::Modify)
            .with_details(vec![property_detail(
                "X",
                ChangeSource::ResourceReference,
                Evaluation::Static,
            )
            .with_causing_entity("B.Y")]);
        let resource_b = ResourceChange::new("B", "AWS::SNS::Topic", Action::Modify)
            .with_details(vec![property_detail(
                "Y",
                ChangeSource::ResourceReference,
                Evaluation::Static,
            )
            .with_causing_entity("A.X")]);

        let err = analyze_resource_changes(vec![resource_a, resource_b]).expect_err("cycle");
        assert!(matches!(err, AnalysisError::CyclicReference(_)));
    }
}

// ============================================================================
// Full façade over wire-shaped payloads
// ============================================================================

mod facade_tests {
    use super::*;

    const CHANGESET_PAYLOAD: &str = r#"{
        "ChangeSetName": "release-42",
        "ChangeSetId": "arn:aws:cloudformation:eu-west-1:000000000000:changeSet/release-42/aaaa",
        "StackName": "api",
        "Status": "CREATE_COMPLETE",
        "ExecutionStatus": "AVAILABLE",
        "Tags": [
            {"Key": "team", "Value": "platform"},
            {"Key": "env", "Value": "prod"}
        ],
        "Parameters": [
            {"ParameterKey": "Stage", "ParameterValue": "prod"},
            {"ParameterKey": "VpcId", "UsePreviousValue": true}
        ],
        "Changes": [
            {"Type": "Resource", "ResourceChange": {
                "LogicalResourceId": "Fn",
                "PhysicalResourceId": "api-fn-1A2B3C",
                "ResourceType": "AWS::Lambda::Function",
                "Action": "Modify",
                "Replacement": "False",
                "Details": [
                    {
                        "Target": {"Attribute": "Properties", "Name": "MemorySize", "RequiresRecreation": "Never"},
                        "Evaluation": "Dynamic",
                        "ChangeSource": "DirectModification"
                    },
                    {
                        "Target": {"Attribute": "Properties", "Name": "MemorySize", "RequiresRecreation": "Never"},
                        "Evaluation": "Static",
                        "ChangeSource": "ParameterReference",
                        "CausingEntity": "MemoryParam"
                    },
                    {
                        "Target": {"Attribute": "Metadata", "RequiresRecreation": "Never"},
                        "Evaluation": "Static",
                        "ChangeSource": "DirectModification"
                    }
                ]
            }},
            {"Type": "Resource", "ResourceChange": {
                "LogicalResourceId": "Topic",
                "ResourceType": "AWS::SNS::Topic",
                "Action": "Add"
            }}
        ]
    }"#;

    const STACK_PAYLOAD: &str = r#"{
        "StackName": "api",
        "Tags": [
            {"Key": "team", "Value": "platform"},
            {"Key": "owner", "Value": "alice"}
        ],
        "Parameters": [
            {"ParameterKey": "Stage", "ParameterValue": "staging"},
            {"ParameterKey": "VpcId", "ParameterValue": "vpc-123"}
        ]
    }"#;

    #[test]
    fn test_analyze_produces_three_reports() {
        let changeset: ChangeSetDescription = serde_json::from_str(CHANGESET_PAYLOAD).unwrap();
        let stack: StackDescription = serde_json::from_str(STACK_PAYLOAD).unwrap();

        let analysis = analyze(&changeset, &stack).unwrap();

        // Resource report: one added, one modified; the duplicated
        // MemorySize record collapses to the static parameter reference.
        assert_eq!(analysis.resources.added.len(), 1);
        assert_eq!(analysis.resources.modified.len(), 1);
        let details = &analysis.resources.modified[0].details;
        assert_eq!(details.len(), 2);
        assert_eq!(
            details[0].summary.as_deref(),
            Some("resource property MemorySize will change")
        );
        assert_eq!(
            details[0].causes.as_deref(),
            Some(&["changed parameter value of MemoryParam".to_string()][..])
        );
        assert_eq!(details[1].summary.as_deref(), Some("resource metadata changed"));

        // Tag report: env added, owner removed, team unchanged.
        assert_eq!(analysis.tags.added.len(), 1);
        assert_eq!(analysis.tags.added[0].key, "env");
        assert_eq!(analysis.tags.removed.len(), 1);
        assert_eq!(analysis.tags.removed[0].key, "owner");
        assert!(analysis.tags.modified.is_empty());

        // Parameter report: Stage modified, reused VpcId unchanged.
        assert!(analysis.parameters.added.is_empty());
        assert!(analysis.parameters.removed.is_empty());
        assert_eq!(analysis.parameters.modified.len(), 1);
        assert_eq!(analysis.parameters.modified[0].key, "Stage");
        assert_eq!(analysis.parameters.modified[0].old_value.as_deref(), Some("staging"));
        assert_eq!(analysis.parameters.modified[0].value, "prod");
    }

    #[test]
    fn test_analyze_does_not_touch_inputs() {
        let changeset: ChangeSetDescription = serde_json::from_str(CHANGESET_PAYLOAD).unwrap();
        let stack: StackDescription = serde_json::from_str(STACK_PAYLOAD).unwrap();

        let before = changeset.clone();
        let _ = analyze(&changeset, &stack).unwrap();
        assert_eq!(changeset, before);
    }

    #[test]
    fn test_stack_level_tag_edit_has_its_own_cause() {
        let change = ResourceChange::new("Bucket", "AWS::S3::Bucket", Action::Modify)
            .with_details(vec![ChangeDetail::new(TargetAttribute::Tags)]);

        let classified = analyze_resource_changes(vec![change]).unwrap();
        let detail = &classified.modified[0].details[0];
        assert_eq!(detail.summary.as_deref(), Some("resource tags changed"));
        assert_eq!(
            detail.causes.as_deref(),
            Some(&["changed stack tags".to_string()][..])
        );
    }
}
