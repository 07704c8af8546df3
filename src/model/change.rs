//! Resource change and change detail structures.
//!
//! Field names follow the `DescribeChangeSet` wire format, so the JSON
//! printed by `aws cloudformation describe-change-set` deserializes
//! directly into these types.
//!
//! The classification enums keep an `Other(String)` variant instead of
//! failing at deserialization time. An unrecognized value is an API
//! contract change, and the component that owns the value (classifier,
//! summarizer, cause resolver, renderer) reports it as a fatal error with
//! the offending string intact.

use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Any value not recognized by this tool
            Other(String),
        }

        impl $name {
            /// The wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(s) => s,
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($text => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Lifecycle action applied to a resource by the change set
    Action {
        Add => "Add",
        Remove => "Remove",
        Modify => "Modify",
    }
}

wire_enum! {
    /// Whether applying a Modify requires destroying and recreating the resource
    Replacement {
        True => "True",
        False => "False",
        Conditional => "Conditional",
    }
}

wire_enum! {
    /// Resource attribute targeted by a field-level change
    TargetAttribute {
        Properties => "Properties",
        Metadata => "Metadata",
        CreationPolicy => "CreationPolicy",
        UpdatePolicy => "UpdatePolicy",
        DeletionPolicy => "DeletionPolicy",
        Tags => "Tags",
    }
}

wire_enum! {
    /// Whether this particular field change forces recreation
    RequiresRecreation {
        Never => "Never",
        Conditionally => "Conditionally",
        Always => "Always",
    }
}

wire_enum! {
    /// Whether the change is certain (Static) or depends on a value only
    /// resolvable at execution time (Dynamic)
    Evaluation {
        Static => "Static",
        Dynamic => "Dynamic",
    }
}

wire_enum! {
    /// What triggered a field-level change
    ChangeSource {
        ResourceReference => "ResourceReference",
        ParameterReference => "ParameterReference",
        ResourceAttribute => "ResourceAttribute",
        DirectModification => "DirectModification",
        Automatic => "Automatic",
    }
}

impl TargetAttribute {
    /// Human-readable form: lowercased, with a space inserted before
    /// "Policy" ("CreationPolicy" becomes "creation policy").
    pub fn display_name(&self) -> String {
        self.as_str().replace("Policy", " Policy").to_lowercase()
    }
}

/// One entry per resource affected by the change set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceChange {
    /// Stable identifier within the template
    #[serde(rename = "LogicalResourceId")]
    pub logical_id: String,

    /// Runtime identifier; absent for not-yet-created resources
    #[serde(
        rename = "PhysicalResourceId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub physical_id: Option<String>,

    /// CloudFormation resource type, e.g. `AWS::S3::Bucket`
    pub resource_type: String,

    pub action: Action,

    /// Only present for Modify actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<Replacement>,

    /// Field-level changes; empty for Add/Remove
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ChangeDetail>,
}

impl ResourceChange {
    pub fn new(logical_id: impl Into<String>, resource_type: impl Into<String>, action: Action) -> Self {
        Self {
            logical_id: logical_id.into(),
            physical_id: None,
            resource_type: resource_type.into(),
            action,
            replacement: None,
            details: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = Some(replacement);
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<ChangeDetail>) -> Self {
        self.details = details;
        self
    }
}

/// The field a change detail applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeTarget {
    pub attribute: TargetAttribute,

    /// Property name; meaningful only when `attribute` is Properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_recreation: Option<RequiresRecreation>,
}

/// One field-level change within a Modify.
///
/// `summary` and `causes` start out empty and are filled in exactly once
/// by the analysis pass. `causes` lists the proximate cause first and the
/// ultimate root cause last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeDetail {
    pub target: ChangeTarget,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_source: Option<ChangeSource>,

    /// Parameter name or `LogicalId.Attribute` reference; meaningful only
    /// for reference-sourced changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub causing_entity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub causes: Option<Vec<String>>,
}

impl ChangeDetail {
    pub fn new(attribute: TargetAttribute) -> Self {
        Self {
            target: ChangeTarget {
                attribute,
                name: None,
                requires_recreation: None,
            },
            evaluation: None,
            change_source: None,
            causing_entity: None,
            summary: None,
            causes: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.target.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_recreation(mut self, recreation: RequiresRecreation) -> Self {
        self.target.requires_recreation = Some(recreation);
        self
    }

    #[must_use]
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = Some(evaluation);
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: ChangeSource) -> Self {
        self.change_source = Some(source);
        self
    }

    #[must_use]
    pub fn with_causing_entity(mut self, entity: impl Into<String>) -> Self {
        self.causing_entity = Some(entity.into());
        self
    }
}
