//! **Review CloudFormation change sets before executing them.**
//!
//! `cfn-review` takes a change set — a proposed, not-yet-applied set of
//! infrastructure changes — and renders a human-auditable summary of
//! every resource, tag and parameter change, including the causal chain
//! explaining *why* each property changes. Once the operator approves,
//! the change set is executed.
//!
//! ## Modules
//!
//! - [`model`]: the normalized change set data model. API payloads (or
//!   their JSON form, as printed by `aws cloudformation
//!   describe-change-set`) deserialize straight into these types.
//! - [`analysis`]: the change analysis engine — classification,
//!   detail deduplication, per-detail summaries and cause-chain
//!   resolution. Pure computation over in-memory data; every error is
//!   fatal to the review, because a partial summary must never reach an
//!   operator about to approve infrastructure changes.
//! - [`cfn`]: the CloudFormation collaborator — change set ARN
//!   extraction from arbitrary text, and the API client used to
//!   describe and execute change sets.
//! - [`reports`]: terminal and JSON renderers.
//! - [`cli`]: the sequential review loop and the execution prompt.
//!
//! ## Example: analyzing a change set payload
//!
//! ```
//! use cfn_review::analysis::analyze;
//! use cfn_review::model::{ChangeSetDescription, StackDescription};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let payload = r#"{
//!     "StackName": "api",
//!     "Changes": [{"ResourceChange": {
//!         "LogicalResourceId": "Fn",
//!         "ResourceType": "AWS::Lambda::Function",
//!         "Action": "Add"
//!     }}]
//! }"#;
//!
//! let changeset: ChangeSetDescription = serde_json::from_str(payload)?;
//! let analysis = analyze(&changeset, &StackDescription::default())?;
//!
//! assert_eq!(analysis.resources.added.len(), 1);
//! assert_eq!(analysis.resources.added[0].logical_id, "Fn");
//! # Ok(())
//! # }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod analysis;
pub mod cfn;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod reports;

// Re-export main types for convenience
pub use analysis::{analyze, ChangeSetAnalysis, ClassifiedChanges};
pub use cfn::{extract_change_set_ref, CfnClient, ChangeSetRef};
pub use config::{BehaviorConfig, OutputConfig, ReviewConfig};
pub use error::{AnalysisError, CfnErrorKind, RenderError, Result, ReviewError};
pub use model::{
    ChangeDetail, ChangeSetDescription, KeyValueChanges, ResourceChange, ReviewSubject,
    StackDescription,
};
pub use reports::{ReportFormat, SummaryReporter};
