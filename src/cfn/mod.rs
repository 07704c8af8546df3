//! CloudFormation collaborator: change set ARN extraction and the API
//! client the review loop talks to.

mod arn;
mod client;
mod convert;

pub use arn::{extract_change_set_ref, ChangeSetRef};
pub use client::CfnClient;
pub use convert::{changeset_from_sdk, stack_from_sdk};
