//! Thin wrapper around the CloudFormation API.
//!
//! Covers the three calls a review needs: describing the change set
//! (waiting out an in-progress creation), describing the owning stack,
//! and executing the change set after approval.

use std::time::Duration;

use aws_sdk_cloudformation::types::ChangeSetStatus;

use super::arn::ChangeSetRef;
use super::convert::{changeset_from_sdk, stack_from_sdk};
use crate::error::{format_err_chain, CfnErrorKind, ReviewError, Result};
use crate::model::ReviewSubject;

/// How often an in-progress change set creation is re-checked.
const CREATE_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// CloudFormation client scoped to one region.
pub struct CfnClient {
    inner: aws_sdk_cloudformation::Client,
}

impl CfnClient {
    /// Build a client for the given region with the default credential
    /// chain and a generous retry budget.
    pub async fn for_region(region: impl Into<String>) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.into()))
            .retry_config(aws_config::retry::RetryConfig::standard().with_max_attempts(10))
            .load()
            .await;

        Self {
            inner: aws_sdk_cloudformation::Client::new(&config),
        }
    }

    /// Wrap an existing SDK client.
    pub fn new(inner: aws_sdk_cloudformation::Client) -> Self {
        Self { inner }
    }

    /// Describe the change set and its owning stack.
    ///
    /// Waits for an in-progress creation to finish before returning. A
    /// creation that failed because the template contained no changes is
    /// not an error; the review renders it as "no changes".
    pub async fn describe(&self, change_set: &ChangeSetRef) -> Result<ReviewSubject> {
        loop {
            let output = self
                .inner
                .describe_change_set()
                .change_set_name(&change_set.arn)
                .send()
                .await
                .map_err(|err| {
                    ReviewError::cfn(
                        format!("describing change set {}", change_set.name),
                        CfnErrorKind::Api(format_err_chain(&err)),
                    )
                })?;

            match output.status.clone() {
                Some(ChangeSetStatus::Failed) => {
                    let reason = output.status_reason.clone().unwrap_or_default();
                    if !reason.contains("didn't contain changes") {
                        return Err(ReviewError::cfn(
                            format!("creating change set {}", change_set.name),
                            CfnErrorKind::CreateFailed(reason),
                        ));
                    }
                    return self.subject_from_output(output).await;
                }
                Some(ChangeSetStatus::CreateComplete) => {
                    return self.subject_from_output(output).await;
                }
                _ => {
                    tracing::info!("Change set is being created, waiting");
                    tokio::time::sleep(CREATE_POLL_INTERVAL).await;
                }
            }
        }
    }

    /// Execute the change set, starting the stack update.
    pub async fn execute(&self, arn: &str) -> Result<()> {
        self.inner
            .execute_change_set()
            .change_set_name(arn)
            .send()
            .await
            .map_err(|err| {
                ReviewError::cfn(
                    "executing change set",
                    CfnErrorKind::ExecuteFailed(format_err_chain(&err)),
                )
            })?;

        Ok(())
    }

    async fn subject_from_output(
        &self,
        output: aws_sdk_cloudformation::operation::describe_change_set::DescribeChangeSetOutput,
    ) -> Result<ReviewSubject> {
        let stack_id = output
            .stack_id
            .clone()
            .ok_or_else(|| ReviewError::malformed("change set without StackId"))?;
        let stack = self.describe_stack(&stack_id).await?;

        Ok(ReviewSubject {
            changeset: changeset_from_sdk(output)?,
            stack,
        })
    }

    async fn describe_stack(&self, stack_id: &str) -> Result<crate::model::StackDescription> {
        let output = self
            .inner
            .describe_stacks()
            .stack_name(stack_id)
            .send()
            .await
            .map_err(|err| {
                ReviewError::cfn(
                    format!("describing stack {stack_id}"),
                    CfnErrorKind::Api(format_err_chain(&err)),
                )
            })?;

        let stack = output
            .stacks
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| {
                ReviewError::cfn(
                    "describing stack",
                    CfnErrorKind::StackNotFound(stack_id.to_string()),
                )
            })?;

        stack_from_sdk(stack)
    }
}
