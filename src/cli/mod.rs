//! Review loop orchestration.
//!
//! Inputs come from command line arguments and, when stdin is piped,
//! from stdin lines. Reviews run strictly sequentially — one completes,
//! including its execution step, before the next begins. Executing two
//! change sets against the same stack concurrently would be unsafe, so
//! this is a correctness requirement, not a performance choice.

mod prompt;

pub use prompt::confirm_execution;

use std::io::IsTerminal;

use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::analysis;
use crate::cfn::{extract_change_set_ref, CfnClient};
use crate::config::ReviewConfig;
use crate::error::{Result, ReviewError};
use crate::model::ReviewSubject;
use crate::reports::{render_json, ReportFormat, SummaryReporter};

/// Review every change set referenced by the CLI arguments, then by
/// piped stdin lines.
pub async fn run(config: &ReviewConfig) -> Result<()> {
    for input in &config.inputs {
        review_input(config, input).await?;
    }

    if !std::io::stdin().is_terminal() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            // Echo piped input through, so the tool can sit in a pipeline
            println!("{line}");
            review_input(config, &line).await?;
        }
    }

    Ok(())
}

/// Review one input. Input without a change set ARN passes through
/// silently.
async fn review_input(config: &ReviewConfig, input: &str) -> Result<()> {
    let Some(reference) = extract_change_set_ref(input) else {
        return Ok(());
    };

    tracing::debug!(arn = %reference.arn, "Found change set reference");

    let region = config
        .region
        .clone()
        .unwrap_or_else(|| reference.region.clone());
    let client = CfnClient::for_region(region).await;
    let subject = client.describe(&reference).await?;

    review_change_set(config, &client, &subject).await
}

async fn review_change_set(
    config: &ReviewConfig,
    client: &CfnClient,
    subject: &ReviewSubject,
) -> Result<()> {
    let changeset = &subject.changeset;
    let reporter = SummaryReporter::new();

    if config.output.format == ReportFormat::Summary {
        println!("{}", reporter.render_header(changeset));
        println!();
    }

    if changeset.is_empty() {
        if changeset.is_unavailable() {
            // Creation failed because the template contained no changes;
            // there is nothing to execute.
            let reason = changeset.status_reason.as_deref().unwrap_or_default();
            if config.output.format == ReportFormat::Summary {
                println!("{} {reason}", style("No changes").bold());
            } else {
                tracing::info!("Change set contains no changes: {reason}");
            }
            return Ok(());
        }
        if config.output.format == ReportFormat::Summary {
            println!(
                "{} Outputs may change but changes to outputs cannot be reviewed.",
                style("No resource, parameter or tag changes.").bold()
            );
        }
    }

    let analysis = analysis::analyze(changeset, &subject.stack)?;

    match config.output.format {
        ReportFormat::Summary => {
            let report = reporter.render(&analysis)?;
            if !report.is_empty() {
                println!("{report}");
            }
        }
        ReportFormat::Json => println!("{}", render_json(changeset, &analysis)?),
    }

    if config.behavior.no_execute {
        return Ok(());
    }

    if confirm_execution(&config.behavior).await? {
        println!("Executing change set...");
        let arn = changeset
            .change_set_id
            .as_deref()
            .ok_or_else(|| ReviewError::malformed("change set without ChangeSetId"))?;
        client.execute(arn).await?;
        println!("Stack update started:");
        println!("- Change Set ARN: {arn}");
        println!(
            "- Stack ARN: {}",
            changeset.stack_id.as_deref().unwrap_or_default()
        );
    } else {
        println!("Skipping change set execution");
    }

    Ok(())
}
