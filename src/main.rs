//! cfn-review: review and execute CloudFormation change sets.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfn_review::cli;
use cfn_review::config::{BehaviorConfig, OutputConfig, ReviewConfig};
use cfn_review::reports::ReportFormat;

#[derive(Parser)]
#[command(name = "cfn-review")]
#[command(version)]
#[command(about = "Review and execute CloudFormation change sets", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Review a change set by ARN
    cfn-review arn:aws:cloudformation:eu-west-1:123456789012:changeSet/release/1234

    # Pick the change set ARN out of AWS CLI output
    aws cloudformation create-change-set ... | cfn-review

    # Review without ever executing
    aws cloudformation create-change-set ... | cfn-review --no-execute

    # Machine-readable analysis
    cfn-review --output json --no-execute <ARN>")]
struct Cli {
    /// Change set ARNs, or any text containing them
    inputs: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,

    /// Region override (defaults to the region encoded in each ARN)
    #[arg(long)]
    region: Option<String>,

    /// Execute reviewed change sets without prompting
    #[arg(short = 'y', long, env = "CFN_REVIEW_YES")]
    yes: bool,

    /// Review only; never execute
    #[arg(long)]
    no_execute: bool,

    /// Seconds before unattended execution proceeds
    #[arg(long, default_value = "10")]
    exec_delay: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        console::set_colors_enabled(false);
    }

    let config = ReviewConfig {
        inputs: cli.inputs,
        region: cli.region,
        output: OutputConfig {
            format: cli.output,
            no_color: cli.no_color,
        },
        behavior: BehaviorConfig {
            assume_yes: cli.yes,
            no_execute: cli.no_execute,
            exec_delay: cli.exec_delay,
        },
    };

    cli::run(&config).await?;
    Ok(())
}
