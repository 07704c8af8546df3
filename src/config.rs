//! Runtime configuration assembled by the CLI entry point.

use crate::reports::ReportFormat;

/// Output settings for one invocation.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: ReportFormat,
    pub no_color: bool,
}

/// Execution behavior settings.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Execute without prompting
    pub assume_yes: bool,
    /// Review only; never execute
    pub no_execute: bool,
    /// Countdown before unattended execution, in seconds
    pub exec_delay: u64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            assume_yes: false,
            no_execute: false,
            exec_delay: 10,
        }
    }
}

/// Fully-resolved settings for one run.
#[derive(Debug, Clone, Default)]
pub struct ReviewConfig {
    /// Command line inputs to scan for change set ARNs
    pub inputs: Vec<String>,
    /// Region override; defaults to the region encoded in each ARN
    pub region: Option<String>,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}
