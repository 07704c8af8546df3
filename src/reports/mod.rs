//! Report generators for the review output.

mod json;
mod labels;
mod summary;

pub use json::render_json;
pub use labels::{
    action_marker, key_value_line, recreation_label, replacement_label, resource_heading,
};
pub use summary::SummaryReporter;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for the review report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Human-readable terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
