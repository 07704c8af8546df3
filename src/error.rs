//! Unified error types for cfn-review.
//!
//! Every failure during a review is fatal to that review: an unrecognized
//! payload shape means the rendered summary could be incomplete or
//! misleading, and an operator must never approve infrastructure changes
//! based on a partial report.

use thiserror::Error;

/// Main error type for cfn-review operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReviewError {
    /// Errors from the change analysis engine
    #[error("Change analysis failed: {context}")]
    Analysis {
        context: String,
        #[source]
        source: AnalysisError,
    },

    /// Errors from the CloudFormation API collaborator
    #[error("CloudFormation request failed: {context}")]
    Cfn {
        context: String,
        #[source]
        source: CfnErrorKind,
    },

    /// Errors while rendering the review report
    #[error("Failed to render review: {0}")]
    Render(#[from] RenderError),

    /// IO errors (terminal, stdin)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the change analysis engine.
///
/// Each variant corresponds to a payload shape the engine does not
/// understand. None of these are retried; the review aborts before any
/// execution prompt is reached.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalysisError {
    /// A resource change carried an action other than Add/Remove/Modify.
    #[error("unexpected resource change action {0:?}")]
    UnexpectedAction(String),

    /// A property change carried an evaluation mode other than Static/Dynamic.
    #[error("unsupported evaluation {evaluation:?} for resource property {property:?}")]
    UnknownEvaluation {
        property: String,
        evaluation: String,
    },

    /// A change detail targeted an attribute the summarizer does not know.
    #[error("unknown change detail target attribute {0:?}")]
    UnknownAttribute(String),

    /// A change detail carried a change source the resolver does not know.
    #[error("unknown change source {0:?}")]
    UnknownChangeSource(String),

    /// A reference-sourced change detail had no causing entity to follow.
    #[error("change source {change_source} requires a causing entity")]
    MissingCausingEntity { change_source: String },

    /// A causal chain referenced a resource with no recorded changes.
    #[error("no recorded changes for referenced resource {0:?}")]
    MissingReference(String),

    /// Two or more resources reference each other in a cycle.
    #[error("reference cycle while resolving causes for {0:?}")]
    CyclicReference(String),
}

/// Specific CloudFormation API error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CfnErrorKind {
    #[error("change set creation failed: {0}")]
    CreateFailed(String),

    #[error("change set execution failed: {0}")]
    ExecuteFailed(String),

    #[error("stack {0:?} not found")]
    StackNotFound(String),

    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    #[error("API error: {0}")]
    Api(String),
}

/// Errors while turning an analysis into terminal output
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RenderError {
    #[error("unknown resource change action {0:?}")]
    UnknownAction(String),

    #[error("unknown replacement value {0:?}")]
    UnknownReplacement(String),

    #[error("unknown recreation requirement {0:?}")]
    UnknownRecreation(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient Result type for cfn-review operations
pub type Result<T> = std::result::Result<T, ReviewError>;

impl ReviewError {
    /// Create an analysis error with context
    pub fn analysis(context: impl Into<String>, source: AnalysisError) -> Self {
        Self::Analysis {
            context: context.into(),
            source,
        }
    }

    /// Create a CloudFormation API error with context
    pub fn cfn(context: impl Into<String>, source: CfnErrorKind) -> Self {
        Self::Cfn {
            context: context.into(),
            source,
        }
    }

    /// Create a malformed-response error for a missing or unusable field
    pub fn malformed(context: impl Into<String>) -> Self {
        Self::cfn(
            "reading API response",
            CfnErrorKind::MalformedResponse(context.into()),
        )
    }
}

impl From<AnalysisError> for ReviewError {
    fn from(err: AnalysisError) -> Self {
        Self::analysis("analyzing change set", err)
    }
}

/// Walk the full error chain and join all causes into one string.
///
/// AWS SDK errors often have terse `Display` impls (e.g. "service error")
/// but useful detail in the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error_display() {
        let err = AnalysisError::UnexpectedAction("Import".to_string());
        assert!(err.to_string().contains("Import"));

        let err = AnalysisError::MissingReference("MyBucket".to_string());
        assert!(err.to_string().contains("MyBucket"));
    }

    #[test]
    fn test_review_error_wraps_analysis() {
        let err = ReviewError::from(AnalysisError::CyclicReference("A".to_string()));
        let display = err.to_string();
        assert!(display.contains("analysis"), "unexpected message: {display}");

        // The source chain keeps the specific failure
        let chained = format_err_chain(&err);
        assert!(chained.contains("reference cycle"), "chain: {chained}");
    }

    #[test]
    fn test_format_err_chain_flattens_sources() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no tty");
        let err = ReviewError::Io(io_err);
        let chained = format_err_chain(&err);
        assert!(chained.contains("no tty"));
    }
}
