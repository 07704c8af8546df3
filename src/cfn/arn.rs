//! Change set ARN extraction.
//!
//! Inputs arrive as arbitrary text: a bare ARN on the command line, the
//! AWS CLI's table or JSON output piped through the tool, log lines with
//! trailing control characters. A single scan pulls out the first change
//! set ARN, if any.

use std::sync::LazyLock;

use regex::Regex;

static CHANGE_SET_ARN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"arn:aws:cloudformation:([^:]+):\d+:changeSet/([a-zA-Z][-a-zA-Z0-9]*)/[-a-zA-Z0-9:/]+")
        .expect("static regex")
});

/// A change set reference extracted from input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSetRef {
    /// Full ARN, used for API calls
    pub arn: String,
    /// Region parsed out of the ARN
    pub region: String,
    /// Change set name
    pub name: String,
}

/// Scan `input` for a CloudFormation change set ARN.
///
/// Returns `None` when the input contains no change set ARN; such input
/// is passed through the review loop untouched.
pub fn extract_change_set_ref(input: &str) -> Option<ChangeSetRef> {
    let captures = CHANGE_SET_ARN.captures(input)?;
    Some(ChangeSetRef {
        arn: captures.get(0)?.as_str().to_string(),
        region: captures.get(1)?.as_str().to_string(),
        name: captures.get(2)?.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str =
        "arn:aws:cloudformation:eu-west-1:000000000000:changeSet/test/c785c2b0-63fc-11e7-94dc-500c423e34d2";

    #[test]
    fn test_extracts_bare_arn() {
        let reference = extract_change_set_ref(ARN).expect("arn present");
        assert_eq!(reference.arn, ARN);
        assert_eq!(reference.region, "eu-west-1");
        assert_eq!(reference.name, "test");
    }

    #[test]
    fn test_ignores_stack_arn_on_same_line() {
        let input = format!(
            "{ARN}\tarn:aws:cloudformation:eu-west-1:000000000000:stack/ew1-test/c255f8f0-ed45-11e7-b5d2-500c3cf8288d"
        );
        let reference = extract_change_set_ref(&input).expect("arn present");
        assert_eq!(reference.arn, ARN);
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(extract_change_set_ref(""), None);
        assert_eq!(extract_change_set_ref("\n"), None);
        assert_eq!(
            extract_change_set_ref("arn:aws:s3:::some-bucket/object"),
            None
        );
    }
}
