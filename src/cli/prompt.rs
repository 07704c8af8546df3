//! Execute-confirmation prompt with an unattended fallback.

use std::io::IsTerminal;
use std::time::Duration;

use console::Term;

use crate::config::BehaviorConfig;
use crate::error::Result;

/// Ask the operator whether to execute the change set.
///
/// Only an exact `y` approves. Without a terminal on stdin (piped
/// input), falls back to a countdown: execution proceeds after
/// `exec_delay` seconds unless the process is interrupted.
pub async fn confirm_execution(behavior: &BehaviorConfig) -> Result<bool> {
    if behavior.assume_yes {
        return Ok(true);
    }

    let term = Term::stderr();
    if std::io::stdin().is_terminal() {
        term.write_line("")?;
        term.write_str("Execute change set [y/N]? ")?;
        let answer = term.read_line()?;
        Ok(answer == "y")
    } else {
        term.write_line(&format!(
            "Executing change set in {} seconds. Press CTRL+C to abort!",
            behavior.exec_delay
        ))?;
        for remaining in (1..=behavior.exec_delay).rev() {
            term.write_str(&format!("{remaining}. "))?;
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
        term.write_line("")?;
        Ok(true)
    }
}
