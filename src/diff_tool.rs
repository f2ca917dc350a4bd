//! Runner for the external line-comparison program.
//!
//! Wraps `diff FILE_A FILE_B` with captured stdout/stderr and maps its exit
//! status: 0 (identical) and 1 (differences found) are both success.

use crate::error::{Result, SimilarDiffError};
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Default comparison program, looked up on `PATH`.
pub const DEFAULT_DIFF_PROGRAM: &str = "diff";

/// Exit status the comparison program uses when the inputs differ.
const DIFFERENCES_FOUND: i32 = 1;

/// Captured output of a successful comparison run.
#[derive(Debug, Clone)]
pub struct DiffOutput {
    /// Standard output, untrimmed.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
    /// Whether the program reported differences.
    pub differs: bool,
}

impl DiffOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            differs: output.status.code() == Some(DIFFERENCES_FOUND),
        }
    }
}

/// Compare two files with `program` and capture its normal-format output.
///
/// # Returns
///
/// * `Ok(DiffOutput)` - The program exited with 0 or 1
/// * `Err(SimilarDiffError::DiffToolError)` - The program could not be
///   started, was killed, or exited with any other status
pub fn run_diff(program: &str, file_a: &Path, file_b: &Path) -> Result<DiffOutput> {
    debug!(program, file_a = %file_a.display(), file_b = %file_b.display(), "running comparison");

    let output = Command::new(program)
        .arg(file_a)
        .arg(file_b)
        .output()
        .map_err(|e| {
            SimilarDiffError::DiffToolError(format!(
                "failed to execute {}: {} (is it installed?)",
                program, e
            ))
        })?;

    let diff_output = DiffOutput::from_output(&output);

    match output.status.code() {
        Some(0) | Some(DIFFERENCES_FOUND) => Ok(diff_output),
        code => {
            let status = match code {
                Some(c) => format!("exit code {}", c),
                None => "a signal".to_string(),
            };
            Err(SimilarDiffError::DiffToolError(format!(
                "{} terminated with {}: {}",
                program, status, diff_output.stderr
            )))
        }
    }
}
