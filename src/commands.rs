// src/commands.rs

//! Runs the inspected commands and shapes their output into panel rows.

use log::{debug, info, warn};
use std::process::{Command, Stdio};

/// Row text shown for panel rows past the end of the output.
pub const ROW_PLACEHOLDER: &str = "---";

/// Output of one command, split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCommand {
    pub name: String,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

/// Splits captured output on line breaks.
///
/// An empty blob yields one row of `placeholder_width` dashes. A single
/// trailing line break does not produce an extra empty row.
pub fn split_output(blob: &str, placeholder_width: usize) -> Vec<String> {
    if blob.is_empty() {
        return vec!["-".repeat(placeholder_width)];
    }
    blob.lines().map(str::to_string).collect()
}

/// Fits `lines` into exactly `rows` panel rows, padding with
/// [`ROW_PLACEHOLDER`] and dropping lines that do not fit.
pub fn panel_rows(lines: &[String], rows: usize) -> Vec<String> {
    (0..rows)
        .map(|i| {
            lines
                .get(i)
                .cloned()
                .unwrap_or_else(|| ROW_PLACEHOLDER.to_string())
        })
        .collect()
}

/// Runs `name` with no arguments and no stdin, capturing both streams.
///
/// A launch failure or a non-zero exit is logged and tolerated; whatever was
/// captured (possibly nothing) is returned.
pub fn run_command(name: &str, placeholder_width: usize) -> CapturedCommand {
    run_command_with(name, Command::new(name), placeholder_width)
}

/// Like [`run_command`], for a prepared `command` shown as `name`.
pub fn run_command_with(name: &str, mut command: Command, placeholder_width: usize) -> CapturedCommand {
    info!("Running: {}", name);
    let (stdout, stderr) = match command.stdin(Stdio::null()).output() {
        Ok(output) => {
            if !output.status.success() {
                warn!("Command '{}' exited with {}", name, output.status);
            }
            debug!(
                "Command '{}' produced {} stdout / {} stderr bytes",
                name,
                output.stdout.len(),
                output.stderr.len()
            );
            (
                String::from_utf8_lossy(&output.stdout).into_owned(),
                String::from_utf8_lossy(&output.stderr).into_owned(),
            )
        }
        Err(e) => {
            warn!("Failed to run '{}': {}", name, e);
            (String::new(), String::new())
        }
    };
    CapturedCommand {
        name: name.to_string(),
        stdout: split_output(&stdout, placeholder_width),
        stderr: split_output(&stderr, placeholder_width),
    }
}
