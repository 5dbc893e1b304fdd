use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};

/// One prepared clang-format run: resolved executable, edit mode, final file
/// list, and the repository root used as the working directory.
pub struct Invocation {
    pub formatter: PathBuf,
    pub in_place: bool,
    pub files: Vec<PathBuf>,
    pub workdir: PathBuf,
}

impl Invocation {
    /// Runs the formatter, blocking until it exits, with inherited standard
    /// streams. Returns the exit code to propagate: 0 on success, the child's
    /// own code otherwise.
    ///
    /// # Errors
    /// Returns an error only when the child fails to launch (missing binary,
    /// permissions); a non-zero exit from the formatter itself is reported
    /// through the returned code.
    pub fn run(&self) -> Result<i32> {
        let mode_flag = if self.in_place {
            "-i"
        } else {
            "--output-replacements-xml"
        };
        let status = Command::new(&self.formatter)
            .arg(mode_flag)
            .args(&self.files)
            .current_dir(&self.workdir)
            .status()
            .with_context(|| format!("failed to launch {}", self.formatter.display()))?;

        if !status.success() {
            eprintln!("clang-format exited with {status}");
            // Signal terminations have no code; report generic failure.
            return Ok(status.code().unwrap_or(1));
        }
        Ok(0)
    }
}
