use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::defaults::{CONFIG_MARKER, FORMATTER_NAME, MAX_ROOT_ASCENT};

/// Resolves the clang-format executable.
///
/// An explicit path is `~`-expanded, made absolute, and accepted only if it
/// names an existing regular file. Without one, PATH is searched. Whether the
/// file is actually executable (or a real clang-format) is only discovered
/// when invocation fails.
///
/// # Errors
/// Returns an error if the explicit path does not name a regular file, or if
/// no explicit path was given and PATH lookup fails.
pub fn locate_formatter(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(raw) = explicit {
        let raw = raw.trim();
        if raw.is_empty() {
            bail!("--clang-format was given an empty path");
        }
        let path = std::path::absolute(expand_home(raw))
            .with_context(|| format!("resolve clang-format path: {raw}"))?;
        if !path.is_file() {
            bail!(
                "clang-format path does not exist or is not a file: {}",
                path.display()
            );
        }
        return Ok(path);
    }
    which::which(FORMATTER_NAME).map_err(|_| {
        anyhow::anyhow!(
            "{FORMATTER_NAME} not found on PATH; install it or pass --clang-format PATH"
        )
    })
}

fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Walks upward from `start` looking for the `.clang-format` marker and
/// returns the first directory containing it. Falls back to `start` when the
/// marker is absent or the ascent ceiling is hit.
pub fn find_repo_root(start: &Path) -> PathBuf {
    let mut current = start.to_path_buf();
    for _ in 0..MAX_ROOT_ASCENT {
        if current.join(CONFIG_MARKER).exists() {
            return current;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }
    start.to_path_buf()
}
