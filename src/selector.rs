use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::defaults::{DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_GLOBS};

/// Filter rules applied to every candidate file, whether it came from
/// traversal or was named directly on the command line.
pub struct FilterConfig {
    /// Recognized extensions with a leading dot, case as supplied.
    extensions: HashSet<String>,
    /// Built-in excluded directory names merged with user additions.
    exclude_dirs: HashSet<String>,
    /// None means no include restriction.
    include: Option<GlobSet>,
    /// Built-in exclude globs merged with user additions.
    exclude: GlobSet,
}

impl FilterConfig {
    /// Builds the filter set, merging built-in exclude tables with the
    /// user-supplied additions.
    ///
    /// # Errors
    /// Returns an error if an include or exclude glob fails to compile.
    pub fn new(
        extensions: HashSet<String>,
        extra_exclude_dirs: &[String],
        include_globs: &[String],
        exclude_globs: &[String],
    ) -> Result<Self> {
        let mut exclude_dirs: HashSet<String> =
            DEFAULT_EXCLUDE_DIRS.iter().map(|d| (*d).to_string()).collect();
        exclude_dirs.extend(extra_exclude_dirs.iter().cloned());

        let include = if include_globs.is_empty() {
            None
        } else {
            Some(build_globset(include_globs.iter().map(String::as_str))?)
        };
        let exclude = build_globset(
            DEFAULT_EXCLUDE_GLOBS
                .iter()
                .copied()
                .chain(exclude_globs.iter().map(String::as_str)),
        )?;

        Ok(Self {
            extensions,
            exclude_dirs,
            include,
            exclude,
        })
    }

    /// Full filter test for one file: extension, then include globs (absent
    /// list means include everything), then exclude globs. Exclude dominates
    /// include. Glob matching is relative to `base`, the repository root.
    pub fn accepts(&self, path: &Path, base: &Path) -> bool {
        if !self.matches_extension(path) {
            return false;
        }
        if let Some(ref include) = self.include {
            if !path_matches_globs(path, include, base) {
                return false;
            }
        }
        !path_matches_globs(path, &self.exclude, base)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) => self.extensions.contains(&format!(".{ext}")),
            None => false,
        }
    }

}

/// Name-based directory exclusion: a directory named `build` is skipped
/// wherever it occurs in the tree, regardless of its full path.
pub fn should_skip_dir(name: &OsStr, excluded: &HashSet<String>) -> bool {
    name.to_str().is_some_and(|n| excluded.contains(n))
}

/// Tests `path`, taken relative to `base`, against a compiled glob set.
/// Paths not under `base` never match.
pub fn path_matches_globs(path: &Path, set: &GlobSet, base: &Path) -> bool {
    match path.strip_prefix(base) {
        Ok(rel) => set.is_match(rel),
        Err(_) => false,
    }
}

fn build_globset<'a, I>(patterns: I) -> Result<GlobSet>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        // literal_separator keeps `*` within one path segment; `**/` still
        // matches zero or more leading segments. Matching is anchored.
        let glob = GlobBuilder::new(pattern.trim())
            .literal_separator(true)
            .build()
            .with_context(|| format!("invalid glob pattern: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("compile glob patterns")
}

/// Collects files under `start` that pass every filter. Excluded directory
/// names are pruned before descent, so excluded subtrees are never visited.
/// The result is sorted by path string and deduplicated.
pub fn collect_files(start: &Path, base: &Path, cfg: &FilterConfig) -> Vec<PathBuf> {
    let excluded = cfg.exclude_dirs.clone();
    let mut walker = WalkBuilder::new(start);
    walker.standard_filters(false).follow_links(false);
    walker.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        !(is_dir && should_skip_dir(entry.file_name(), &excluded))
    });

    let mut out = Vec::new();
    for entry in walker.build() {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if cfg.accepts(&path, base) {
            out.push(path);
        }
    }
    sort_and_dedupe(&mut out);
    out
}

/// Deterministic output order: path string ordering, duplicates removed.
pub fn sort_and_dedupe(files: &mut Vec<PathBuf>) {
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files.dedup();
}
