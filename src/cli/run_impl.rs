use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::invoker::Invocation;
use crate::selector::{self, FilterConfig};
use crate::{defaults, resolver};

use super::Args;

pub fn run_with_args(args: &Args) -> Result<i32> {
    let formatter = resolver::locate_formatter(args.clang_format.as_deref())?;

    let cwd = env::current_dir().context("determine current directory")?;
    let root = resolver::find_repo_root(&cwd);

    if args.verbose > 0 {
        eprintln!("clang-format: {}", formatter.display());
        eprintln!("repository root: {}", root.display());
    }

    let cfg = FilterConfig::new(
        parse_extensions(&args.extensions),
        &args.exclude_dirs,
        &args.include,
        &args.exclude,
    )?;

    let mut selected: Vec<PathBuf> = Vec::new();
    for input in &args.paths {
        let input = std::path::absolute(input)
            .with_context(|| format!("resolve path: {}", input.display()))?;
        if input.is_file() {
            if cfg.accepts(&input, &root) {
                selected.push(input);
            }
        } else if input.is_dir() {
            selected.extend(selector::collect_files(&input, &root, &cfg));
        } else {
            eprintln!("warning: skipping missing path: {}", input.display());
        }
    }
    selector::sort_and_dedupe(&mut selected);

    if args.verbose > 0 {
        eprintln!("selected {} file(s)", selected.len());
    }

    if selected.is_empty() {
        println!("No files matched; nothing to format.");
        return Ok(0);
    }

    if args.dry_run {
        println!("Would format {} file(s) (--dry-run):", selected.len());
        for file in &selected {
            println!("  {}", file.display());
        }
        return Ok(0);
    }

    let count = selected.len();
    let invocation = Invocation {
        formatter,
        in_place: args.in_place_effective(),
        files: selected,
        workdir: root,
    };
    let code = invocation.run()?;
    if code == 0 {
        println!("Formatted {count} file(s).");
    }
    Ok(code)
}

/// Parses the comma-separated extension list, accepting both `cpp` and
/// `.cpp` forms. An empty result falls back to the default set so the
/// recognized-extension invariant holds.
fn parse_extensions(list: &str) -> HashSet<String> {
    let parsed: HashSet<String> = list
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!(".{}", t.trim_start_matches('.')))
        .collect();
    if parsed.is_empty() {
        defaults::DEFAULT_EXTENSIONS
            .iter()
            .map(|e| (*e).to_string())
            .collect()
    } else {
        parsed
    }
}
