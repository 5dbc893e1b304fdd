use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

use crate::defaults;

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "clangfmt",
    version,
    about = "Format C/C++ sources with clang-format, filtered by extension and glob",
    long_about = None
)]
pub struct Args {
    /// Directories or files to scan
    #[arg(value_name = "PATHS", default_value = "../src", value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// List the files that would be formatted, without running clang-format
    #[arg(long = "dry-run", action = ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Edit files in place (default)
    #[arg(short = 'i', long = "in-place", action = ArgAction::SetTrue, default_value_t = true)]
    pub in_place: bool,

    /// Do not modify files; make clang-format report differences instead
    #[arg(long = "no-in-place", action = ArgAction::SetTrue)]
    pub no_in_place: bool,

    /// Comma-separated extensions to format (replaces the default set)
    #[arg(
        long = "extensions",
        value_name = "LIST",
        default_value_t = defaults::default_extension_list()
    )]
    pub extensions: String,

    /// Only process matching paths, e.g. --include 'src/**/*.cpp' (repeatable)
    #[arg(long = "include", value_name = "GLOB", action = ArgAction::Append)]
    pub include: Vec<String>,

    /// Drop matching paths, merged with built-in excludes (repeatable)
    #[arg(long = "exclude", value_name = "GLOB", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Extra directory names to skip, merged with build/bin/obj etc. (repeatable)
    #[arg(long = "exclude-dirs", value_name = "DIR", action = ArgAction::Append)]
    pub exclude_dirs: Vec<String>,

    /// Path to the clang-format executable (overrides PATH lookup)
    #[arg(short = 'c', long = "clang-format", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub clang_format: Option<String>,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// `--no-in-place` wins over the default-on `-i`.
    pub fn in_place_effective(&self) -> bool {
        self.in_place && !self.no_in_place
    }
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if formatter resolution or filter construction fails.
pub fn run() -> Result<i32> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
