use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Program name looked up on PATH when no explicit path is supplied.
pub const FORMATTER_NAME: &str = "clang-format";

/// Marker file whose presence identifies the repository root.
pub const CONFIG_MARKER: &str = ".clang-format";

/// Ceiling on the upward marker search; guards against degenerate
/// filesystem layouts (e.g. symlink loops).
pub const MAX_ROOT_ASCENT: usize = 20;

/// C/C++ extensions formatted by default (leading dot, case-sensitive).
pub static DEFAULT_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [".c", ".cc", ".cpp", ".cxx", ".h", ".hh", ".hpp", ".hxx"]
        .into_iter()
        .collect()
});

/// Directory names never descended into, wherever they occur in the tree.
pub static DEFAULT_EXCLUDE_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "build",
        "bin",
        "obj",
        "out",
        "cmake-build-debug",
        "cmake-build-release",
        "vcpkg_installed",
        "conan",
        ".git",
        ".idea",
        ".cache",
        ".vscode",
    ]
    .into_iter()
    .collect()
});

/// Globs excluded out of the box: vendored third-party headers that must
/// not be reformatted. Always merged with user-supplied excludes.
pub static DEFAULT_EXCLUDE_GLOBS: &[&str] = &["**/stb_image.h"];

/// Default value shown for `--extensions`.
pub fn default_extension_list() -> String {
    let mut exts: Vec<&str> = DEFAULT_EXTENSIONS.iter().copied().collect();
    exts.sort_unstable();
    exts.join(",")
}
