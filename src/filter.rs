//! Name-based filtering rules shared by every traversal
//!
//! The rules are fixed constants. There is no runtime configuration of what
//! gets skipped or dumped.

/// Directory names that are never descended into.
pub const IGNORED_DIRS: &[&str] = &[
    "bin",
    "obj",
    ".vs",
    "node_modules",
    ".git",
    ".idea",
    ".vscode",
    "packages",
    "dist",
    "logs",
    "__pycache__",
];

/// Binary, log and temp file extensions that never show up in any output.
pub const IGNORED_EXTENSIONS: &[&str] = &[".dll", ".exe", ".pdb", ".log", ".tmp", ".cache"];

/// Source, markup, config and project extensions whose content gets dumped.
pub const INTERESTING_EXTENSIONS: &[&str] = &[
    ".cs", ".cshtml", ".json", ".js", ".css", ".xml", ".config", ".csproj", ".sln", ".md",
];

/// Check if a directory should be skipped (ignore set or any dot-directory).
pub fn should_ignore_dir(name: &str) -> bool {
    IGNORED_DIRS.contains(&name) || name.starts_with('.')
}

/// Check if a file should be skipped based on its extension.
pub fn should_ignore_file(name: &str) -> bool {
    ends_with_any(name, IGNORED_EXTENSIONS)
}

/// Check if a file's content is worth dumping.
pub fn is_interesting_file(name: &str) -> bool {
    ends_with_any(name, INTERESTING_EXTENSIONS)
}

/// Case-insensitive suffix match against a list of extensions.
fn ends_with_any(name: &str, extensions: &[&str]) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext))
}
