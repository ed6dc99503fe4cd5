pub mod clean_name;
pub mod config;

pub use config::config_path;

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::Shell;
use colored::{ColoredString, Colorize};
use difference::{Changeset, Difference};

/// Format bool value as a coloured string.
#[must_use]
pub fn colorize_bool(value: bool) -> ColoredString {
    if value { "true".green() } else { "false".red() }
}

/// Resolve a path to its canonical absolute form.
///
/// Uses `dunce` so Windows paths are returned without the `\\?\` prefix when possible.
/// Returns `None` if the path does not exist or cannot be resolved.
///
/// ```rust
/// use std::path::Path;
/// use rename_tools::canonical_path;
///
/// assert!(canonical_path(Path::new("src")).is_some());
/// assert!(canonical_path(Path::new("does-not-exist.txt")).is_none());
/// ```
#[must_use]
pub fn canonical_path(path: &Path) -> Option<PathBuf> {
    dunce::canonicalize(path).ok()
}

/// Check if two paths resolve to the same file.
///
/// Both paths must exist, otherwise they are not considered the same.
#[must_use]
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (canonical_path(a), canonical_path(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Convert the given path to be relative to the current working directory.
/// Returns the original path if the relative path cannot be created.
#[must_use]
pub fn get_relative_path_from_current_working_directory(path: &Path) -> PathBuf {
    env::current_dir().map_or_else(
        |_| path.to_path_buf(),
        |current_dir| path.strip_prefix(&current_dir).unwrap_or(path).to_path_buf(),
    )
}

/// Convert `OsStr` to String with invalid Unicode handling.
pub fn os_str_to_string(name: &OsStr) -> String {
    name.to_str().map_or_else(
        || name.to_string_lossy().replace('\u{FFFD}', ""),
        std::string::ToString::to_string,
    )
}

/// Convert given path to string with invalid Unicode handling.
pub fn path_to_string(path: &Path) -> String {
    path.to_str().map_or_else(
        || path.to_string_lossy().to_string().replace('\u{FFFD}', ""),
        std::string::ToString::to_string,
    )
}

/// Convert given path to filename string with invalid Unicode handling.
#[must_use]
pub fn path_to_filename_string(path: &Path) -> String {
    os_str_to_string(path.file_name().unwrap_or_default())
}

/// Get relative path and convert to string with invalid unicode handling.
#[must_use]
pub fn path_to_string_relative(path: &Path) -> String {
    path_to_string(&get_relative_path_from_current_working_directory(path))
}

#[inline]
pub fn print_error(message: &str) {
    eprintln!("{}", format!("Error: {message}").red());
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        $crate::print_error(&format!($($arg)*))
    };
}

#[inline]
pub fn print_warning(message: &str) {
    eprintln!("{}", message.yellow());
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        $crate::print_warning(&format!($($arg)*))
    };
}

/// Create a coloured diff of a filename and its cleaned form.
///
/// The new name is indented so that its first shared segment lines up with the old name:
/// ```text
/// FALLSEM2025-26_VL_BSTS302P_The-Celebrity-problem.pdf
///                            The-Celebrity-problem.pdf
/// ```
#[must_use]
pub fn color_diff(old: &str, new: &str) -> (String, String) {
    let changeset = Changeset::new(old, new, "");
    let (mut old_diff, mut new_diff) = alignment_padding(old, new, &changeset.diffs);

    for diff in &changeset.diffs {
        match diff {
            Difference::Same(text) => {
                old_diff.push_str(text);
                new_diff.push_str(text);
            }
            Difference::Add(text) => new_diff.push_str(&highlight(text, true).to_string()),
            Difference::Rem(text) => old_diff.push_str(&highlight(text, false).to_string()),
        }
    }

    (old_diff, new_diff)
}

/// Leading spaces for old and new name based on the first meaningful shared segment.
fn alignment_padding(old: &str, new: &str, diffs: &[Difference]) -> (String, String) {
    let anchor = diffs.iter().find_map(|diff| match diff {
        Difference::Same(text) if text.chars().count() >= 3 && !text.trim().is_empty() => {
            Some((old.find(text.as_str())?, new.find(text.as_str())?))
        }
        _ => None,
    });
    match anchor {
        Some((old_index, new_index)) => (
            " ".repeat(new_index.saturating_sub(old_index)),
            " ".repeat(old_index.saturating_sub(new_index)),
        ),
        None => (String::new(), String::new()),
    }
}

/// Added text is green and removed text red, with whitespace shown as background.
fn highlight(text: &str, added: bool) -> ColoredString {
    let whitespace = text.chars().all(char::is_whitespace);
    match (added, whitespace) {
        (true, true) => text.on_green(),
        (true, false) => text.green(),
        (false, true) => text.on_red(),
        (false, false) => text.red(),
    }
}

/// Print the old name and, if it changes, the aligned new name below it.
pub fn show_diff(old: &str, new: &str) {
    let (old_diff, new_diff) = color_diff(old, new);
    println!("{old_diff}");
    if old != new {
        println!("{new_diff}");
    }
}

/// Write a shell completion script for the given shell to the user's completion directory.
///
/// # Errors
/// Returns an error if the shell is unsupported or the script cannot be written.
pub fn generate_shell_completion(shell: Shell, mut command: Command, command_name: &str) -> Result<()> {
    let out_dir = shell_completion_dir(shell)?;
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create completion directory {}", out_dir.display()))?;
    let path = clap_complete::generate_to(shell, &mut command, command_name, &out_dir)?;
    println!("Completion file generated to: {}", path_to_string(&path));
    Ok(())
}

/// User-specific completion directory for the given shell.
fn shell_completion_dir(shell: Shell) -> Result<PathBuf> {
    let home = dirs::home_dir().context("Failed to get home directory")?;
    let dir = match shell {
        Shell::Bash => home.join(".bash_completion.d"),
        Shell::Elvish => home.join(".elvish"),
        Shell::Fish => home.join(".config/fish/completions"),
        Shell::PowerShell if cfg!(windows) => home.join(r"Documents\PowerShell\completions"),
        Shell::PowerShell => home.join(".config/powershell/completions"),
        Shell::Zsh => home.join(".zsh/completions"),
        _ => anyhow::bail!("Unsupported shell: {shell}"),
    };
    Ok(dir)
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    use std::fs::File;

    use tempfile::tempdir;

    #[test]
    fn test_canonical_path_existing_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        File::create(&file).unwrap();

        let canonical = canonical_path(&file).unwrap();
        assert!(canonical.is_absolute());
        assert_eq!(canonical.file_name().unwrap(), "file.txt");
    }

    #[test]
    fn test_canonical_path_missing_file() {
        let dir = tempdir().unwrap();
        assert!(canonical_path(&dir.path().join("missing.txt")).is_none());
    }

    #[test]
    fn test_is_same_file_through_dot_components() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        File::create(&file).unwrap();

        let indirect = dir.path().join(".").join("file.txt");
        assert!(is_same_file(&file, &indirect));
    }

    #[test]
    fn test_is_same_file_different_files() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        File::create(&a).unwrap();
        File::create(&b).unwrap();

        assert!(!is_same_file(&a, &b));
    }

    #[test]
    fn test_is_same_file_missing_target() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        File::create(&a).unwrap();

        assert!(!is_same_file(&a, &dir.path().join("missing.txt")));
    }

    #[test]
    fn test_path_to_filename_string() {
        assert_eq!(path_to_filename_string(Path::new("/tmp/some_file.pdf")), "some_file.pdf");
        assert_eq!(path_to_filename_string(Path::new("")), "");
    }

    #[test]
    fn test_color_diff_without_changes() {
        colored::control::set_override(false);
        let (old, new) = color_diff("name.txt", "name.txt");
        assert_eq!(old, new);
    }

    #[test]
    fn test_color_diff_stacked_aligns_common_suffix() {
        colored::control::set_override(false);
        let (old, new) = color_diff("prefix_name.txt", "name.txt");
        assert_eq!(old, "prefix_name.txt");
        assert_eq!(new, "       name.txt");
    }

    #[test]
    fn test_color_diff_without_shared_segment() {
        colored::control::set_override(false);
        let (old, new) = color_diff("ab_c", "c");
        assert_eq!(old, "ab_c");
        assert_eq!(new, "c");
    }
}
