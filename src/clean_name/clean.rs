//! Filename cleaning: keep only the part of the stem after the last underscore.

use std::ffi::{OsStr, OsString};

/// Return the filename keeping only the part after the last underscore in the stem.
///
/// The extension is preserved.
/// A name without an underscore in the stem is returned unchanged.
///
/// ```rust
/// use rename_tools::clean_name::clean_name;
///
/// assert_eq!(clean_name("example_file_name.txt"), "name.txt");
/// assert_eq!(clean_name("nounderscore"), "nounderscore");
/// assert_eq!(clean_name("foo_.txt"), ".txt");
/// ```
#[must_use]
pub fn clean_name(filename: &str) -> String {
    let (stem, extension) = split_extension(filename);
    match stem.rsplit_once('_') {
        Some((_, new_stem)) => format!("{new_stem}{extension}"),
        None => filename.to_string(),
    }
}

/// Clean a raw file name.
///
/// Names that are not valid UTF-8 are returned unchanged.
#[must_use]
pub fn clean_file_name(filename: &OsStr) -> OsString {
    filename
        .to_str()
        .map_or_else(|| filename.to_os_string(), |name| OsString::from(clean_name(name)))
}

/// Check if the name is already in its cleaned form.
#[must_use]
pub fn is_clean(filename: &str) -> bool {
    let (stem, _) = split_extension(filename);
    !stem.contains('_')
}

/// Split a filename into stem and extension.
///
/// The extension includes the leading dot.
/// A dot at the very start or end of the name does not start an extension,
/// so `.bashrc` and `name.` have no extension.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(index) if index > 0 && index < filename.len() - 1 => filename.split_at(index),
        _ => (filename, ""),
    }
}
