//! Ordered, deduplicated list of files to rename.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::clean_name::clean::clean_file_name;
use crate::clean_name::drop_list::split_path_list;

/// A file added to the list together with its canonical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as it was given.
    path: PathBuf,
    /// Resolved absolute path used as the identity of the file.
    canonical: PathBuf,
}

/// Original and cleaned name of a listed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub original: String,
    pub cleaned: String,
}

/// Files to rename in insertion order.
///
/// No two entries share a canonical path.
#[derive(Debug, Default, Clone)]
pub struct FileList {
    entries: Vec<FileEntry>,
    canonical_paths: HashSet<PathBuf>,
}

impl FileEntry {
    /// Create an entry for an existing path that is not a directory.
    ///
    /// Returns `None` for missing paths and directories.
    #[must_use]
    pub fn new(path: PathBuf) -> Option<Self> {
        if !path.exists() || path.is_dir() {
            return None;
        }
        let canonical = crate::canonical_path(&path)?;
        Some(Self { path, canonical })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn canonical(&self) -> &Path {
        &self.canonical
    }

    /// Current filename.
    #[must_use]
    pub fn file_name(&self) -> String {
        crate::path_to_filename_string(&self.path)
    }

    /// Sibling path with the cleaned filename.
    ///
    /// Returns the path itself if cleaning would not leave a usable filename,
    /// such as an empty name or a `.` or `..` component.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        let Some(file_name) = self.path.file_name() else {
            return self.path.clone();
        };
        let cleaned = clean_file_name(file_name);
        if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
            self.path.clone()
        } else {
            self.path.with_file_name(cleaned)
        }
    }

    /// Original and cleaned filename for display.
    #[must_use]
    pub fn preview(&self) -> PreviewItem {
        PreviewItem {
            original: self.file_name(),
            cleaned: crate::path_to_filename_string(&self.target_path()),
        }
    }
}

impl PreviewItem {
    /// True if the name would not change.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.original == self.cleaned
    }
}

impl FileList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the list.
    ///
    /// Missing paths, directories, and files already in the list are ignored.
    /// Returns true if the file was added.
    pub fn add(&mut self, path: impl Into<PathBuf>) -> bool {
        let Some(entry) = FileEntry::new(path.into()) else {
            return false;
        };
        if !self.canonical_paths.insert(entry.canonical.clone()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Add multiple files, returning the number of files added.
    pub fn extend<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths.into_iter().map(|path| self.add(path)).filter(|&added| added).count()
    }

    /// Add files from a drag-and-drop payload, returning the number of files added.
    pub fn add_drop_data(&mut self, data: &str) -> usize {
        self.extend(split_path_list(data))
    }

    /// Remove all files.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.canonical_paths.clear();
    }

    /// Check if the given path, in any form, is already in the list.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        crate::canonical_path(path).is_some_and(|canonical| self.canonical_paths.contains(&canonical))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(FileEntry::path)
    }

    /// Original and cleaned names of all files in list order.
    #[must_use]
    pub fn preview(&self) -> Vec<PreviewItem> {
        self.entries.iter().map(FileEntry::preview).collect()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
