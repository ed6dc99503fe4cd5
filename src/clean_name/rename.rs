//! Batch rename of listed files to their cleaned names.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use itertools::Itertools;

use crate::clean_name::files::FileList;
use crate::clean_name::{CleanNameConfig, DEFAULT_MAX_ERRORS};

/// Source file and the cleaned target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Renames in list order, computed right before committing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    items: Vec<PlannedRename>,
}

/// Why a file was not renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Source file no longer exists.
    Vanished,
    /// Target exists and overwriting is not allowed.
    Collision,
    /// Target is the source file itself.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameStatus {
    Renamed,
    /// Renamed over an existing file.
    Overwritten,
    Skipped(SkipReason),
    /// Filesystem error with the source filename.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameResult {
    pub source: PathBuf,
    pub target: PathBuf,
    pub status: RenameStatus,
}

/// Per-file results of a batch rename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameOutcome {
    results: Vec<RenameResult>,
}

/// Applies a rename plan to the filesystem.
#[derive(Debug, Clone, Default)]
pub struct BatchRenamer {
    overwrite: bool,
    dryrun: bool,
    verbose: bool,
}

impl PlannedRename {
    /// True if the target exists and is a different file than the source.
    #[must_use]
    pub fn is_collision(&self) -> bool {
        self.target_exists() && !crate::is_same_file(&self.source, &self.target)
    }

    /// True if anything occupies the target path, including a dangling symlink.
    #[must_use]
    pub fn target_exists(&self) -> bool {
        fs::symlink_metadata(&self.target).is_ok()
    }

    #[must_use]
    pub fn source_name(&self) -> String {
        crate::path_to_filename_string(&self.source)
    }

    #[must_use]
    pub fn target_name(&self) -> String {
        crate::path_to_filename_string(&self.target)
    }
}

impl RenamePlan {
    /// Plan renames for all files in the list.
    #[must_use]
    pub fn from_files(files: &FileList) -> Self {
        let items = files
            .iter()
            .map(|entry| PlannedRename {
                source: entry.path().to_path_buf(),
                target: entry.target_path(),
            })
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[PlannedRename] {
        &self.items
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Planned renames whose target already exists as another file.
    #[must_use]
    pub fn collisions(&self) -> Vec<&PlannedRename> {
        self.items.iter().filter(|item| item.is_collision()).collect()
    }

    /// Summary lines shown before asking to proceed.
    #[must_use]
    pub fn confirmation_summary(&self, overwrite: bool) -> String {
        let mut lines = vec![format!("{} files will be processed.", self.items.len())];
        let collisions = self.collisions().len();
        if collisions > 0 && !overwrite {
            lines.push(format!(
                "{collisions} target(s) already exist and will be skipped unless overwrite is enabled."
            ));
        }
        lines.join("\n")
    }

    /// Build the file list after committing.
    ///
    /// Each file is listed under its target if that is an existing file,
    /// under its original path if that still exists,
    /// and dropped otherwise.
    #[must_use]
    pub fn reconcile(&self) -> FileList {
        let mut files = FileList::new();
        for item in &self.items {
            if item.target.is_file() {
                files.add(&item.target);
            } else if item.source.exists() {
                files.add(&item.source);
            }
        }
        files
    }
}

impl<'a> IntoIterator for &'a RenamePlan {
    type Item = &'a PlannedRename;
    type IntoIter = std::slice::Iter<'a, PlannedRename>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl BatchRenamer {
    #[must_use]
    pub const fn new(overwrite: bool) -> Self {
        Self {
            overwrite,
            dryrun: false,
            verbose: false,
        }
    }

    #[must_use]
    pub const fn from_config(config: &CleanNameConfig) -> Self {
        Self {
            overwrite: config.overwrite,
            dryrun: config.dryrun,
            verbose: config.verbose,
        }
    }

    /// Only classify files without renaming anything.
    #[must_use]
    pub const fn dryrun(mut self, dryrun: bool) -> Self {
        self.dryrun = dryrun;
        self
    }

    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Rename all planned files in order.
    ///
    /// Each file is handled independently:
    /// a failed rename is recorded and the remaining files are still processed.
    #[must_use]
    pub fn commit(&self, plan: &RenamePlan) -> RenameOutcome {
        let results = plan
            .items
            .iter()
            .map(|item| {
                let status = self.rename_item(item);
                if self.verbose {
                    Self::print_status(item, &status);
                }
                RenameResult {
                    source: item.source.clone(),
                    target: item.target.clone(),
                    status,
                }
            })
            .collect();

        RenameOutcome { results }
    }

    fn rename_item(&self, item: &PlannedRename) -> RenameStatus {
        if !item.source.exists() {
            return RenameStatus::Skipped(SkipReason::Vanished);
        }
        let same_file = crate::is_same_file(&item.source, &item.target);
        if item.target_exists() && !same_file {
            if !self.overwrite {
                return RenameStatus::Skipped(SkipReason::Collision);
            }
            // Rename replaces an existing target file atomically
            return self.rename_file(item, RenameStatus::Overwritten);
        }
        if same_file {
            return RenameStatus::Skipped(SkipReason::Unchanged);
        }
        self.rename_file(item, RenameStatus::Renamed)
    }

    fn rename_file(&self, item: &PlannedRename, success: RenameStatus) -> RenameStatus {
        if self.dryrun {
            return success;
        }
        match fs::rename(&item.source, &item.target) {
            Ok(()) => success,
            Err(error) => RenameStatus::Failed(format!("{}: {error}", item.source_name())),
        }
    }

    fn print_status(item: &PlannedRename, status: &RenameStatus) {
        match status {
            RenameStatus::Renamed | RenameStatus::Overwritten => {
                println!("{}", format!("{status}: {}", item.source_name()).green());
                crate::show_diff(&item.source_name(), &item.target_name());
            }
            RenameStatus::Skipped(_) => {
                crate::print_warning!("{status}: {}", item.source_name());
            }
            RenameStatus::Failed(message) => crate::print_error!("{message}"),
        }
    }
}

impl RenameOutcome {
    #[must_use]
    pub fn results(&self) -> &[RenameResult] {
        &self.results
    }

    /// Number of renamed files, including overwrites.
    #[must_use]
    pub fn renamed(&self) -> usize {
        self.results
            .iter()
            .filter(|result| matches!(result.status, RenameStatus::Renamed | RenameStatus::Overwritten))
            .count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.results
            .iter()
            .filter(|result| matches!(result.status, RenameStatus::Skipped(_)))
            .count()
    }

    #[must_use]
    pub fn errored(&self) -> usize {
        self.errors().count()
    }

    /// Error messages in plan order.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.results.iter().filter_map(|result| match &result.status {
            RenameStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        })
    }

    /// Number of files skipped for the given reason.
    #[must_use]
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.results
            .iter()
            .filter(|result| result.status == RenameStatus::Skipped(reason))
            .count()
    }

    /// Result summary showing at most `max_errors` error messages.
    #[must_use]
    pub fn summary(&self, max_errors: usize) -> String {
        let mut summary = format!("Renamed: {}\nSkipped: {}", self.renamed(), self.skipped());
        if self.errored() > 0 {
            summary.push_str("\nErrors:\n");
            summary.push_str(&self.errors().take(max_errors).join("\n"));
        }
        summary
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Vanished => "source no longer exists",
            Self::Collision => "target already exists",
            Self::Unchanged => "name already clean",
        };
        write!(f, "{text}")
    }
}

impl fmt::Display for RenameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renamed => write!(f, "Renamed"),
            Self::Overwritten => write!(f, "Overwritten"),
            Self::Skipped(reason) => write!(f, "Skipped ({reason})"),
            Self::Failed(message) => write!(f, "Failed: {message}"),
        }
    }
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary(DEFAULT_MAX_ERRORS))
    }
}
