//! Clean filenames by keeping only the part after the last underscore.
//!
//! This module provides the filename transform, an ordered and deduplicated
//! list of files to rename, and a batch renamer that previews, applies,
//! and reports the renames file by file.

mod clean;
mod config;
mod drop_list;
mod files;
mod rename;

pub use clean::{clean_file_name, clean_name, is_clean};
pub use config::{CleanNameConfig, CleanNameFileConfig, DEFAULT_MAX_ERRORS};
pub use drop_list::split_path_list;
pub use files::{FileEntry, FileList, PreviewItem};
pub use rename::{BatchRenamer, PlannedRename, RenameOutcome, RenamePlan, RenameResult, RenameStatus, SkipReason};
