use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use rename_tools::clean_name::{BatchRenamer, CleanNameConfig, FileList, RenameOutcome, RenamePlan, SkipReason};
use rename_tools::{print_error, print_warning};

use crate::Args;
use crate::config::Config;

/// Rename session holding the files to rename.
#[derive(Debug)]
pub struct CleanName {
    files: FileList,
    config: CleanNameConfig,
}

impl CleanName {
    /// Create a new session from CLI args and add the given files.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    pub fn new(args: Args) -> Result<Self> {
        let config = Config::from_args(args)?;
        let mut files = FileList::new();
        for path in &config.paths {
            if !files.add(path) && config.rename.verbose {
                print_warning!("Ignoring {}: not a file or already added", path.display());
            }
        }
        for data in &config.drop_data {
            let added = files.add_drop_data(data);
            if config.rename.verbose {
                println!("Added {added} file(s) from drop data");
            }
        }
        Ok(Self {
            files,
            config: config.rename,
        })
    }

    /// Preview the renames, ask for confirmation, and rename files.
    ///
    /// # Errors
    /// Returns an error if reading the confirmation answer fails.
    pub fn run(&mut self) -> Result<()> {
        if self.config.debug {
            println!("{}", self.config);
        }

        if self.files.is_empty() {
            println!("No files to rename");
            return Ok(());
        }

        self.print_preview();

        let plan = RenamePlan::from_files(&self.files);
        if !self.config.dryrun && !self.confirm(&plan)? {
            println!("Cancelled");
            return Ok(());
        }

        let outcome = BatchRenamer::from_config(&self.config).commit(&plan);
        self.print_summary(&outcome);

        if !self.config.dryrun {
            self.files = plan.reconcile();
            if self.config.verbose {
                self.print_files();
            }
        }

        Ok(())
    }

    /// Print old and new name for each file.
    fn print_preview(&self) {
        let preview = self.files.preview();
        let max_items = preview.len();
        let max_chars = max_items.checked_ilog10().map_or(1, |d| d as usize + 1);
        let heading = if self.config.dryrun { "Dryrun" } else { "Preview" };
        for (index, item) in preview.iter().enumerate() {
            let number = format!("{:>max_chars$} / {max_items}", index + 1);
            if self.config.dryrun {
                println!("{}", format!("{heading} {number}:").bold().cyan());
            } else {
                println!("{}", format!("{heading} {number}:").bold().magenta());
            }
            rename_tools::show_diff(&item.original, &item.cleaned);
        }
        println!("{} file(s) in list", self.files.len());
    }

    /// Ask the user to confirm the rename unless auto-confirm is enabled.
    fn confirm(&self, plan: &RenamePlan) -> Result<bool> {
        let summary = plan.confirmation_summary(self.config.overwrite);
        if self.config.yes {
            if self.config.verbose {
                println!("{summary}");
            }
            return Ok(true);
        }

        println!("\n{summary}");
        print!("{}", "Proceed with rename? (y/n): ".magenta());
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        Ok(input.trim().eq_ignore_ascii_case("y"))
    }

    fn print_summary(&self, outcome: &RenameOutcome) {
        let heading = if self.config.dryrun {
            "Dryrun summary".cyan().bold()
        } else {
            "Rename complete".green().bold()
        };
        println!("\n{heading}");

        let renamed = format!("Renamed: {}", outcome.renamed());
        println!("{}", if outcome.renamed() > 0 { renamed.green() } else { renamed.normal() });

        let skipped = format!("Skipped: {}", outcome.skipped());
        println!("{}", if outcome.skipped() > 0 { skipped.yellow() } else { skipped.normal() });

        let collisions = outcome.skipped_for(SkipReason::Collision);
        if collisions > 0 && self.config.verbose {
            print_warning!("{collisions} target(s) already existed, use --force to overwrite");
        }

        let errored = outcome.errored();
        if errored > 0 {
            println!("{}", "Errors:".red().bold());
            for error in outcome.errors().take(self.config.max_errors) {
                print_error!("{error}");
            }
            if errored > self.config.max_errors {
                println!("({} more not shown)", errored - self.config.max_errors);
            }
        }
    }

    fn print_files(&self) {
        println!("\n{} file(s) in list:", self.files.len());
        for path in self.files.paths() {
            println!("  {}", rename_tools::path_to_string_relative(path));
        }
    }
}
