mod clean_name;
mod config;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::clean_name::CleanName;

#[derive(Parser)]
#[command(
    author,
    version,
    name = env!("CARGO_BIN_NAME"),
    about = "Rename files to keep only the part after the last underscore"
)]
pub(crate) struct Args {
    /// Files to rename
    #[arg(value_hint = clap::ValueHint::FilePath)]
    paths: Vec<PathBuf>,

    /// Drag-and-drop list of files, with paths containing spaces wrapped in braces
    #[arg(short, long, num_args = 1, action = clap::ArgAction::Append, value_name = "DATA")]
    drop: Vec<String>,

    /// Print debug information
    #[arg(short = 'D', long)]
    debug: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    force: bool,

    /// Maximum number of errors to show in the summary
    #[arg(short, long, value_name = "COUNT")]
    max_errors: Option<usize>,

    /// Only print changes without renaming files
    #[arg(short, long)]
    print: bool,

    /// Rename without asking for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Generate shell completion
    #[arg(short = 'l', long, name = "SHELL")]
    completion: Option<Shell>,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(ref shell) = args.completion {
        rename_tools::generate_shell_completion(*shell, Args::command(), env!("CARGO_BIN_NAME"))
    } else {
        CleanName::new(args)?.run()
    }
}

#[cfg(test)]
mod args_tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_paths_and_flags() {
        let args = Args::try_parse_from(["cleanname", "a_b.txt", "c_d.pdf", "-f", "-y", "-m", "5"]).unwrap();
        assert_eq!(args.paths, vec![PathBuf::from("a_b.txt"), PathBuf::from("c_d.pdf")]);
        assert!(args.force);
        assert!(args.yes);
        assert!(!args.print);
        assert_eq!(args.max_errors, Some(5));
    }

    #[test]
    fn drop_can_be_repeated() {
        let args = Args::try_parse_from(["cleanname", "-d", "{/tmp/a b.txt}", "--drop", "/tmp/c.txt"]).unwrap();
        assert_eq!(args.drop, vec!["{/tmp/a b.txt}", "/tmp/c.txt"]);
        assert!(args.paths.is_empty());
    }
}
