// crates/cli/src/args.rs
use crate::options::{CaseSensitivity, MatchType, SearchLocation};
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

/// Saved options are loaded first, then every flag below is applied on top as
/// a mutation, so a flag given once changes the saved state for future runs.
#[derive(Parser, Debug)]
#[command(
    name = "rg_helper",
    version,
    about = "Build a ripgrep command from saved search options and copy it to the clipboard"
)]
pub struct Args {
    #[command(flatten)]
    pub search: SearchArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub context: ContextArgs,

    #[command(flatten)]
    pub behavior: BehaviorArgs,

    /// Text to search for (omit to keep the saved pattern)
    pub pattern: Option<String>,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct SearchArgs {
    /// Where to search
    #[arg(long = "where", value_enum, value_name = "MODE", help_heading = "Search")]
    pub location: Option<SearchLocation>,

    /// How the pattern is interpreted
    #[arg(long = "match", value_enum, value_name = "MODE", help_heading = "Search")]
    pub match_type: Option<MatchType>,

    /// Case handling
    #[arg(long, value_enum, value_name = "MODE", help_heading = "Search")]
    pub case: Option<CaseSensitivity>,

    /// Clear the saved search pattern
    #[arg(long, conflicts_with = "pattern", help_heading = "Search")]
    pub clear_pattern: bool,

    /// Toggle searching hidden files
    #[arg(long, help_heading = "Search")]
    pub hidden: bool,

    /// Toggle searching binary files
    #[arg(long, help_heading = "Search")]
    pub binary: bool,

    /// Toggle following symlinks
    #[arg(long, help_heading = "Search")]
    pub follow: bool,

    /// Toggle multiline matching
    #[arg(long, help_heading = "Search")]
    pub multiline: bool,

    /// Toggle whole-word matching
    #[arg(long, help_heading = "Search")]
    pub word: bool,

    /// Toggle inverted matching
    #[arg(long, help_heading = "Search")]
    pub invert: bool,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct FilterArgs {
    /// Toggle an extension in the include list (repeatable)
    #[arg(long = "ext", value_name = "EXT", help_heading = "Filters")]
    pub include_ext: Vec<String>,

    /// Toggle an extension in the exclude list (repeatable)
    #[arg(long = "not-ext", value_name = "EXT", help_heading = "Filters")]
    pub exclude_ext: Vec<String>,

    /// Toggle a directory in the prune list (repeatable)
    #[arg(long = "ignore-dir", value_name = "DIR", help_heading = "Filters")]
    pub ignore_dir: Vec<String>,

    /// Toggle a folder in the exclude list (repeatable)
    #[arg(long = "exclude-folder", value_name = "DIR", help_heading = "Filters")]
    pub exclude_folder: Vec<String>,

    /// Only files modified within the last N days (0 removes the filter)
    #[arg(long, value_name = "DAYS", help_heading = "Filters")]
    pub max_days_ago: Option<i64>,

    /// Minimum file size in KB (0 removes the bound)
    #[arg(long, value_name = "KB", help_heading = "Filters")]
    pub min_size: Option<i64>,

    /// Maximum file size in KB (0 removes the bound)
    #[arg(long, value_name = "KB", help_heading = "Filters")]
    pub max_size: Option<i64>,

    /// Replace the include list with the full extension catalog
    #[arg(long, help_heading = "Filters")]
    pub all_extensions: bool,

    /// Clear both extension lists
    #[arg(long, help_heading = "Filters")]
    pub clear_extensions: bool,

    /// Replace the prune list with the common ignored directories
    #[arg(long, help_heading = "Filters")]
    pub default_ignore_dirs: bool,

    /// Replace the excluded-folder list with the common folder catalog
    #[arg(long, help_heading = "Filters")]
    pub all_exclude_folders: bool,

    /// Clear the excluded-folder list
    #[arg(long, help_heading = "Filters")]
    pub clear_exclude_folders: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ContextArgs {
    /// Lines of context before each match (0 clears)
    #[arg(short = 'B', long = "before-context", value_name = "N", help_heading = "Context")]
    pub before: Option<i64>,

    /// Lines of context after each match (0 clears)
    #[arg(short = 'A', long = "after-context", value_name = "N", help_heading = "Context")]
    pub after: Option<i64>,

    /// Lines of context around each match (0 clears)
    #[arg(short = 'C', long = "context", value_name = "N", help_heading = "Context")]
    pub lines: Option<i64>,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct BehaviorArgs {
    /// Apply a preset template (see --list-templates)
    #[arg(long, value_name = "NAME", help_heading = "Behavior")]
    pub template: Option<String>,

    /// List available templates and exit
    #[arg(long, help_heading = "Behavior")]
    pub list_templates: bool,

    /// Do not copy the command to the clipboard
    #[arg(long, help_heading = "Behavior")]
    pub no_clipboard: bool,

    /// Do not save the resulting options
    #[arg(long, help_heading = "Behavior")]
    pub no_save: bool,

    /// Start from defaults, ignoring saved options
    #[arg(long, help_heading = "Behavior")]
    pub reset: bool,

    /// Options file to load and save (defaults to the user config directory)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, help_heading = "Behavior")]
    pub state_file: Option<PathBuf>,
}
