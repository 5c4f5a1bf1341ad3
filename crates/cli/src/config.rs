// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use rg_helper_engine::options::{ExtensionFilter, Options};
use rg_helper_engine::presets::{self, DEFAULT_IGNORED_DIRS};

/// Apply one invocation's worth of mutations to `options`.
///
/// Order matters: the template first (it bulk-overwrites the location and the
/// include list), then the bulk list operations, then individual toggles, then
/// scalar fields. A later mutation therefore wins over an earlier one, which
/// is what a user repeating themselves on one command line expects.
///
/// # Errors
///
/// Returns [`AppError::UnknownTemplate`] when `--template` names no preset.
pub fn apply(args: &Args, options: &mut Options) -> Result<()> {
    if let Some(name) = &args.behavior.template {
        let template =
            presets::find_template(name).ok_or_else(|| AppError::UnknownTemplate(name.clone()))?;
        options.apply_template(template);
    }

    if args.filter.all_extensions {
        options.select_all_extensions(ExtensionFilter::Include);
    }
    if args.filter.clear_extensions {
        options.clear_extensions(ExtensionFilter::Include);
        options.clear_extensions(ExtensionFilter::Exclude);
    }
    if args.filter.default_ignore_dirs {
        options.ignored_directories = DEFAULT_IGNORED_DIRS
            .iter()
            .map(|d| (*d).to_string())
            .collect();
    }
    if args.filter.all_exclude_folders {
        options.select_all_excluded_folders();
    }
    if args.filter.clear_exclude_folders {
        options.clear_excluded_folders();
    }

    for ext in &args.filter.include_ext {
        options.toggle_extension(ext, ExtensionFilter::Include);
    }
    for ext in &args.filter.exclude_ext {
        options.toggle_extension(ext, ExtensionFilter::Exclude);
    }
    for dir in &args.filter.ignore_dir {
        options.toggle_ignored_directory(dir);
    }
    for dir in &args.filter.exclude_folder {
        options.toggle_excluded_folder(dir);
    }

    if let Some(location) = args.search.location {
        options.search_location = location.into();
    }
    if let Some(match_type) = args.search.match_type {
        options.match_type = match_type.into();
    }
    if let Some(case) = args.search.case {
        options.case_sensitivity = case.into();
    }

    if args.search.hidden {
        options.search_options.hidden = !options.search_options.hidden;
    }
    if args.search.binary {
        options.search_options.binary = !options.search_options.binary;
    }
    if args.search.follow {
        options.search_options.follow_symlinks = !options.search_options.follow_symlinks;
    }
    if args.search.multiline {
        options.search_options.multiline = !options.search_options.multiline;
    }
    if args.search.word {
        options.search_options.word_match = !options.search_options.word_match;
    }
    if args.search.invert {
        options.search_options.invert_match = !options.search_options.invert_match;
    }

    if let Some(n) = args.context.before {
        options.context.before = n;
    }
    if let Some(n) = args.context.after {
        options.context.after = n;
    }
    if let Some(n) = args.context.lines {
        options.context.lines = n;
    }

    if let Some(days) = args.filter.max_days_ago {
        options.max_days_ago = Some(days).filter(|d| *d > 0);
    }
    if let Some(kb) = args.filter.min_size {
        options.min_file_size = Some(kb).filter(|k| *k > 0);
    }
    if let Some(kb) = args.filter.max_size {
        options.max_file_size = Some(kb).filter(|k| *k > 0);
    }

    if args.search.clear_pattern {
        options.search_string.clear();
    } else if let Some(pattern) = &args.pattern {
        options.search_string = pattern.clone();
    }

    Ok(())
}
