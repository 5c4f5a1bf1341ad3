// crates/engine/src/command.rs
use crate::options::{CaseSensitivity, MatchType, Options, SearchLocation};

const PROGRAM: &str = "rg";
const SECONDS_PER_DAY: i64 = 86_400;

/// Build the ripgrep invocation for `options`.
///
/// Pure and total: every options value maps to some string, including values
/// that violate the include/exclude disjointness (both globs are emitted and
/// may cancel out) and values carrying non-positive numeric filters (the flag
/// is simply omitted).
///
/// Flag order is fixed: case flag, match-type flag, boolean toggles, context,
/// include globs, exclude globs, ignored-directory globs, size bounds, the
/// mtime glob filter, the pattern, the names-only flag, excluded-folder globs.
///
/// User-supplied text (extensions, directory names, the search string) is
/// wrapped in single quotes with no further escaping. A search string that
/// itself contains a single quote produces a command that needs manual
/// touch-up before pasting into a shell; that is a known limitation of the
/// quoting contract, kept so existing inputs keep producing the same output.
pub fn synthesize(options: &Options) -> String {
    let mut cmd = String::from(PROGRAM);

    match options.case_sensitivity {
        CaseSensitivity::Sensitive => cmd.push_str(" -s"),
        CaseSensitivity::Insensitive => cmd.push_str(" -i"),
        CaseSensitivity::Smart => cmd.push_str(" -S"),
    }

    match options.match_type {
        MatchType::Exact => cmd.push_str(" -F"),
        MatchType::Regex => cmd.push_str(" -e"),
        MatchType::Contains => {}
    }

    let toggles = &options.search_options;
    if toggles.hidden {
        cmd.push_str(" --hidden");
    }
    if toggles.binary {
        cmd.push_str(" --binary");
    }
    if toggles.follow_symlinks {
        cmd.push_str(" -L");
    }
    if toggles.multiline {
        cmd.push_str(" -U");
    }
    if toggles.word_match {
        cmd.push_str(" -w");
    }
    if toggles.invert_match {
        cmd.push_str(" -v");
    }

    // The three context flags are independent; nothing stops -B, -A and -C
    // from appearing together.
    if options.context.before > 0 {
        cmd.push_str(&format!(" -B {}", options.context.before));
    }
    if options.context.after > 0 {
        cmd.push_str(&format!(" -A {}", options.context.after));
    }
    if options.context.lines > 0 {
        cmd.push_str(&format!(" -C {}", options.context.lines));
    }

    for ext in &options.included_extensions {
        cmd.push_str(&format!(" -g '*.{ext}'"));
    }
    for ext in &options.excluded_extensions {
        cmd.push_str(&format!(" -g '!*.{ext}'"));
    }
    for dir in &options.ignored_directories {
        cmd.push_str(&format!(" -g '!{dir}/**'"));
    }

    if let Some(min) = positive(options.min_file_size) {
        cmd.push_str(&format!(" --min-filesize {min}K"));
    }
    if let Some(max) = positive(options.max_file_size) {
        cmd.push_str(&format!(" --max-filesize {max}K"));
    }

    // Age filter expressed through the glob mechanism: a negated pattern whose
    // suffix carries the cutoff in seconds, spelled with letter classes so it
    // survives the case-insensitive glob toggle emitted alongside it.
    if let Some(days) = positive(options.max_days_ago) {
        let seconds = days.saturating_mul(SECONDS_PER_DAY);
        cmd.push_str(" --glob-case-insensitive");
        cmd.push_str(&format!(" -g '!*.[tT][iI][mM][eE]-{seconds}'"));
    }

    // The tool requires a pattern argument; an empty search string becomes the
    // match-any placeholder.
    if options.search_string.is_empty() {
        cmd.push_str(" .");
    } else {
        cmd.push_str(&format!(" '{}'", options.search_string));
    }

    if options.search_location == SearchLocation::Folder {
        cmd.push_str(" -l");
    }

    for dir in &options.excluded_folders {
        cmd.push_str(&format!(" -g '!{dir}/**'"));
    }

    cmd
}

fn positive(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Context, ExtensionFilter, SearchToggles};
    use proptest::prelude::*;

    #[test]
    fn default_options_yield_minimal_command() {
        assert_eq!(synthesize(&Options::default()), "rg -S .");
    }

    #[test]
    fn exactly_one_case_flag() {
        for (case, flag) in [
            (CaseSensitivity::Sensitive, " -s"),
            (CaseSensitivity::Insensitive, " -i"),
            (CaseSensitivity::Smart, " -S"),
        ] {
            let opts = Options {
                case_sensitivity: case,
                ..Options::default()
            };
            let cmd = synthesize(&opts);
            assert!(cmd.contains(flag));
            let case_flags = ["-s", "-i", "-S"]
                .iter()
                .filter(|f| cmd.split(' ').any(|tok| tok == **f))
                .count();
            assert_eq!(case_flags, 1, "command: {cmd}");
        }
    }

    #[test]
    fn match_type_flags() {
        let exact = Options {
            match_type: MatchType::Exact,
            ..Options::default()
        };
        assert!(synthesize(&exact).contains(" -F"));

        let regex = Options {
            match_type: MatchType::Regex,
            ..Options::default()
        };
        assert!(synthesize(&regex).contains(" -e"));

        let contains = Options::default();
        let cmd = synthesize(&contains);
        assert!(!cmd.contains(" -F") && !cmd.contains(" -e"));
    }

    #[test]
    fn toggles_emit_in_fixed_order() {
        let opts = Options {
            search_options: SearchToggles {
                hidden: true,
                binary: true,
                follow_symlinks: true,
                multiline: true,
                word_match: true,
                invert_match: true,
            },
            ..Options::default()
        };
        assert_eq!(synthesize(&opts), "rg -S --hidden --binary -L -U -w -v .");
    }

    #[test]
    fn context_flags_may_all_appear() {
        let opts = Options {
            context: Context {
                before: 2,
                after: 3,
                lines: 4,
            },
            ..Options::default()
        };
        assert_eq!(synthesize(&opts), "rg -S -B 2 -A 3 -C 4 .");
    }

    #[test]
    fn one_glob_per_extension() {
        let opts = Options {
            included_extensions: vec!["rs".into(), "toml".into()],
            excluded_extensions: vec!["lock".into()],
            ..Options::default()
        };
        let cmd = synthesize(&opts);
        assert_eq!(cmd.matches("-g '*.").count(), 2);
        assert!(cmd.contains(" -g '*.rs' -g '*.toml'"));
        assert_eq!(cmd.matches("-g '!*.").count(), 1);
        assert!(cmd.contains(" -g '!*.lock'"));
    }

    #[test]
    fn ignored_dirs_before_pattern_excluded_folders_after() {
        let opts = Options {
            search_string: "main".into(),
            ignored_directories: vec!["node_modules".into()],
            excluded_folders: vec!["dist".into()],
            ..Options::default()
        };
        assert_eq!(
            synthesize(&opts),
            "rg -S -g '!node_modules/**' 'main' -g '!dist/**'"
        );
    }

    #[test]
    fn size_bounds_in_kilobytes() {
        let opts = Options {
            min_file_size: Some(10),
            max_file_size: Some(2048),
            ..Options::default()
        };
        assert_eq!(
            synthesize(&opts),
            "rg -S --min-filesize 10K --max-filesize 2048K ."
        );
    }

    #[test]
    fn time_filter_encodes_seconds() {
        let opts = Options {
            max_days_ago: Some(5),
            ..Options::default()
        };
        assert_eq!(
            synthesize(&opts),
            "rg -S --glob-case-insensitive -g '!*.[tT][iI][mM][eE]-432000' ."
        );
    }

    #[test]
    fn zero_or_negative_numerics_emit_nothing() {
        let opts = Options {
            max_days_ago: Some(0),
            min_file_size: Some(-5),
            max_file_size: None,
            context: Context {
                before: -1,
                after: 0,
                lines: 0,
            },
            ..Options::default()
        };
        assert_eq!(synthesize(&opts), "rg -S .");
    }

    #[test]
    fn empty_pattern_becomes_placeholder() {
        let cmd = synthesize(&Options::default());
        assert!(cmd.ends_with(" ."));

        let opts = Options {
            search_string: "TODO".into(),
            ..Options::default()
        };
        assert!(synthesize(&opts).ends_with(" 'TODO'"));
    }

    #[test]
    fn folder_location_appends_names_only_flag() {
        let opts = Options {
            search_location: SearchLocation::Folder,
            ..Options::default()
        };
        assert_eq!(synthesize(&opts), "rg -S . -l");

        for location in [SearchLocation::File, SearchLocation::Both] {
            let opts = Options {
                search_location: location,
                ..Options::default()
            };
            assert!(!synthesize(&opts).contains("-l"));
        }
    }

    // The worked example: exact TODO search over *.ts files, names only.
    #[test]
    fn typescript_todo_scenario() {
        let mut opts = Options {
            search_string: "TODO".into(),
            match_type: MatchType::Exact,
            case_sensitivity: CaseSensitivity::Sensitive,
            search_location: SearchLocation::Folder,
            ..Options::default()
        };
        opts.toggle_extension("ts", ExtensionFilter::Include);

        assert_eq!(synthesize(&opts), "rg -s -F -g '*.ts' 'TODO' -l");
    }

    // Violated disjointness is tolerated: both globs come out.
    #[test]
    fn extension_in_both_lists_emits_both_globs() {
        let opts = Options {
            included_extensions: vec!["ts".into()],
            excluded_extensions: vec!["ts".into()],
            ..Options::default()
        };
        let cmd = synthesize(&opts);
        assert!(cmd.contains(" -g '*.ts'"));
        assert!(cmd.contains(" -g '!*.ts'"));
    }

    proptest! {
        #[test]
        fn synthesize_is_total(
            search_string in "[a-zA-Z0-9 _:!?*&|(){}\\[\\]-]{0,20}",
            included in proptest::collection::vec("[a-z]{1,5}", 0..5),
            excluded in proptest::collection::vec("[a-z]{1,5}", 0..5),
            ignored in proptest::collection::vec("[a-z_.]{1,10}", 0..5),
            folders in proptest::collection::vec("[a-z_.]{1,10}", 0..5),
            max_days_ago in proptest::option::of(-100i64..10_000),
            min_file_size in proptest::option::of(-100i64..1_000_000),
            max_file_size in proptest::option::of(-100i64..1_000_000),
            before in -5i64..50,
            after in -5i64..50,
            lines in -5i64..50,
        ) {
            let opts = Options {
                search_string,
                included_extensions: included,
                excluded_extensions: excluded,
                ignored_directories: ignored,
                excluded_folders: folders,
                max_days_ago,
                min_file_size,
                max_file_size,
                context: Context { before, after, lines },
                ..Options::default()
            };
            let cmd = synthesize(&opts);
            prop_assert!(cmd.starts_with("rg "));
            let include_globs = cmd.matches("-g '*.").count();
            prop_assert_eq!(include_globs, opts.included_extensions.len());
        }
    }
}
