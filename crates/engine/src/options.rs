// crates/engine/src/options.rs
use crate::presets::{COMMON_EXTENSIONS, COMMON_FOLDERS, Template};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchLocation {
    /// Only print the names of matching files
    Folder,
    /// Search file contents
    File,
    /// File contents and names
    #[default]
    Both,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Literal match, no pattern interpretation
    Exact,
    /// Substring/regex match (the tool's default mode)
    #[default]
    Contains,
    /// Pattern passed through an explicit pattern flag
    Regex,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
    /// Insensitive unless the pattern contains an uppercase letter
    #[default]
    Smart,
}

/// Which of the two extension lists a toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionFilter {
    Include,
    Exclude,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchToggles {
    pub hidden: bool,
    pub binary: bool,
    pub follow_symlinks: bool,
    pub multiline: bool,
    pub word_match: bool,
    pub invert_match: bool,
}

/// Context line counts. Zero (or below) means the flag is not emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    pub before: i64,
    pub after: i64,
    pub lines: i64,
}

/// Everything the user can configure for one search.
///
/// The record round-trips through the persisted JSON document; field names are
/// camelCase and every field has a default so documents written by older
/// versions still load. Numeric filters are signed: a document carrying a
/// negative value deserializes fine and the synthesizer treats non-positive
/// values as "no filter".
///
/// The extension lists are sets with insertion order; [`Options::toggle_extension`]
/// keeps an extension out of both lists at once, best-effort. Nothing re-checks
/// that invariant later, so a hand-edited document can violate it and the
/// synthesized command will simply carry both globs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub search_location: SearchLocation,
    pub search_string: String,
    pub match_type: MatchType,
    pub included_extensions: Vec<String>,
    pub excluded_extensions: Vec<String>,
    pub ignored_directories: Vec<String>,
    pub excluded_folders: Vec<String>,
    pub max_days_ago: Option<i64>,
    pub min_file_size: Option<i64>,
    pub max_file_size: Option<i64>,
    pub case_sensitivity: CaseSensitivity,
    pub search_options: SearchToggles,
    pub context: Context,
}

impl Options {
    /// Toggle `ext` in the chosen list. Adding to one list removes the
    /// extension from the opposite list so the include/exclude sets stay
    /// disjoint going forward.
    pub fn toggle_extension(&mut self, ext: &str, filter: ExtensionFilter) {
        let (chosen, opposite) = match filter {
            ExtensionFilter::Include => {
                (&mut self.included_extensions, &mut self.excluded_extensions)
            }
            ExtensionFilter::Exclude => {
                (&mut self.excluded_extensions, &mut self.included_extensions)
            }
        };

        if let Some(pos) = chosen.iter().position(|e| e == ext) {
            chosen.remove(pos);
            return;
        }
        opposite.retain(|e| e != ext);
        chosen.push(ext.to_string());
    }

    pub fn toggle_ignored_directory(&mut self, name: &str) {
        toggle_membership(&mut self.ignored_directories, name);
    }

    pub fn toggle_excluded_folder(&mut self, name: &str) {
        toggle_membership(&mut self.excluded_folders, name);
    }

    /// Apply a preset. Overwrites the search location and the include list,
    /// nothing else.
    pub fn apply_template(&mut self, template: &Template) {
        self.search_location = template.search_location;
        self.included_extensions = template
            .included_extensions
            .iter()
            .map(|e| (*e).to_string())
            .collect();
    }

    /// Replace the chosen extension list with the full catalog.
    pub fn select_all_extensions(&mut self, filter: ExtensionFilter) {
        let catalog = COMMON_EXTENSIONS.iter().map(|e| (*e).to_string()).collect();
        match filter {
            ExtensionFilter::Include => self.included_extensions = catalog,
            ExtensionFilter::Exclude => self.excluded_extensions = catalog,
        }
    }

    pub fn clear_extensions(&mut self, filter: ExtensionFilter) {
        match filter {
            ExtensionFilter::Include => self.included_extensions.clear(),
            ExtensionFilter::Exclude => self.excluded_extensions.clear(),
        }
    }

    /// Replace the excluded-folder list with the full catalog.
    pub fn select_all_excluded_folders(&mut self) {
        self.excluded_folders = COMMON_FOLDERS.iter().map(|f| (*f).to_string()).collect();
    }

    pub fn clear_excluded_folders(&mut self) {
        self.excluded_folders.clear();
    }
}

fn toggle_membership(set: &mut Vec<String>, name: &str) {
    if let Some(pos) = set.iter().position(|e| e == name) {
        set.remove(pos);
    } else {
        set.push(name.to_string());
    }
}
