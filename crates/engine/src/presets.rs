// crates/engine/src/presets.rs
use crate::options::SearchLocation;

/// Extension catalog backing the select-all operation.
pub const COMMON_EXTENSIONS: &[&str] = &[
    "js", "ts", "jsx", "tsx", "css", "scss", "html", "md", "json", "yaml", "yml", "py", "rb", "go",
    "rs", "java", "php", "c", "cpp", "h", "sh", "txt",
];

/// Directories usually worth pruning from a search.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".vite",
    ".next",
    "dist",
    ".dist",
    "generated",
    "cache",
    ".cache",
    "build",
    ".build",
    "target",
    "vendor",
    "public",
    "static",
    "venv",
];

/// Folder catalog backing the excluded-folder select-all operation.
pub const COMMON_FOLDERS: &[&str] = &[
    "node_modules",
    "dist",
    ".git",
    "build",
    "coverage",
    "tmp",
    "temp",
    "logs",
    "public",
    "assets",
    "vendor",
    "static",
    "venv",
    "cache",
    ".cache",
    ".vscode",
    ".idea",
];

/// A named preset: applying one overwrites the search location and the
/// include-extension list, leaving everything else alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub search_location: SearchLocation,
    pub included_extensions: &'static [&'static str],
}

pub const TEMPLATES: &[Template] = &[
    Template {
        name: "javascript",
        search_location: SearchLocation::Both,
        included_extensions: &["js", "ts", "jsx", "tsx"],
    },
    Template {
        name: "documentation",
        search_location: SearchLocation::File,
        included_extensions: &["md", "txt", "pdf"],
    },
    Template {
        name: "configuration",
        search_location: SearchLocation::Folder,
        included_extensions: &["json", "yaml", "yml", "toml", "ini", "env"],
    },
];

/// Look up a template by name, case-insensitively.
pub fn find_template(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
