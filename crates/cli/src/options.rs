// crates/cli/src/options.rs
use clap::ValueEnum;
use rg_helper_engine::options as engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SearchLocation {
    Folder,
    File,
    Both,
}

impl From<SearchLocation> for engine::SearchLocation {
    fn from(value: SearchLocation) -> Self {
        match value {
            SearchLocation::Folder => Self::Folder,
            SearchLocation::File => Self::File,
            SearchLocation::Both => Self::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Contains,
    Regex,
}

impl From<MatchType> for engine::MatchType {
    fn from(value: MatchType) -> Self {
        match value {
            MatchType::Exact => Self::Exact,
            MatchType::Contains => Self::Contains,
            MatchType::Regex => Self::Regex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
    Smart,
}

impl From<CaseSensitivity> for engine::CaseSensitivity {
    fn from(value: CaseSensitivity) -> Self {
        match value {
            CaseSensitivity::Sensitive => Self::Sensitive,
            CaseSensitivity::Insensitive => Self::Insensitive,
            CaseSensitivity::Smart => Self::Smart,
        }
    }
}
