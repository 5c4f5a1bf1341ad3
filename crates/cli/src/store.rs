// crates/cli/src/store.rs
use rg_helper_engine::error::{Result, StoreError};
use rg_helper_engine::options::Options;
use rg_helper_engine::store::OptionsStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Options persisted as a pretty-printed JSON document at a fixed path.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OptionsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Options>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, options: &Options) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(options)?)?;
        Ok(())
    }
}

/// `<config_dir>/rg_helper/state.json`, or `None` on platforms without a
/// config directory.
pub fn default_state_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rg_helper").join("state.json"))
}
