// crates/engine/src/store.rs
use crate::error::Result;
use crate::options::Options;

/// Load/save seam for the persisted options document.
///
/// The engine never touches storage itself; the calling layer injects an
/// implementation (a JSON file in practice, an in-memory map in tests).
pub trait OptionsStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Options>>;

    fn save(&self, options: &Options) -> Result<()>;
}
