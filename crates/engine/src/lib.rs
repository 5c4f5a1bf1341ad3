// crates/engine/src/lib.rs
pub mod command;
pub mod error;
pub mod options;
pub mod presets;
pub mod store;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
