// crates/cli/src/lib.rs
pub mod app;
pub mod args;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod options;
pub mod store;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
