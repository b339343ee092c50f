//! Library root for doc-pilot
pub mod models;

pub mod config;
pub mod manifest;
pub mod input;
pub mod gemini;
pub mod commands;

// Convenience re-exports
pub use commands::{find, config as config_cmd};
pub use config::{io as cfg_io, path as cfg_path};
pub use gemini::{DocFetcher, FetchError};
