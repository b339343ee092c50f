pub mod find;
pub mod config;
