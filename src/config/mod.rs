//! Configuration layer: fixed per-user path + JSON I/O (load/save/reset).
pub mod path;
pub mod io;

pub use path::{config_dir, config_path};
pub use io::{load, save, reset};
