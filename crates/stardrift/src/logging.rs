//! File logging. The terminal belongs to the UI, so log records go to
//! `stardrift.log` in the platform data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use env_logger::{Env, Target};
use stardrift_config::project_dirs;

const LOG_FILE: &str = "stardrift.log";

/// Install the global logger. Filter comes from `RUST_LOG` (default `info`).
/// Returns the log file path, or `None` if logging stays disabled.
pub fn init() -> Option<PathBuf> {
    let dirs = project_dirs()?;
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir).ok()?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .ok()?;
    Some(path)
}
