// Conditional logging macros - only active in debug builds

use crate::error::{Error, Result};
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const DEFAULT_FILTER: &str = "warn";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const LOG_FILE_NAME: &str = "wordle-helper.log";

/// Install the global logger.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Records go to
/// stderr unless `log_file` is given, in which case they are appended there.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| Error::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

/// Default log location for the terminal UI, where stderr would draw over the screen.
#[must_use]
pub fn default_tui_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("wordle-helper").join(LOG_FILE_NAME))
}
