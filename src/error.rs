use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read word list '{}': {source}", .path.display())]
    WordListRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open log file '{}': {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already installed")]
    Logger(#[from] log::SetLoggerError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
