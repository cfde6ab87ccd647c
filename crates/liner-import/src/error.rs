use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read source listing: {path}")]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write generated module: {path}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration parse error: {0}")]
    Config(#[from] config::ConfigError),
}
