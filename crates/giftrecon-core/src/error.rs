use std::path::PathBuf;

use thiserror::Error;

use giftrecon_parser::LoadError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to read source {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Source load failed: {0}")]
    Load(#[from] LoadError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
