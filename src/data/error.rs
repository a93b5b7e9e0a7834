use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Fatal problems reading one of the rental sources.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("Failed to read '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Unsupported file extension for '{0}' (expected csv, json or parquet)")]
    UnsupportedFormat(PathBuf),

    #[error("Malformed CSV in '{path}'")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed JSON in '{path}'")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read parquet file '{path}'")]
    Parquet {
        path: PathBuf,
        #[source]
        source: ParquetError,
    },

    #[error("Failed to decode parquet record batch in '{path}'")]
    Arrow {
        path: PathBuf,
        #[source]
        source: ArrowError,
    },

    #[error("Required column '{column}' not found in '{path}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("'{path}' row {row}, column '{column}': {message}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: String,
        message: String,
    },
}
