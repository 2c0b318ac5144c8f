use crate::dataset::error::DatasetError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindStatsError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed building DataFrame: {0}")]
    Frame(#[from] PolarsError),

    #[error("Failed to resolve date period")]
    DateParsing,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Wind threshold must be a finite, non-negative number of knots, got {0}")]
    InvalidThreshold(f64),

    #[error("Rolling window must hold at least one day")]
    EmptyWindow,

    #[error("Reference year {0} is outside the supported calendar range")]
    InvalidReferenceYear(i32),
}
