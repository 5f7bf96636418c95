#[derive(thiserror::Error, Debug)]
pub enum AppErrors {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
    #[error(transparent)]
    EmptyDataset(#[from] EmptyDatasetError),
}

/// The source file could not be turned into a trip table.
/// Fatal to the current load; the caller decides how to report it.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed CSV record: {0}")]
    Malformed(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: unparsable start time '{value}'")]
    BadTimestamp { row: u64, value: String },
    #[error("row {row}: invalid {column} value '{value}'")]
    InvalidValue {
        row: u64,
        column: &'static str,
        value: String,
    },
}

/// An aggregation was asked to compute a mode/min/max/mean over zero
/// rows. Raised instead of reporting a placeholder that would read as
/// a real statistic.
#[derive(Debug, thiserror::Error)]
#[error("no trips to compute {operation} over")]
pub struct EmptyDatasetError {
    pub operation: &'static str,
}

pub type AppResult<T> = Result<T, AppErrors>;
