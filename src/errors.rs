use std::path::PathBuf;
use thiserror::Error;

pub type CResult<T> = Result<T, ScrapeError>;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("the input file {0:?} doesn't exist")]
    InputFileNotFound(PathBuf),

    #[error("column {column} not found in {file:?}")]
    ColumnNotFound { column: String, file: PathBuf },

    #[error("cannot read the input table {file:?}: {source}")]
    InputTable { file: PathBuf, source: csv::Error },

    #[error("search for {query:?} exceeded {seconds}s")]
    SearchTimeout { query: String, seconds: u64 },

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("result extraction exceeded {seconds}s")]
    ExtractTimeout { seconds: u64 },

    #[error("result block {block} has no node matching {selector:?}")]
    MissingNode { selector: String, block: usize },

    #[error("result block {block} has an anchor without href")]
    MissingHref { block: usize },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ScrapeError {
    /// true for the failures that stop a run before any request is issued
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            ScrapeError::Config(_)
                | ScrapeError::InputFileNotFound(_)
                | ScrapeError::ColumnNotFound { .. }
                | ScrapeError::InputTable { .. }
        )
    }
}
