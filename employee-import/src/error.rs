use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Count must be at least 1, got {0}.")]
    InvalidCount(i64),
    #[error("Unknown date format '{0}'. Options: DD/MM/YYYY, MM/DD/YYYY")]
    UnknownDateFormat(String),
    #[error("Unknown output format '{0}'. Options: xlsx, csv")]
    UnknownOutputFormat(String),
    #[error("Rows per file must be at least 1")]
    InvalidChunkSize,
    #[error("Start date window of {0} years is out of range")]
    InvalidYearsBack(u32),
    #[error(
        "Name space exhausted: generated {generated} of {requested} unique employees after {attempts} draws"
    )]
    NameSpaceExhausted {
        generated: usize,
        requested: usize,
        attempts: usize,
    },
    #[error("XLSX Error: {0}")]
    XlsxError(#[from] umya_spreadsheet::XlsxError),
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
}

impl ImportError {
    /// Whether the error was caused by bad input rather than by generation or I/O.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ImportError::InvalidCount(_)
                | ImportError::UnknownDateFormat(_)
                | ImportError::UnknownOutputFormat(_)
                | ImportError::InvalidChunkSize
                | ImportError::InvalidYearsBack(_)
        )
    }
}
