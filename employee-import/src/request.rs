use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::employee::DateFormat;
use crate::error::ImportError;

pub const MAX_PER_FILE: usize = 1000;
pub const DEFAULT_YEARS_BACK: u32 = 5;
/// Draws allowed per requested employee before giving up on finding unique names.
pub const ATTEMPTS_PER_RECORD: usize = 100;
const MIN_ATTEMPTS: usize = 1000;
// Keeps the start-date window well inside chrono's representable range.
const MAX_YEARS_BACK: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub company_id: String,
    pub count: usize,
    pub date_format: DateFormat,
    pub years_back: u32,
}

impl GenerationRequest {
    /// # Errors
    /// Errors with `InvalidCount` when `count` is below 1.
    pub fn new(
        company_id: impl Into<String>,
        count: i64,
        date_format: DateFormat,
    ) -> Result<Self, ImportError> {
        let count = usize::try_from(count)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or(ImportError::InvalidCount(count))?;
        Ok(GenerationRequest {
            company_id: company_id.into(),
            count,
            date_format,
            years_back: DEFAULT_YEARS_BACK,
        })
    }

    /// # Errors
    /// Errors when `years` is zero or too large to subtract from today.
    pub fn with_years_back(mut self, years: u32) -> Result<Self, ImportError> {
        if years == 0 || years > MAX_YEARS_BACK {
            return Err(ImportError::InvalidYearsBack(years));
        }
        self.years_back = years;
        Ok(self)
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.count
            .saturating_mul(ATTEMPTS_PER_RECORD)
            .max(MIN_ATTEMPTS)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ImportError::UnknownOutputFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub output_dir: PathBuf,
    pub max_per_file: usize,
    pub format: OutputFormat,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            output_dir: PathBuf::from("."),
            max_per_file: MAX_PER_FILE,
            format: OutputFormat::default(),
        }
    }
}

impl WriteOptions {
    /// # Errors
    /// Errors with `InvalidChunkSize` when `max_per_file` is zero.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        max_per_file: usize,
        format: OutputFormat,
    ) -> Result<Self, ImportError> {
        if max_per_file == 0 {
            return Err(ImportError::InvalidChunkSize);
        }
        Ok(WriteOptions {
            output_dir: output_dir.into(),
            max_per_file,
            format,
        })
    }
}
