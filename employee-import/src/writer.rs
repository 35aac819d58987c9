use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::employee::{Employee, HEADERS};
use crate::error::ImportError;
use crate::request::{OutputFormat, WriteOptions};

pub const FILE_STEM: &str = "employee-import";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub rows: usize,
}

impl WrittenFile {
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Name of chunk `index` (0-based) out of `num_files`. A lone file carries no index.
#[must_use]
pub fn file_name(index: usize, num_files: usize, format: OutputFormat) -> String {
    if num_files > 1 {
        format!("{}-{}.{}", FILE_STEM, index + 1, format.extension())
    } else {
        format!("{}.{}", FILE_STEM, format.extension())
    }
}

#[must_use]
pub fn num_files(total: usize, max_per_file: usize) -> usize {
    if max_per_file == 0 {
        return 0;
    }
    total.div_ceil(max_per_file)
}

/// Writes `employees` in chunks of `options.max_per_file` rows, each with the fixed header row.
///
/// Chunks are staged in a temporary directory inside `options.output_dir` and moved into place
/// only once every chunk has been written, so a failed write leaves no partial set behind.
///
/// # Errors
/// Errors with `InvalidChunkSize` for a zero chunk size, or when creating, writing or renaming a
/// file fails.
pub fn write_files(
    employees: &[Employee],
    options: &WriteOptions,
) -> Result<Vec<WrittenFile>, ImportError> {
    if options.max_per_file == 0 {
        return Err(ImportError::InvalidChunkSize);
    }
    fs::create_dir_all(&options.output_dir)?;
    let staging = tempfile::Builder::new()
        .prefix(".employee-import-")
        .tempdir_in(&options.output_dir)?;

    let num_files = num_files(employees.len(), options.max_per_file);
    let mut staged = Vec::with_capacity(num_files);
    for (idx, chunk) in employees.chunks(options.max_per_file).enumerate() {
        let name = file_name(idx, num_files, options.format);
        let path = staging.path().join(&name);
        match options.format {
            OutputFormat::Xlsx => write_xlsx(&path, chunk)?,
            OutputFormat::Csv => write_csv(&path, chunk)?,
        }
        debug!("Staged {} with {} rows", name, chunk.len());
        staged.push((path, name, chunk.len()));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (staged_path, name, rows) in staged {
        let path = options.output_dir.join(name);
        fs::rename(&staged_path, &path)?;
        written.push(WrittenFile { path, rows });
    }
    staging.close()?;

    info!(
        "Wrote {} employees across {} file(s) to {}",
        employees.len(),
        written.len(),
        options.output_dir.display()
    );
    Ok(written)
}

fn write_xlsx(path: &Path, employees: &[Employee]) -> Result<(), ImportError> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    for (row, values) in std::iter::once(HEADERS)
        .chain(employees.iter().map(Employee::row))
        .enumerate()
    {
        for (col, value) in values.iter().enumerate() {
            sheet
                .get_cell_mut((cell_index(col), cell_index(row)))
                .set_value_string(*value);
        }
    }
    umya_spreadsheet::writer::xlsx::write(&book, path)?;
    Ok(())
}

fn write_csv(path: &Path, employees: &[Employee]) -> Result<(), ImportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for employee in employees {
        writer.serialize(employee)?;
    }
    writer.flush()?;
    Ok(())
}

// Spreadsheet coordinates are 1-based; a chunk never exceeds u32 rows.
#[allow(clippy::cast_possible_truncation)]
fn cell_index(idx: usize) -> u32 {
    idx as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(file_name(0, 1, OutputFormat::Xlsx), "employee-import.xlsx");
        assert_eq!(file_name(0, 3, OutputFormat::Xlsx), "employee-import-1.xlsx");
        assert_eq!(file_name(2, 3, OutputFormat::Csv), "employee-import-3.csv");
    }

    #[test]
    fn test_num_files() {
        assert_eq!(num_files(10, 1000), 1);
        assert_eq!(num_files(1000, 1000), 1);
        assert_eq!(num_files(1001, 1000), 2);
        assert_eq!(num_files(2500, 1000), 3);
        assert_eq!(num_files(0, 1000), 0);
        assert_eq!(num_files(5, 0), 0);
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let options = WriteOptions {
            output_dir: dir.path().to_path_buf(),
            max_per_file: 0,
            format: OutputFormat::Csv,
        };
        assert!(matches!(
            write_files(&[], &options),
            Err(ImportError::InvalidChunkSize)
        ));
    }
}
