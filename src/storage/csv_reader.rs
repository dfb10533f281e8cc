//! CSV import file reading

use crate::error::ImportError;
use crate::etl::Extractor;
use crate::product::ImportRecord;

use csv::{ByteRecord, Reader, ReaderBuilder, StringRecord};
use eyre::Result;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Read import records from a comma-separated file
///
/// The first line is the header. Every following line whose field count
/// matches the header becomes an [`ImportRecord`]; other lines are skipped.
pub struct CsvReader {
    path: PathBuf,
}

impl CsvReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check that the file exists and can be opened, without reading it
    pub fn ensure_readable(&self) -> Result<(), ImportError> {
        open_file(&self.path).map(drop)
    }

    /// Open the file, read its header and return a lazy record iterator
    ///
    /// An empty file yields no records.
    pub fn records(&self) -> Result<Records, ImportError> {
        let file = open_file(&self.path)?;

        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
        let headers = reader
            .headers()
            .map_err(|source| ImportError::Read {
                path: self.path.clone(),
                source,
            })?
            .clone();

        log::debug!(
            "Opened {} with {} header fields",
            self.path.display(),
            headers.len()
        );

        Ok(Records {
            path: self.path.clone(),
            reader,
            headers,
            record: ByteRecord::new(),
            done: false,
        })
    }
}

fn open_file(path: &Path) -> Result<File, ImportError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ImportError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ImportError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let is_dir = file
        .metadata()
        .map_err(|source| ImportError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?
        .is_dir();
    if is_dir {
        return Err(ImportError::Unreadable {
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::IsADirectory),
        });
    }

    Ok(file)
}

/// Forward-only iterator over the records of one CSV file
///
/// Lines are only decoded once their field count matches the header, so a
/// skipped line never fails the run. Stops for good after the first error.
pub struct Records {
    path: PathBuf,
    reader: Reader<File>,
    headers: StringRecord,
    record: ByteRecord,
    done: bool,
}

impl Records {
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }
}

impl Iterator for Records {
    type Item = Result<ImportRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.reader.read_byte_record(&mut self.record) {
                Ok(true) => {
                    let line = self.record.position().map_or(0, |pos| pos.line());
                    if self.record.len() != self.headers.len() {
                        log::debug!(
                            "Skipping line {} of {}: expected {} fields, found {}",
                            line,
                            self.path.display(),
                            self.headers.len(),
                            self.record.len()
                        );
                        continue;
                    }

                    let record = match StringRecord::from_byte_record(std::mem::take(
                        &mut self.record,
                    )) {
                        Ok(record) => record,
                        Err(source) => {
                            self.done = true;
                            return Some(Err(ImportError::Decode {
                                path: self.path.clone(),
                                line,
                                source,
                            }
                            .into()));
                        }
                    };
                    return Some(Ok(ImportRecord::from_fields(
                        &self.headers,
                        &record,
                        line,
                    )));
                }
                Ok(false) => self.done = true,
                Err(source) => {
                    self.done = true;
                    return Some(Err(ImportError::Read {
                        path: self.path.clone(),
                        source,
                    }
                    .into()));
                }
            }
        }
        None
    }
}

// Implement Extractor trait for reading CSV import files

impl Extractor for CsvReader {
    type Item = ImportRecord;
    type Iter = Records;

    fn extract(&self) -> Result<Self::Iter> {
        log::info!("Reading records from {}", self.path().display());
        Ok(self.records()?)
    }
}
