//! Import sources and product stores
//!
//! This module handles all I/O at the edges of the pipeline:
//! - CSV import file reading
//! - SQLite product persistence

mod csv_reader;
mod sqlite;

pub use csv_reader::{CsvReader, Records};
pub use sqlite::SqliteStore;
