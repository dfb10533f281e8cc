//! Product Importer
//!
//! Reads product records from a CSV file and persists each one to a
//! relational store, committing record by record.

pub mod cli;
pub mod error;
pub mod etl;
pub mod product;
pub mod storage;
pub mod transform;

// Re-exports for convenience
pub use error::ImportError;
pub use etl::{Extractor, Pipeline, Sink, Transformer};
pub use product::{ImportRecord, Product};
pub use storage::{CsvReader, SqliteStore};
pub use transform::ProductMapper;
