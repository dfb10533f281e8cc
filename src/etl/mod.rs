//! Core ETL (Extract, Transform, Load) abstractions
//!
//! This module provides the trait definitions the importer is built from:
//! a lazy [`Extractor`], a per-item [`Transformer`], a stage/commit [`Sink`],
//! and the [`Pipeline`] that drives them one item at a time.

mod extract;
mod pipeline;
mod sink;
mod transform;

pub use extract::Extractor;
pub use pipeline::Pipeline;
pub use sink::Sink;
pub use transform::Transformer;
