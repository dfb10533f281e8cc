//! Transform implementations for import records

mod product_mapper;

pub use product_mapper::ProductMapper;
