//! Product mapper transformer
//!
//! Turns one import record into a [`Product`] by copying fields by name.

use crate::etl::Transformer;
use crate::product::{ImportRecord, Product};
use eyre::Result;

/// Transformer that maps import records onto products
///
/// All of `id`, `name`, `description`, `price` and `taxRate` must be present.
/// A missing field or a non-integer numeric field fails the transform.
///
/// # Example
/// ```
/// use product_importer::etl::Transformer;
/// use product_importer::product::ImportRecord;
/// use product_importer::transform::ProductMapper;
///
/// let record = ImportRecord::from_fields(
///     ["id", "name", "description", "price", "taxRate"],
///     ["1", "Widget", "A small widget", "999", "20"],
///     2,
/// );
///
/// let product = ProductMapper.transform(record).unwrap();
/// assert_eq!(product.name, "Widget");
/// assert_eq!(product.price, 999);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductMapper;

impl Transformer for ProductMapper {
    type Input = ImportRecord;
    type Output = Product;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        let line = input.line();
        let product = Product::try_from(input)?;
        log::debug!("Mapped line {} to product {}", line, product.id);
        Ok(product)
    }
}
