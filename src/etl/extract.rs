//! Extractor trait for pulling records out of a source

use eyre::Result;

/// Extractor trait for producing items from a source
///
/// Extraction is lazy: [`Extractor::extract`] opens the source and hands back
/// a forward-only iterator. Each call starts a fresh pass over the source, but
/// a single iterator cannot be rewound.
///
/// # Example
/// ```no_run
/// use product_importer::etl::Extractor;
/// use eyre::Result;
///
/// struct Numbers(Vec<i64>);
///
/// impl Extractor for Numbers {
///     type Item = i64;
///     type Iter = std::vec::IntoIter<Result<i64>>;
///
///     fn extract(&self) -> Result<Self::Iter> {
///         let items: Vec<Result<i64>> = self.0.iter().map(|n| Ok(*n)).collect();
///         Ok(items.into_iter())
///     }
/// }
/// ```
pub trait Extractor {
    /// The type of items extracted
    type Item;

    /// Iterator over extracted items
    type Iter: Iterator<Item = Result<Self::Item>>;

    /// Open the source and return an iterator over its items
    ///
    /// # Errors
    /// Returns an error if the source cannot be opened. Errors met while
    /// iterating are yielded as `Err` items instead.
    fn extract(&self) -> Result<Self::Iter>;
}
