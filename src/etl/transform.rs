//! Transformer trait for data transformation

use eyre::Result;

/// Transformer trait for converting one extracted item into the value
/// handed to a [`Sink`](super::Sink)
///
/// # Example
/// ```no_run
/// use product_importer::etl::Transformer;
/// use eyre::Result;
///
/// struct Uppercase;
///
/// impl Transformer for Uppercase {
///     type Input = String;
///     type Output = String;
///
///     fn transform(&self, input: Self::Input) -> Result<Self::Output> {
///         Ok(input.to_uppercase())
///     }
/// }
/// ```
pub trait Transformer {
    /// Input item type
    type Input;

    /// Output item type after transformation
    type Output;

    /// Transform a single item
    ///
    /// # Errors
    /// Returns an error if transformation fails (missing fields, conversion, etc.)
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;
}
