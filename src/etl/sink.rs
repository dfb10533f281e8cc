//! Sink trait for persisting items to a destination

use eyre::Result;
use std::future::Future;

/// Sink trait for writing items to a store with unit-of-work semantics
///
/// Items are first staged, then made durable by a commit. The sink owns an
/// item once it is staged.
///
/// # Example
/// ```no_run
/// use product_importer::etl::Sink;
/// use eyre::Result;
///
/// #[derive(Default)]
/// struct VecSink {
///     staged: Vec<String>,
///     committed: Vec<String>,
/// }
///
/// impl Sink for VecSink {
///     type Item = String;
///
///     async fn stage(&mut self, item: Self::Item) -> Result<()> {
///         self.staged.push(item);
///         Ok(())
///     }
///
///     async fn commit(&mut self) -> Result<()> {
///         self.committed.append(&mut self.staged);
///         Ok(())
///     }
/// }
/// ```
pub trait Sink {
    /// The type of items to persist
    type Item;

    /// Mark an item for the next commit
    ///
    /// # Errors
    /// Returns an error if the sink refuses the item
    fn stage(&mut self, item: Self::Item) -> impl Future<Output = Result<()>>;

    /// Durably apply every staged item and clear the stage
    ///
    /// Committing with nothing staged is a no-op.
    ///
    /// # Errors
    /// Returns an error if the write fails (constraint violation, I/O, etc.).
    /// Items committed by earlier calls are not affected.
    fn commit(&mut self) -> impl Future<Output = Result<()>>;
}
