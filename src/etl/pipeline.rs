//! Pipeline orchestration for record imports

use super::{Extractor, Sink, Transformer};
use eyre::Result;

/// Import pipeline that feeds extracted items through a transformer into a sink
///
/// Items are processed strictly in source order, one at a time. Each item is
/// staged and committed before the next one is pulled from the extractor, so
/// a failure part-way through leaves every earlier item committed.
///
/// # Type Parameters
/// - `E`: Extractor type
/// - `T`: Transformer type (must transform from E::Item)
/// - `S`: Sink type (must persist T::Output)
///
/// # Example
/// ```no_run
/// use product_importer::etl::Pipeline;
/// use product_importer::storage::{CsvReader, SqliteStore};
/// use product_importer::transform::ProductMapper;
///
/// # async fn example() -> eyre::Result<()> {
/// let store = SqliteStore::connect("sqlite://products.db").await?;
/// let mut pipeline = Pipeline::new(CsvReader::new("products.csv"), ProductMapper, store);
///
/// let count = pipeline.run().await?;
/// println!("Imported {} products", count);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<E, T, S> {
    extractor: E,
    transformer: T,
    sink: S,
}

impl<E, T, S> Pipeline<E, T, S>
where
    E: Extractor,
    T: Transformer<Input = E::Item>,
    S: Sink<Item = T::Output>,
{
    /// Create a new pipeline
    pub fn new(extractor: E, transformer: T, sink: S) -> Self {
        Self {
            extractor,
            transformer,
            sink,
        }
    }

    /// Run the pipeline to completion
    ///
    /// For every extracted item: transform, stage, commit.
    ///
    /// Returns the number of items committed
    ///
    /// # Errors
    /// Returns the first error from any stage. Nothing is retried and earlier
    /// commits are not rolled back.
    pub async fn run(&mut self) -> Result<usize> {
        log::info!("Starting import pipeline");

        let mut count = 0;
        for item in self.extractor.extract()? {
            let output = self.transformer.transform(item?)?;

            self.sink.stage(output).await?;
            self.sink.commit().await?;

            count += 1;
            log::debug!("Committed item {}", count);
        }

        if count == 0 {
            log::warn!("No items extracted, pipeline complete");
        } else {
            log::info!("Committed {} items", count);
        }

        Ok(count)
    }

    /// Consume the pipeline and hand back its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
