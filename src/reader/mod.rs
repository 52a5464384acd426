mod batches;
mod config;


pub use batches::Batches;
pub use config::{ReaderConfig, DEFAULT_BATCH_SIZE};

/// Core trait that all record readers must implement
///
/// A reader owns a [`ReaderConfig`] and knows how to produce a lazy
/// sequence of records from the configured source. The batching logic
/// is shared: `batches()` is provided here and works the same for
/// every variant.
pub trait RecordReader {
    /// One opaque unit of data produced by this reader
    type Record;

    /// Domain-specific failure raised while producing a record
    type Error;

    /// Iterator over the raw record sequence
    type Records: Iterator<Item = Result<Self::Record, Self::Error>>;

    /// Configuration stored at construction
    fn config(&self) -> &ReaderConfig;

    /// Produce the raw record sequence
    ///
    /// Each call starts a fresh production run. Whether that run
    /// re-reads the source from the beginning or continues from prior
    /// state is up to the variant; the core does not standardize it.
    fn records(&mut self) -> Self::Records;

    /// Group the raw record sequence into fixed-size batches
    ///
    /// The batch size is read from the configuration at the start of
    /// each run, so it is fixed for the duration of that run. Errors
    /// from `records()` pass through unchanged; see [`Batches`] for
    /// the exact grouping and error semantics.
    fn batches(&mut self) -> Batches<Self::Records> {
        let batch_size = self.config().effective_batch_size();
        Batches::new(self.records(), batch_size)
    }
}
