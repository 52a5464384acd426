use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Batch size used when none is configured
pub const DEFAULT_BATCH_SIZE: usize = 1;

/// Shared configuration for a record reader
///
/// Created once at reader construction. The fields are public so a
/// caller can adjust them between iteration runs; the batch size
/// actually used for a run is re-derived when the run starts, not
/// when the config is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Opaque locator for the data source (path, URL, device id, ...)
    pub source_locator: String,
    /// Records per emitted batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Optional starting position, interpreted by the variant
    #[serde(default)]
    pub offset: Option<u64>,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl ReaderConfig {
    /// Create a config for the given source
    ///
    /// Accepts anything path-like and stores it as a plain string,
    /// since variants may hand the locator to libraries that do not
    /// understand richer path types.
    pub fn new(source_locator: impl AsRef<Path>) -> Self {
        Self {
            source_locator: source_locator.as_ref().to_string_lossy().into_owned(),
            batch_size: DEFAULT_BATCH_SIZE,
            offset: None,
        }
    }

    /// Set the number of records per batch
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the starting position within the source
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Batch size with the defensive floor applied
    ///
    /// A zero batch size is floored to 1 rather than rejected. This is
    /// evaluated at the start of every iteration run.
    pub fn effective_batch_size(&self) -> usize {
        if self.batch_size == 0 {
            debug!(source = %self.source_locator, "batch_size 0 floored to 1");
            1
        } else {
            self.batch_size
        }
    }
}
