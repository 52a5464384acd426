// Public API exports
pub mod lines;
pub mod reader;

// Re-export main types for convenience
pub use lines::{LineReadError, LineReader};
pub use reader::{Batches, ReaderConfig, RecordReader, DEFAULT_BATCH_SIZE};
