mod error;


pub use error::LineReadError;

use crate::reader::{ReaderConfig, RecordReader};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use tracing::debug;

/// Reader variant that yields one text line per record
///
/// `source_locator` is treated as a file path and `offset` as a
/// number of leading lines to skip before the first record. Every
/// call to `records()` reopens the file from the top.
pub struct LineReader {
    config: ReaderConfig,
}

impl LineReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }
}

impl RecordReader for LineReader {
    type Record = String;
    type Error = LineReadError;
    type Records = LineRecords;

    fn config(&self) -> &ReaderConfig {
        &self.config
    }

    fn records(&mut self) -> LineRecords {
        LineRecords::open(&self.config)
    }
}

/// Raw record sequence for [`LineReader`]
///
/// Open failures are reported through the iterator as its first item,
/// so batching sees them the same way as mid-read failures.
pub struct LineRecords {
    lines: Option<Lines<BufReader<File>>>,
    pending: Option<LineReadError>,
}

impl LineRecords {
    fn open(config: &ReaderConfig) -> Self {
        debug!(
            source = %config.source_locator,
            offset = ?config.offset,
            "opening line source"
        );

        let file = match File::open(&config.source_locator) {
            Ok(file) => file,
            Err(source) => {
                return Self {
                    lines: None,
                    pending: Some(LineReadError::Open {
                        path: config.source_locator.clone(),
                        source,
                    }),
                }
            }
        };

        let mut lines = BufReader::new(file).lines();
        for _ in 0..config.offset.unwrap_or(0) {
            match lines.next() {
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    return Self {
                        lines: None,
                        pending: Some(LineReadError::Read(e)),
                    }
                }
                // offset past the end of the file is just an empty run
                None => break,
            }
        }

        Self {
            lines: Some(lines),
            pending: None,
        }
    }
}

impl Iterator for LineRecords {
    type Item = Result<String, LineReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            return Some(Err(err));
        }

        let lines = self.lines.as_mut()?;
        match lines.next() {
            Some(Ok(line)) => Some(Ok(line)),
            Some(Err(e)) => {
                self.lines = None;
                Some(Err(LineReadError::Read(e)))
            }
            None => {
                self.lines = None;
                None
            }
        }
    }
}
