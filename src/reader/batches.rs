/// Iterator adapter that groups a fallible record sequence into
/// fixed-size batches.
///
/// Every yielded batch has exactly `batch_size` records except
/// possibly the last one of a run, which holds whatever remained when
/// the source ran dry. An empty batch is never yielded.
///
/// If the source yields an error, that error is passed through as-is
/// and the run ends: records accumulated toward the current batch are
/// dropped, and every later `next()` returns `None`.
pub struct Batches<I> {
    records: I,
    batch_size: usize,
    failed: bool,
}

impl<I> Batches<I> {
    /// Wrap a record iterator, emitting batches of `batch_size`
    ///
    /// A zero `batch_size` is floored to 1.
    pub fn new(records: I, batch_size: usize) -> Self {
        Self {
            records,
            batch_size: batch_size.max(1),
            failed: false,
        }
    }
}

impl<I, R, E> Iterator for Batches<I>
where
    I: Iterator<Item = Result<R, E>>,
{
    type Item = Result<Vec<R>, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut batch = Vec::with_capacity(self.batch_size);
        for record in self.records.by_ref() {
            match record {
                Ok(record) => {
                    batch.push(record);
                    if batch.len() == self.batch_size {
                        return Some(Ok(batch));
                    }
                }
                Err(e) => {
                    // half-filled batch is dropped, not flushed
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        // source exhausted; flush the remainder if there is one
        if batch.is_empty() {
            None
        } else {
            Some(Ok(batch))
        }
    }
}
