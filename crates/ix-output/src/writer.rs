//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RunSummaryRow, TripRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of completed trips.
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()>;

    /// Write the run's aggregate summary row.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
