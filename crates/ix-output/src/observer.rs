//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ix_sim::{SimObserver, SimReport, TripRecord};

use crate::row::{RunSummaryRow, TripRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes the finished run to any [`OutputWriter`]
/// backend (CSV, SQLite).
///
/// Trip data is only complete once every vehicle has crossed, so all writing
/// happens in `on_sim_end`.  Errors from the writer are stored internally
/// because observer hooks have no return value; after `sim.run()` returns,
/// check for them with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

fn trip_row(record: &TripRecord) -> TripRow {
    TripRow {
        vehicle_id:   record.vehicle.0,
        origin:       record.movement.origin().as_str(),
        destination:  record.movement.destination().as_str(),
        turn:         record.movement.turn().as_str(),
        requested_ms: record.requested_at.as_millis() as u64,
        admitted_ms:  record.admitted_at.as_millis() as u64,
        departed_ms:  record.departed_at.as_millis() as u64,
        wait_ms:      record.wait().as_millis() as u64,
        service_ms:   record.service().as_millis() as u64,
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_sim_end(&mut self, report: &SimReport) {
        let rows: Vec<TripRow> = report.trips.iter().map(trip_row).collect();
        if !rows.is_empty() {
            let result = self.writer.write_trips(&rows);
            self.store_err(result);
        }

        let summary = RunSummaryRow {
            vehicle_count: report.trips.len() as u64,
            wall_time_ms:  report.wall_time.as_millis() as u64,
            total_wait_ms: report.total_wait().as_millis() as u64,
            max_wait_ms:   report.max_wait().as_millis() as u64,
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
