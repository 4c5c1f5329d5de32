//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trips.csv` — one row per completed crossing
//! - `run_summary.csv` — one aggregate row per run

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunSummaryRow, TripRow};

/// Writes trip logs to two CSV files.
pub struct CsvWriter {
    trips:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record([
            "vehicle_id",
            "origin",
            "destination",
            "turn",
            "requested_ms",
            "admitted_ms",
            "departed_ms",
            "wait_ms",
            "service_ms",
        ])?;

        let mut summaries = Writer::from_path(dir.join("run_summary.csv"))?;
        summaries.write_record(["vehicle_count", "wall_time_ms", "total_wait_ms", "max_wait_ms"])?;

        Ok(Self {
            trips,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        for row in rows {
            self.trips.write_record(&[
                row.vehicle_id.to_string(),
                row.origin.to_string(),
                row.destination.to_string(),
                row.turn.to_string(),
                row.requested_ms.to_string(),
                row.admitted_ms.to_string(),
                row.departed_ms.to_string(),
                row.wait_ms.to_string(),
                row.service_ms.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.vehicle_count.to_string(),
            row.wall_time_ms.to_string(),
            row.total_wait_ms.to_string(),
            row.max_wait_ms.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
