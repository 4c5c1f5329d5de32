//! `ix-output` — trip-log writers for the rust_ix intersection simulator.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend  | Files created                  |
//! |-----------|----------|--------------------------------|
//! | *(none)*  | CSV      | `trips.csv`, `run_summary.csv` |
//! | `sqlite`  | SQLite   | `trips.db`                     |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ix_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ix_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RunSummaryRow, TripRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
