//! Integration tests for ix-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{RunSummaryRow, TripRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn trip_row(vehicle_id: u32) -> TripRow {
        TripRow {
            vehicle_id,
            origin:       "north",
            destination:  "south",
            turn:         "straight",
            requested_ms: 10,
            admitted_ms:  15,
            departed_ms:  40,
            wait_ms:      5,
            service_ms:   25,
        }
    }

    fn summary_row() -> RunSummaryRow {
        RunSummaryRow {
            vehicle_count: 3,
            wall_time_ms:  120,
            total_wait_ms: 45,
            max_wait_ms:   30,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trips.csv").exists());
        assert!(dir.path().join("run_summary.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "vehicle_id",
                "origin",
                "destination",
                "turn",
                "requested_ms",
                "admitted_ms",
                "departed_ms",
                "wait_ms",
                "service_ms"
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["vehicle_count", "wall_time_ms", "total_wait_ms", "max_wait_ms"]);
    }

    #[test]
    fn csv_trip_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trips(&[trip_row(0), trip_row(1), trip_row(2)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0");        // vehicle_id
        assert_eq!(&rows[0][1], "north");    // origin
        assert_eq!(&rows[0][3], "straight"); // turn
        assert_eq!(&rows[0][7], "5");        // wait_ms
        assert_eq!(&rows[2][0], "2");
    }

    #[test]
    fn csv_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");   // vehicle_count
        assert_eq!(&rows[0][1], "120"); // wall_time_ms
        assert_eq!(&rows[0][3], "30");  // max_wait_ms
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_trips_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trips(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use ix_core::Movement;
        use ix_sim::{SimBuilder, SimConfig};

        use crate::observer::SimOutputObserver;

        let config = SimConfig {
            vehicle_count:         4,
            seed:                  1,
            min_service_ms:        1,
            max_service_ms:        2,
            max_arrival_spread_ms: 1,
        };
        let sim = SimBuilder::new(config)
            .trips(vec![
                Movement::NorthWest,
                Movement::EastNorth,
                Movement::SouthEast,
                Movement::WestSouth,
            ])
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4, "expected one trip row per vehicle");

        let mut rdr2 = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        assert_eq!(rdr2.records().count(), 1, "expected exactly one summary row");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{RunSummaryRow, TripRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn trip_row(vehicle_id: u32) -> TripRow {
        TripRow {
            vehicle_id,
            origin:       "west",
            destination:  "north",
            turn:         "left",
            requested_ms: 0,
            admitted_ms:  12,
            departed_ms:  42,
            wait_ms:      12,
            service_ms:   30,
        }
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trips.db").exists());
    }

    #[test]
    fn sqlite_trip_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_trips(&[trip_row(0), trip_row(1), trip_row(2)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("trips.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM trips", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_trip_fields() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_trips(&[trip_row(7)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("trips.db")).unwrap();
        let (origin, turn, wait): (String, String, i64) = conn
            .query_row(
                "SELECT origin, turn, wait_ms FROM trips WHERE vehicle_id = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(origin, "west");
        assert_eq!(turn, "left");
        assert_eq!(wait, 12);
    }

    #[test]
    fn sqlite_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_summary(&RunSummaryRow {
            vehicle_count: 24,
            wall_time_ms:  900,
            total_wait_ms: 410,
            max_wait_ms:   88,
        })
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("trips.db")).unwrap();
        let (vehicles, max_wait): (i64, i64) = conn
            .query_row(
                "SELECT vehicle_count, max_wait_ms FROM run_summaries",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(vehicles, 24);
        assert_eq!(max_wait, 88);
    }
}
