//! rush_hour — runnable demo for the rust_ix intersection framework.
//!
//! Sends a burst of vehicles with randomly drawn movements through one
//! four-way intersection, prints each admission live, and writes the trip
//! log to `output/rush_hour/` as CSV.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use ix_core::{Movement, TurnKind, VehicleId};
use ix_output::{CsvWriter, OutputWriter, SimOutputObserver};
use ix_sim::{SimBuilder, SimConfig, SimObserver, SimReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const VEHICLE_COUNT:     usize = 24;
const SEED:              u64   = 42;
const MIN_SERVICE_MS:    u64   = 40;  // fastest crossing
const MAX_SERVICE_MS:    u64   = 120; // slowest crossing
const ARRIVAL_SPREAD_MS: u64   = 400; // everyone shows up within 0.4 s
const OUTPUT_DIR:        &str  = "output/rush_hour";

// ── Observer wrapper: live progress + file output ─────────────────────────────

struct ProgressPrinter<W: OutputWriter> {
    inner: SimOutputObserver<W>,
}

impl<W: OutputWriter> SimObserver for ProgressPrinter<W> {
    fn on_request(&mut self, vehicle: VehicleId, movement: Movement, at: Duration) {
        self.inner.on_request(vehicle, movement, at);
    }

    fn on_admit(&mut self, vehicle: VehicleId, movement: Movement, at: Duration) {
        println!(
            "[{:>7.3} s] {vehicle} crossing {movement} ({})",
            at.as_secs_f64(),
            movement.turn()
        );
        self.inner.on_admit(vehicle, movement, at);
    }

    fn on_depart(&mut self, vehicle: VehicleId, movement: Movement, at: Duration) {
        self.inner.on_depart(vehicle, movement, at);
    }

    fn on_sim_end(&mut self, report: &SimReport) {
        self.inner.on_sim_end(report);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== rush_hour — rust_ix intersection demo ===");
    println!("Vehicles: {VEHICLE_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Sim config.
    let config = SimConfig {
        vehicle_count:         VEHICLE_COUNT,
        seed:                  SEED,
        min_service_ms:        MIN_SERVICE_MS,
        max_service_ms:        MAX_SERVICE_MS,
        max_arrival_spread_ms: ARRIVAL_SPREAD_MS,
    };

    // 2. Build the sim and show the drawn traffic mix.
    let sim = SimBuilder::new(config).build()?;
    for kind in [TurnKind::Left, TurnKind::Straight, TurnKind::Right] {
        let count = sim.trips().iter().filter(|m| m.turn() == kind).count();
        println!("  {:>8}: {count} vehicles", kind.to_string());
    }
    println!();

    // 3. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ProgressPrinter { inner: SimOutputObserver::new(writer) };

    // 4. Run.
    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Aggregate stats.
    println!();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  total wait : {:.3} s", report.total_wait().as_secs_f64());
    println!("  max wait   : {:.3} s", report.max_wait().as_secs_f64());
    println!("  trip log   : {OUTPUT_DIR}/trips.csv");
    println!();

    // 6. Per-movement table.
    println!("{:<10} {:<10} {:<7} {:<12}", "Movement", "Turn", "Trips", "Mean wait");
    println!("{}", "-".repeat(42));
    for movement in Movement::ALL {
        let trips: Vec<_> = report.trips_for(movement).collect();
        if trips.is_empty() {
            continue;
        }
        let mean_wait_ms =
            trips.iter().map(|t| t.wait().as_millis()).sum::<u128>() / trips.len() as u128;
        println!(
            "{:<10} {:<10} {:<7} {:>6} ms",
            movement.to_string(),
            movement.turn().to_string(),
            trips.len(),
            mean_wait_ms,
        );
    }

    Ok(())
}
