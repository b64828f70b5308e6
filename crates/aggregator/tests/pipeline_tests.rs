//! End-to-end tests for the ingestion pipeline.
//!
//! Each test lays producer log files out in a temp directory, drives
//! the aggregator one cycle at a time, and inspects the resulting
//! state, alerts, snapshot artifact, and operational log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use pitwall_aggregator::config::Config;
use pitwall_aggregator::pipeline::Aggregator;
use pitwall_core::state::TelemetryState;
use pitwall_core::types::{Position, Status};

fn test_config(dir: &Path) -> Config {
    Config {
        engine_log: dir.join("engine.log"),
        tire_log: dir.join("tire.log"),
        brake_log: dir.join("brake.log"),
        state_path: dir.join("telemetry_state.json"),
        ops_log: dir.join("aggregator.log"),
        poll_interval: Duration::from_secs(3),
    }
}

fn append(path: &Path, line: &str) {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    writeln!(file, "{line}").unwrap();
}

fn read_snapshot(config: &Config) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(&config.state_path).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

/// An overheating engine line turns the engine red and raises exactly
/// one alert carrying the observed value.
#[test]
fn engine_overheat_goes_red_with_one_alert() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    append(
        &config.engine_log,
        "2027-03-30 12:00:01,512 ENGINE | Temp: 125.4 | RPM: 6912",
    );
    let alerts = aggregator.run_cycle();

    assert_eq!(aggregator.state().engine.temp, Some(125.4));
    assert_eq!(aggregator.state().engine.status, Status::Red);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("125.4"), "alert was: {}", alerts[0]);

    let doc = read_snapshot(&config);
    assert_eq!(doc["engine"]["temp"], 125.4);
    assert_eq!(doc["engine"]["status"], "red");
}

/// A deflated front-left tire goes red and the alert names the corner.
#[test]
fn low_tire_pressure_goes_red_naming_the_corner() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    append(
        &config.tire_log,
        "TIRE (Front-Left) | PSI: 22.10 | Wear: 15.00%",
    );
    let alerts = aggregator.run_cycle();

    let entry = &aggregator.state().tires[&Position::FrontLeft];
    assert_eq!(entry.psi, Some(22.10));
    assert_eq!(entry.status, Status::Red);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("Front-Left"), "alert was: {}", alerts[0]);

    // Unrelated corners stay untouched.
    assert_eq!(
        aggregator.state().tires[&Position::RearRight].status,
        Status::Unknown
    );
}

/// A warm (but not overheating) rear-right brake goes yellow and does
/// not alert — only red readings do.
#[test]
fn warm_brake_goes_yellow_without_alerting() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    append(
        &config.brake_log,
        "BRAKE (Rear-Right) | Temp: 410.00°C | Slip: 5.10%",
    );
    let alerts = aggregator.run_cycle();

    let entry = &aggregator.state().brakes[&Position::RearRight];
    assert_eq!(entry.temp, Some(410.0));
    assert_eq!(entry.status, Status::Yellow);
    assert!(alerts.is_empty());
}

// ---------------------------------------------------------------------------
// Pipeline properties
// ---------------------------------------------------------------------------

/// A cycle with no new lines changes nothing and raises nothing.
#[test]
fn no_op_cycle_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    append(
        &config.tire_log,
        "TIRE (Rear-Left) | PSI: 28.00 | Wear: 3.00%",
    );
    aggregator.run_cycle();
    let settled = aggregator.state().clone();

    for _ in 0..3 {
        let alerts = aggregator.run_cycle();
        assert!(alerts.is_empty());
        assert_eq!(aggregator.state(), &settled);
    }
}

/// Fresh start with no producer logs at all: every key unknown, no
/// alerts, and the snapshot is still written.
#[test]
fn missing_sources_are_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    let alerts = aggregator.run_cycle();

    assert!(alerts.is_empty());
    assert_eq!(aggregator.state(), &TelemetryState::new());

    let doc = read_snapshot(&config);
    assert!(doc["engine"]["temp"].is_null());
    assert_eq!(doc["tires"]["Rear-Left"]["status"], "unknown");
}

/// One missing source must not block the others.
#[test]
fn one_missing_source_does_not_block_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    // No engine log at all; tire and brake lines still flow through.
    append(
        &config.tire_log,
        "TIRE (Front-Right) | PSI: 30.00 | Wear: 2.00%",
    );
    append(
        &config.brake_log,
        "BRAKE (Front-Right) | Temp: 350.00°C | Slip: 4.00%",
    );
    aggregator.run_cycle();

    assert_eq!(aggregator.state().engine.status, Status::Unknown);
    assert_eq!(
        aggregator.state().tires[&Position::FrontRight].status,
        Status::Green
    );
    assert_eq!(
        aggregator.state().brakes[&Position::FrontRight].status,
        Status::Green
    );
}

/// Garbage interleaved with valid lines neither corrupts unrelated
/// keys nor aborts processing of the lines after it.
#[test]
fn malformed_lines_do_not_derail_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    append(&config.tire_log, "TIRE (Front-Left) | PSI: 30.00 | Wear: 1.00%");
    append(&config.tire_log, "%%% totally garbled line %%%");
    append(&config.tire_log, "TIRE (Middle-Left) | PSI: 10.00 | Wear: 1.00%");
    append(&config.tire_log, "TIRE (Rear-Right) | PSI: 23.50 | Wear: 9.00%");
    let alerts = aggregator.run_cycle();

    let state = aggregator.state();
    assert_eq!(state.tires[&Position::FrontLeft].status, Status::Green);
    assert_eq!(state.tires[&Position::RearRight].status, Status::Red);
    assert_eq!(state.tires[&Position::FrontRight].status, Status::Unknown);
    assert_eq!(state.tires[&Position::RearLeft].status, Status::Unknown);
    assert_eq!(alerts.len(), 1);
}

/// Lines already consumed in a prior cycle are never re-processed: a
/// sustained red alerts once per cycle's worth of new lines, not per
/// cycle's worth of history.
#[test]
fn consumed_lines_are_not_reprocessed() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    append(&config.engine_log, "ENGINE | Temp: 100.00 | RPM: 6100");
    let alerts = aggregator.run_cycle();
    assert!(alerts.is_empty());
    assert_eq!(aggregator.state().engine.status, Status::Green);

    append(&config.engine_log, "ENGINE | Temp: 125.40 | RPM: 7100");
    let alerts = aggregator.run_cycle();
    assert_eq!(alerts.len(), 1);
    assert_eq!(aggregator.state().engine.status, Status::Red);
}

/// Within one batch, the last reading for a key wins.
#[test]
fn latest_reading_wins_within_a_batch() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    append(&config.engine_log, "ENGINE | Temp: 125.00 | RPM: 7000");
    append(&config.engine_log, "ENGINE | Temp: 110.00 | RPM: 6000");
    let alerts = aggregator.run_cycle();

    // The transient red still alerted, but the state holds the latest.
    assert_eq!(alerts.len(), 1);
    assert_eq!(aggregator.state().engine.temp, Some(110.0));
    assert_eq!(aggregator.state().engine.status, Status::Green);
}

/// The operational log records raw input lines and alerts, one
/// timestamped entry per line.
#[test]
fn operational_log_records_lines_and_alerts() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    let raw = "TIRE (Front-Left) | PSI: 22.10 | Wear: 15.00%";
    append(&config.tire_log, raw);
    aggregator.run_cycle();

    let ops = std::fs::read_to_string(&config.ops_log).unwrap();
    assert!(ops.contains(raw));
    assert!(ops.contains("⚠️ ALERT: Front-Left Tire Pressure LOW!"));
    for line in ops.lines() {
        assert!(
            line.starts_with(|c: char| c.is_ascii_digit()),
            "entry missing leading timestamp: {line}"
        );
    }
}

/// Quiet cycles leave an all-clear marker in the operational log.
#[test]
fn quiet_cycle_logs_all_clear() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    aggregator.run_cycle();

    let ops = std::fs::read_to_string(&config.ops_log).unwrap();
    assert!(ops.contains("✅ All systems normal."));
}

/// A snapshot write failure must not break the cycle: the state still
/// updates, alerts are still returned, the operational log is still
/// written, and the next cycle runs and retries the same path.
#[test]
fn snapshot_write_failure_does_not_break_the_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    // An existing directory at the artifact path makes the rename fail.
    config.state_path = dir.path().join("telemetry_state.json");
    std::fs::create_dir(&config.state_path).unwrap();
    let mut aggregator = Aggregator::new(&config);

    append(&config.engine_log, "ENGINE | Temp: 125.40 | RPM: 7100");
    let alerts = aggregator.run_cycle();

    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("125.4"), "alert was: {}", alerts[0]);
    assert_eq!(aggregator.state().engine.status, Status::Red);

    let ops = std::fs::read_to_string(&config.ops_log).unwrap();
    assert!(ops.contains("ENGINE | Temp: 125.40"));
    assert!(ops.contains("⚠️ ALERT: ENGINE Overheat!"));

    // Forward progress: a later cycle keeps running against the same
    // failing destination.
    let alerts = aggregator.run_cycle();
    assert!(alerts.is_empty());
    assert_eq!(aggregator.state().engine.status, Status::Red);
}

/// The snapshot is overwritten wholesale each cycle and reflects a
/// value/status pair written together.
#[test]
fn snapshot_tracks_the_store_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut aggregator = Aggregator::new(&config);

    append(&config.brake_log, "BRAKE (Front-Left) | Temp: 430.00°C | Slip: 6.00%");
    aggregator.run_cycle();
    let doc = read_snapshot(&config);
    assert_eq!(doc["brakes"]["Front-Left"]["temp"], 430.0);
    assert_eq!(doc["brakes"]["Front-Left"]["status"], "red");

    append(&config.brake_log, "BRAKE (Front-Left) | Temp: 390.00°C | Slip: 4.00%");
    aggregator.run_cycle();
    let doc = read_snapshot(&config);
    assert_eq!(doc["brakes"]["Front-Left"]["temp"], 390.0);
    assert_eq!(doc["brakes"]["Front-Left"]["status"], "green");
}
