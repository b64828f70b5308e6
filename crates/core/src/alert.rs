//! Operator-facing alert rendering for red-tier readings.
//!
//! Alerts are ephemeral: rendered fresh every cycle a condition stays
//! Red, logged, and discarded. There is no deduplication across cycles.

use crate::types::Reading;

/// Render the alert line for a reading that classified Red.
///
/// These strings land in the operational log and are shown verbatim in
/// the dashboard's scrolling log view; keep the formats stable.
pub fn render(reading: &Reading) -> String {
    match reading {
        Reading::EngineTemp { temp } => {
            format!("⚠️ ALERT: ENGINE Overheat! Temp: {temp}°C")
        }
        Reading::TirePressure { position, psi } => {
            format!("⚠️ ALERT: {position} Tire Pressure LOW! PSI: {psi:.2}")
        }
        Reading::BrakeTemp { position, temp } => {
            format!("⚠️ ALERT: {position} Brake Overheat! Temp: {temp}°C")
        }
    }
}
