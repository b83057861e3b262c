use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::material::Material;

/// The outcome of one completed impact test.
///
/// Constructed exactly once per run by the energy model, before the swing
/// animation begins; never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: Uuid,
    pub timestamp: String,
    /// The specimen material that was struck.
    pub material: Material,
    /// Potential energy of the hammer at release, in joules.
    pub initial_energy_j: f64,
    /// Energy absorbed by the specimen, in joules.
    pub absorbed_energy_j: f64,
    /// Rebound angle of the arm at maximum height, in degrees.
    pub final_angle_deg: f64,
    /// Whether the specimen fractured. False means the specimen arrested
    /// the hammer outright (absorbed energy equals initial energy).
    pub did_break: bool,
}

impl TestResult {
    pub fn new(
        material: Material,
        initial_energy_j: f64,
        absorbed_energy_j: f64,
        final_angle_deg: f64,
        did_break: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: timestamp_now(),
            material,
            initial_energy_j,
            absorbed_energy_j,
            final_angle_deg,
            did_break,
        }
    }

    /// Fraction of the hammer's energy the specimen absorbed.
    pub fn energy_ratio(&self) -> f64 {
        if self.initial_energy_j == 0.0 {
            return 0.0;
        }
        self.absorbed_energy_j / self.initial_energy_j
    }
}

/// Returns a simple ISO 8601-style timestamp (Unix epoch seconds, Z suffix).
fn timestamp_now() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}Z", dur.as_secs())
}
