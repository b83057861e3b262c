use serde::{Deserialize, Serialize};

/// Pendulum rig configuration supplied by the caller per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumConfig {
    /// Hammer mass in kilograms.
    pub mass_kg: f64,
    /// Arm length (pivot to center of percussion) in meters.
    pub length_m: f64,
    /// Release angle from vertical, in degrees.
    pub start_angle_deg: f64,
}

impl PendulumConfig {
    /// Construct a validated configuration.
    ///
    /// Non-positive mass, length, or start angle has no physical meaning;
    /// that is a caller contract violation and panics rather than clamping.
    pub fn new(mass_kg: f64, length_m: f64, start_angle_deg: f64) -> Self {
        assert!(mass_kg > 0.0, "hammer mass must be positive, got {mass_kg}");
        assert!(length_m > 0.0, "arm length must be positive, got {length_m}");
        assert!(
            start_angle_deg > 0.0,
            "start angle must be positive, got {start_angle_deg}"
        );
        Self {
            mass_kg,
            length_m,
            start_angle_deg,
        }
    }

    /// Release angle in radians.
    pub fn start_angle_rad(&self) -> f64 {
        self.start_angle_deg.to_radians()
    }
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self::new(20.0, 0.8, 135.0)
    }
}
