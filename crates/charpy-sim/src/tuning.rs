use serde::{Deserialize, Serialize};

/// Nominal tick cadence of the frame driver.
pub const TICK_RATE_HZ: f64 = 60.0;
/// Duration budget for the falling phase; the strike lands when this expires
/// even if integration drift kept the arm shy of the vertical.
pub const FALL_BUDGET_SECS: f64 = 2.5;
/// How long the arm holds at the specimen after the strike.
pub const IMPACT_HOLD_SECS: f64 = 0.15;
/// Per-tick convergence fraction of the rising ease.
pub const REBOUND_RATE: f64 = 0.1;
/// Residual below which the rising ease counts as converged (radians).
pub const REBOUND_TOLERANCE_RAD: f64 = 0.005;
/// Fixed duration of the settling oscillation.
pub const SETTLE_DURATION_SECS: f64 = 3.0;
/// Angular frequency of the settling sinusoid (rad/s).
pub const SETTLE_FREQUENCY: f64 = 8.0;
/// Initial amplitude of the settling oscillation (radians).
pub const SETTLE_AMPLITUDE_RAD: f64 = 0.03;

/// Configurable rig timing parameters, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigTuning {
    pub tick_rate_hz: f64,
    pub fall_budget_secs: f64,
    pub impact_hold_secs: f64,
    pub rebound_rate: f64,
    pub rebound_tolerance_rad: f64,
    pub settle_duration_secs: f64,
    pub settle_frequency: f64,
    pub settle_amplitude_rad: f64,
}

impl Default for RigTuning {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            fall_budget_secs: FALL_BUDGET_SECS,
            impact_hold_secs: IMPACT_HOLD_SECS,
            rebound_rate: REBOUND_RATE,
            rebound_tolerance_rad: REBOUND_TOLERANCE_RAD,
            settle_duration_secs: SETTLE_DURATION_SECS,
            settle_frequency: SETTLE_FREQUENCY,
            settle_amplitude_rad: SETTLE_AMPLITUDE_RAD,
        }
    }
}

impl RigTuning {
    /// Load tuning from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("CHARPY_RIG_CONFIG")
            .unwrap_or_else(|_| "config/rig.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RigTuning>(&content) {
                Ok(tuning) => tuning,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    RigTuning::default()
                },
            },
            Err(_) => RigTuning::default(),
        }
    }

    /// Fixed simulation step derived from the tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }
}
