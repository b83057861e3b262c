use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use charpy_core::config::PendulumConfig;
use charpy_core::material::Material;
use charpy_core::result::TestResult;

use crate::energy;
use crate::physics::{self, PhysicsState};
use crate::tuning::RigTuning;

/// Phase of a test run. `Finished` is transient: the tick that reaches it
/// commits the result and folds straight back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Falling,
    Impact,
    Rising,
    Settling,
    Finished,
}

/// Inputs to the phase transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Trigger,
    Strike,
    HoldExpired,
    ReboundConverged,
    SettleExpired,
    Commit,
    Reset,
}

/// The complete transition table. Every legal `(phase, step)` pair is listed;
/// any other pair leaves the phase untouched.
fn transition(phase: Phase, step: Step) -> Option<Phase> {
    use Phase::*;
    use Step::*;
    match (phase, step) {
        (Idle, Trigger) => Some(Falling),
        (Falling, Strike) => Some(Impact),
        (Impact, HoldExpired) => Some(Rising),
        (Rising, ReboundConverged) => Some(Settling),
        (Settling, SettleExpired) => Some(Finished),
        (Finished, Commit) => Some(Idle),
        (_, Reset) => Some(Idle),
        _ => None,
    }
}

/// Events emitted by the rig during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RigEvent {
    /// The hammer struck the specimen.
    Struck,
    /// The run finished; the surrounding application appends the payload to
    /// its test history.
    Completed(TestResult),
}

/// Read-only view of the rig for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigSnapshot {
    pub phase: Phase,
    pub angle_rad: f64,
    pub broken: bool,
}

/// One pendulum impact test rig, driving a single run at a time from trigger
/// to completion.
///
/// Frame-driven: the surrounding application calls [`tick`](Self::tick) at a
/// fixed cadence. All phase timers accumulate simulated seconds, so a rig
/// with a fixed seed replays identically for a fixed tick count.
pub struct PendulumRig {
    config: PendulumConfig,
    tuning: RigTuning,
    phase: Phase,
    state: PhysicsState,
    pending: Option<TestResult>,
    rng: StdRng,
}

impl PendulumRig {
    pub fn new(config: PendulumConfig, tuning: RigTuning) -> Self {
        Self::with_rng(config, tuning, StdRng::from_os_rng())
    }

    /// Deterministic rig for tests and replays.
    pub fn with_seed(config: PendulumConfig, tuning: RigTuning, seed: u64) -> Self {
        Self::with_rng(config, tuning, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PendulumConfig, tuning: RigTuning, rng: StdRng) -> Self {
        let state = PhysicsState::at_release(config.start_angle_rad());
        Self {
            config,
            tuning,
            phase: Phase::Idle,
            state,
            pending: None,
            rng,
        }
    }

    pub fn config(&self) -> &PendulumConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The live kinematic state of the arm.
    pub fn state(&self) -> &PhysicsState {
        &self.state
    }

    pub fn snapshot(&self) -> RigSnapshot {
        RigSnapshot {
            phase: self.phase,
            angle_rad: self.state.angle_rad,
            broken: self.state.broken,
        }
    }

    /// Start a run against the given specimen.
    ///
    /// Accepted only from idle; a trigger while a run is active is ignored
    /// (not queued) and returns false. The full energy balance is computed
    /// here, up front — the swing animation replays it.
    pub fn trigger(&mut self, material: &Material) -> bool {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = ?self.phase, "Ignored trigger while a run is active");
            return false;
        }
        self.pending = Some(energy::compute_outcome(&self.config, material, &mut self.rng));
        self.state = PhysicsState::at_release(self.config.start_angle_rad());
        self.advance(Step::Trigger);
        true
    }

    /// Cancel any active run and return to idle. The pending result of a
    /// cancelled run is discarded and never reaches history.
    pub fn reset(&mut self) {
        self.pending = None;
        self.state = PhysicsState::at_release(self.config.start_angle_rad());
        self.advance(Step::Reset);
    }

    /// Advance the active phase by one fixed step of `dt` simulated seconds.
    pub fn tick(&mut self, dt: f64) -> Vec<RigEvent> {
        let mut events = Vec::new();

        match self.phase {
            Phase::Idle | Phase::Finished => {},

            Phase::Falling => {
                let crossed =
                    physics::integrate_fall(&mut self.state, self.config.length_m, dt);
                let budget_spent = self.state.elapsed_secs >= self.tuning.fall_budget_secs;
                if crossed || budget_spent {
                    if !crossed {
                        // Budget ran out before the integrator crossed the
                        // vertical; the strike lands regardless.
                        self.state.angle_rad = 0.0;
                        self.state.broken = true;
                    }
                    self.state.elapsed_secs = 0.0;
                    self.advance(Step::Strike);
                    events.push(RigEvent::Struck);
                }
            },

            Phase::Impact => {
                self.state.elapsed_secs += dt;
                if self.state.elapsed_secs >= self.tuning.impact_hold_secs {
                    self.state.elapsed_secs = 0.0;
                    self.advance(Step::HoldExpired);
                }
            },

            Phase::Rising => {
                let Some(target_rad) = self.rebound_target_rad() else {
                    tracing::debug!("No pending outcome mid-run, cancelling");
                    self.reset();
                    return events;
                };
                let converged = physics::ease_toward_rebound(
                    &mut self.state,
                    target_rad,
                    self.tuning.rebound_rate,
                    self.tuning.rebound_tolerance_rad,
                    dt,
                );
                if converged {
                    self.state.elapsed_secs = 0.0;
                    self.advance(Step::ReboundConverged);
                }
            },

            Phase::Settling => {
                let Some(target_rad) = self.rebound_target_rad() else {
                    tracing::debug!("No pending outcome mid-run, cancelling");
                    self.reset();
                    return events;
                };
                physics::settle_about(
                    &mut self.state,
                    target_rad,
                    self.tuning.settle_frequency,
                    self.tuning.settle_amplitude_rad,
                    dt,
                );
                if self.state.elapsed_secs >= self.tuning.settle_duration_secs {
                    self.advance(Step::SettleExpired);
                    if let Some(result) = self.pending.take() {
                        tracing::info!(
                            material = %result.material.id,
                            absorbed_j = result.absorbed_energy_j,
                            did_break = result.did_break,
                            "Test run committed"
                        );
                        events.push(RigEvent::Completed(result));
                    }
                    self.state = PhysicsState::at_release(self.config.start_angle_rad());
                    self.advance(Step::Commit);
                }
            },
        }

        events
    }

    fn rebound_target_rad(&self) -> Option<f64> {
        self.pending
            .as_ref()
            .map(|r| r.final_angle_deg.to_radians())
    }

    fn advance(&mut self, step: Step) {
        if let Some(next) = transition(self.phase, step) {
            self.phase = next;
        }
    }
}
