use serde::{Deserialize, Serialize};

use crate::energy::G;

/// Live kinematic state of the pendulum arm during one run.
///
/// One instance exists per active run, owned by the state machine; it is
/// rebuilt from the release pose whenever the machine returns to idle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsState {
    /// Signed angle from vertical in radians; negative = release side.
    pub angle_rad: f64,
    /// Angular velocity in rad/s.
    pub angular_velocity: f64,
    /// Time accumulated in the current phase, in seconds of simulated time.
    pub elapsed_secs: f64,
    /// Set at the strike instant; the specimen fractures visually whether or
    /// not the material ultimately fails.
    pub broken: bool,
}

impl PhysicsState {
    /// The arm held at the release pose, motionless.
    pub fn at_release(start_angle_rad: f64) -> Self {
        Self {
            angle_rad: -start_angle_rad,
            angular_velocity: 0.0,
            elapsed_secs: 0.0,
            broken: false,
        }
    }
}

/// Advance the free-falling arm by one explicit Euler step.
///
/// Returns `true` when the arm crosses the vertical: the angle is clamped to
/// zero and `broken` is set, marking the strike instant.
pub fn integrate_fall(state: &mut PhysicsState, length_m: f64, dt: f64) -> bool {
    let accel = -(G / length_m) * state.angle_rad.sin();
    state.angular_velocity += accel * dt;
    state.angle_rad += state.angular_velocity * dt;
    state.elapsed_secs += dt;

    if state.angle_rad >= 0.0 {
        state.angle_rad = 0.0;
        state.broken = true;
        return true;
    }
    false
}

/// Ease the arm toward the precomputed rebound angle by one tick.
///
/// `rate` is a per-tick convergence fraction, not a per-second rate. Returns
/// `true` once the residual drops below `tolerance_rad`, zeroing the
/// velocity. Cosmetic, not energy-conserving: a faithful rebound would leave
/// the strike with a velocity derived from the remaining energy.
pub fn ease_toward_rebound(
    state: &mut PhysicsState,
    target_rad: f64,
    rate: f64,
    tolerance_rad: f64,
    dt: f64,
) -> bool {
    state.angle_rad += (target_rad - state.angle_rad) * rate;
    state.elapsed_secs += dt;

    if (target_rad - state.angle_rad).abs() < tolerance_rad {
        state.angular_velocity = 0.0;
        return true;
    }
    false
}

/// Advance the settling oscillation by one tick: a damped sinusoid about the
/// rebound angle whose amplitude decays with phase time.
pub fn settle_about(
    state: &mut PhysicsState,
    target_rad: f64,
    frequency: f64,
    amplitude_rad: f64,
    dt: f64,
) {
    state.elapsed_secs += dt;
    let envelope = amplitude_rad * (-state.elapsed_secs).exp();
    state.angle_rad = target_rad + (state.elapsed_secs * frequency).sin() * envelope;
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn release_pose_is_motionless_on_release_side() {
        let state = PhysicsState::at_release(2.0);
        assert_eq!(state.angle_rad, -2.0);
        assert_eq!(state.angular_velocity, 0.0);
        assert_eq!(state.elapsed_secs, 0.0);
        assert!(!state.broken);
    }

    #[test]
    fn fall_accelerates_toward_vertical() {
        let mut state = PhysicsState::at_release(135.0f64.to_radians());
        integrate_fall(&mut state, 0.8, DT);

        assert!(state.angular_velocity > 0.0, "Arm should swing toward 0");
        assert!(state.angle_rad > -135.0f64.to_radians());
    }

    #[test]
    fn fall_terminates_at_vertical_with_clamp() {
        let mut state = PhysicsState::at_release(135.0f64.to_radians());

        let mut crossed = false;
        for _ in 0..(10.0 / DT) as usize {
            if integrate_fall(&mut state, 0.8, DT) {
                crossed = true;
                break;
            }
        }

        assert!(crossed, "Arm should cross the vertical within 10 s");
        assert_eq!(state.angle_rad, 0.0, "Angle clamps to 0 at the strike");
        assert!(state.broken, "Strike marks the specimen broken");
        assert!(state.angular_velocity > 0.0);
    }

    #[test]
    fn fall_never_overshoots_release_side() {
        let mut state = PhysicsState::at_release(90.0f64.to_radians());
        for _ in 0..600 {
            let angle_before = state.angle_rad;
            if integrate_fall(&mut state, 1.0, DT) {
                break;
            }
            assert!(
                state.angle_rad >= angle_before,
                "Angle should be monotone during the fall"
            );
        }
    }

    #[test]
    fn small_angle_quarter_period_matches_theory() {
        // From a small release angle the fall to vertical is a quarter of
        // T = 2π√(L/g). Euler at 1 ms steps lands within a few percent.
        let length = 1.0;
        let mut state = PhysicsState::at_release(0.1);
        let dt = 0.001;

        let mut ticks = 0u32;
        while !integrate_fall(&mut state, length, dt) {
            ticks += 1;
            assert!(ticks < 10_000, "Fall did not terminate");
        }

        let quarter_period = std::f64::consts::FRAC_PI_2 * (length / G).sqrt();
        let simulated = f64::from(ticks) * dt;
        assert!(
            (simulated - quarter_period).abs() / quarter_period < 0.05,
            "Quarter period {simulated} vs theory {quarter_period}"
        );
    }

    #[test]
    fn ease_converges_and_zeroes_velocity() {
        let mut state = PhysicsState::at_release(0.0);
        state.angular_velocity = 5.0;
        let target = 1.1;

        let mut converged = false;
        for _ in 0..500 {
            if ease_toward_rebound(&mut state, target, 0.1, 0.005, DT) {
                converged = true;
                break;
            }
        }

        assert!(converged, "Ease should converge within 500 ticks");
        assert!((state.angle_rad - target).abs() < 0.005);
        assert_eq!(state.angular_velocity, 0.0);
    }

    #[test]
    fn ease_residual_shrinks_every_tick() {
        let mut state = PhysicsState::at_release(0.0);
        let target = 0.8;

        let mut residual = (target - state.angle_rad).abs();
        for _ in 0..50 {
            ease_toward_rebound(&mut state, target, 0.1, 0.005, DT);
            let next = (target - state.angle_rad).abs();
            assert!(next < residual, "Residual should shrink monotonically");
            residual = next;
        }
    }

    #[test]
    fn ease_at_target_converges_immediately() {
        // An arrested hammer rebounds to 0°, exactly where the strike left it.
        let mut state = PhysicsState::at_release(0.0);
        state.angle_rad = 0.0;
        assert!(ease_toward_rebound(&mut state, 0.0, 0.1, 0.005, DT));
    }

    #[test]
    fn settle_oscillates_about_target_and_decays() {
        let target = 1.1;
        let amplitude = 0.03;
        let mut state = PhysicsState::at_release(0.0);
        state.angle_rad = target;

        let mut max_early: f64 = 0.0;
        let mut max_late: f64 = 0.0;
        for _ in 0..(3.0 / DT) as usize {
            settle_about(&mut state, target, 8.0, amplitude, DT);
            let excursion = (state.angle_rad - target).abs();
            assert!(excursion <= amplitude + 1e-12);
            if state.elapsed_secs < 0.5 {
                max_early = max_early.max(excursion);
            } else if state.elapsed_secs > 2.5 {
                max_late = max_late.max(excursion);
            }
        }

        assert!(
            max_late < max_early * 0.25,
            "Oscillation should decay: early {max_early}, late {max_late}"
        );
    }
}
