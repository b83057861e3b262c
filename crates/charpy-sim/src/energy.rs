use rand::Rng;

use charpy_core::config::PendulumConfig;
use charpy_core::material::Material;
use charpy_core::result::TestResult;

/// Standard gravity (m/s²).
pub const G: f64 = 9.81;
/// Half-width of the uniform toughness variance band: each specimen's
/// effective toughness is `base * (1 + Uniform[-0.05, 0.05))`.
pub const TOUGHNESS_VARIANCE: f64 = 0.05;

/// Compute the full energy balance of one impact.
///
/// Consumes exactly one scalar draw from `rng` for the specimen toughness
/// variance; everything else is closed-form. Called once at trigger time,
/// before the swing animation starts — the animation replays this outcome,
/// it does not discover it.
pub fn compute_outcome(
    config: &PendulumConfig,
    material: &Material,
    rng: &mut impl Rng,
) -> TestResult {
    let variance = rng.random_range(-TOUGHNESS_VARIANCE..TOUGHNESS_VARIANCE);
    compute_outcome_with_variance(config, material, variance)
}

/// The deterministic core of [`compute_outcome`], with the variance draw
/// supplied by the caller.
pub fn compute_outcome_with_variance(
    config: &PendulumConfig,
    material: &Material,
    variance: f64,
) -> TestResult {
    // Height drop of the center of percussion from release to vertical.
    let drop_height = config.length_m * (1.0 - config.start_angle_rad().cos());
    let initial_energy = config.mass_kg * G * drop_height;

    let absorbed_candidate = material.base_toughness_j * (1.0 + variance);

    // If the specimen can soak up more than the hammer carries, the hammer
    // is arrested without fracturing it.
    let (absorbed_energy, did_break) = if absorbed_candidate >= initial_energy {
        (initial_energy, false)
    } else {
        (absorbed_candidate, true)
    };

    let remaining_energy = initial_energy - absorbed_energy;
    let rebound_height = remaining_energy / (config.mass_kg * G);
    // Clamp guards the acos domain against floating-point overshoot.
    let cos_beta = (1.0 - rebound_height / config.length_m).clamp(-1.0, 1.0);
    let final_angle_deg = cos_beta.acos().to_degrees();

    TestResult::new(
        material.clone(),
        initial_energy,
        absorbed_energy,
        final_angle_deg,
        did_break,
    )
}
