//! Helper functions for integration tests

use nalgebra::DVector;
use tracer_rs::models::{AdvectionDiffusion, InitialInjection};
use tracer_rs::physics::ChannelGeometry;
use tracer_rs::solver::Scenario;

/// Channel length of the reference setup (m)
pub const REFERENCE_LENGTH: f64 = 100.0;

/// Injection cell of the reference setup
pub const REFERENCE_INJECTION_CELL: usize = 10;

/// Concentration produced by releasing 1 kg into one 1 m × 5 m × 1 m cell
pub const REFERENCE_PULSE_CONCENTRATION: f64 = 0.2;

/// Build the reference transport model: a 100 m channel of 5 m width and
/// 1 m depth at unit grid spacing, with 1 kg of tracer released in cell 10.
pub fn reference_model(velocity: f64, diffusivity: f64, dt: f64) -> AdvectionDiffusion {
    let geometry = ChannelGeometry::new(REFERENCE_LENGTH, 5.0, 1.0, 1.0);
    AdvectionDiffusion::new(
        geometry,
        velocity,
        diffusivity,
        dt,
        InitialInjection::pulse(REFERENCE_INJECTION_CELL, 1.0),
    )
}

/// Build the reference scenario around [`reference_model`].
pub fn reference_scenario(velocity: f64, diffusivity: f64, dt: f64) -> Scenario {
    Scenario::new(Box::new(reference_model(velocity, diffusivity, dt)))
}

/// Sum of all cell concentrations in a profile
pub fn total_mass(profile: &DVector<f64>) -> f64 {
    profile.iter().sum()
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that two profiles agree element-wise within tolerance
pub fn assert_profiles_close(
    profile1: &DVector<f64>,
    profile2: &DVector<f64>,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(
        profile1.len(),
        profile2.len(),
        "{}: Dimension mismatch",
        message
    );

    for (i, (&v1, &v2)) in profile1.iter().zip(profile2.iter()).enumerate() {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Cell {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_total_mass() {
        let profile = DVector::from_vec(vec![0.1, 0.2, 0.3]);
        assert!((total_mass(&profile) - 0.6).abs() < 1e-12);
    }
}
