//! Mock transport models for testing
//!
//! These models have exactly known trajectories, making them ideal for
//! validating the marching machinery independently of the stencil
//! arithmetic.

use nalgebra::DVector;
use tracer_rs::physics::TransportModel;

// =================================================================================================
// Constant Field: c(t+1, x) = c(t, x)
// =================================================================================================

/// Stationary model: every cell keeps its value.
///
/// The trajectory is the initial profile repeated, so any deviation points
/// at the marcher rather than at the physics.
pub struct ConstantField {
    pub points: usize,
    pub value: f64,
}

impl ConstantField {
    pub fn new(points: usize, value: f64) -> Self {
        Self { points, value }
    }
}

impl TransportModel for ConstantField {
    fn points(&self) -> usize {
        self.points
    }

    fn initial_profile(&self) -> DVector<f64> {
        DVector::from_element(self.points, self.value)
    }

    fn update_cell(&self, window: &[f64]) -> f64 {
        // Window layout is [far upwind, upwind, centre, downwind]
        window[2]
    }

    fn name(&self) -> &str {
        "Constant Field"
    }
}

// =================================================================================================
// Shift Right: c(t+1, x) = c(t, x-1)
// =================================================================================================

/// Pure translation model: the profile moves one cell downstream per step.
///
/// Equivalent to an advection Courant number of exactly one. The trajectory
/// is exactly predictable, down to the bit.
pub struct ShiftRight {
    pub points: usize,
    pub seed_cell: usize,
    pub seed_value: f64,
}

impl ShiftRight {
    pub fn new(points: usize, seed_cell: usize, seed_value: f64) -> Self {
        Self {
            points,
            seed_cell,
            seed_value,
        }
    }
}

impl TransportModel for ShiftRight {
    fn points(&self) -> usize {
        self.points
    }

    fn initial_profile(&self) -> DVector<f64> {
        let mut profile = DVector::zeros(self.points);
        profile[self.seed_cell] = self.seed_value;
        profile
    }

    fn update_cell(&self, window: &[f64]) -> f64 {
        window[1]
    }

    fn name(&self) -> &str {
        "Shift Right"
    }
}
