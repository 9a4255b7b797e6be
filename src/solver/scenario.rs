//! Simulation scenario definition
//!
//! A scenario wraps the transport model to be marched. It is the "WHAT to
//! solve"; the solver configuration is the "HOW".

use crate::physics::TransportModel;

/// Simulation scenario
///
/// # Design
///
/// The same scenario can be solved with different marching methods and
/// configurations; validation happens once here instead of inside every
/// solver.
///
/// # Examples
///
/// ```rust
/// use tracer_rs::models::{AdvectionDiffusion, InitialInjection};
/// use tracer_rs::physics::ChannelGeometry;
/// use tracer_rs::solver::Scenario;
///
/// let geometry = ChannelGeometry::new(100.0, 5.0, 1.0, 1.0);
/// let model = AdvectionDiffusion::new(
///     geometry, 0.1, 0.01, 1.0,
///     InitialInjection::pulse(10, 1.0),
/// );
/// let scenario = Scenario::new(Box::new(model));
/// assert!(scenario.validate().is_ok());
/// ```
pub struct Scenario {
    /// Transport model (the physics)
    pub model: Box<dyn TransportModel>,
}

impl Scenario {
    /// Create a scenario
    pub fn new(model: Box<dyn TransportModel>) -> Self {
        Self { model }
    }

    /// Verify the model is marchable
    ///
    /// The grid must leave at least one interior cell once the stencil
    /// padding is subtracted.
    pub fn validate(&self) -> Result<(), String> {
        let (left, right) = self.model.stencil_span();
        let points = self.model.points();

        if points <= left + right {
            return Err(format!(
                "Grid of {} cells leaves no interior for a ({}, {}) stencil",
                points, left, right
            ));
        }
        Ok(())
    }

    /// Get model name
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Number of grid cells
    pub fn points(&self) -> usize {
        self.model.points()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("model", &self.model_name())
            .field("points", &self.points())
            .field("stencil span", &self.model.stencil_span())
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;

    // Mock transport model
    struct MockModel {
        points: usize,
    }

    impl TransportModel for MockModel {
        fn points(&self) -> usize {
            self.points
        }

        fn initial_profile(&self) -> DVector<f64> {
            DVector::zeros(self.points)
        }

        fn update_cell(&self, window: &[f64]) -> f64 {
            window[2]
        }

        fn name(&self) -> &str {
            "MockModel"
        }
    }

    #[test]
    fn test_scenario_creation() {
        let scenario = Scenario::new(Box::new(MockModel { points: 10 }));
        assert_eq!(scenario.model_name(), "MockModel");
        assert_eq!(scenario.points(), 10);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_scenario_rejects_tiny_grid() {
        // (2, 1) padding needs at least 4 cells
        let scenario = Scenario::new(Box::new(MockModel { points: 3 }));
        let error = scenario.validate().unwrap_err();
        assert!(error.contains("no interior"));
    }

    #[test]
    fn test_debug_format() {
        let scenario = Scenario::new(Box::new(MockModel { points: 10 }));
        let text = format!("{:?}", scenario);
        assert!(text.contains("MockModel"));
    }
}
