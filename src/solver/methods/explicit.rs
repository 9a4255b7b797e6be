//! Explicit time-marching solver
//!
//! # Mathematical Background
//!
//! The explicit march advances a concentration field row by row:
//!
//! ```text
//! c[t+1, x] = model.update_cell(c[t, x-left ..= x+right])
//! ```
//!
//! for every interior cell `x` in `left .. n-right`. Each new row starts
//! zeroed; cells outside the interior are never written, so they keep their
//! seeded value in row 0 and stay at zero in every later row. That frozen
//! padding is the observed behaviour of the scheme and is preserved exactly,
//! including the asymmetry that the second-to-last cell is updated while the
//! last is not.
//!
//! # Characteristics
//!
//! - **Memory**: O(time_steps × points), the full trajectory is stored
//! - **Cost**: one `update_cell` per interior cell per step
//! - **Stability**: inherited from the model's scheme; the march itself
//!   imposes no limit and runs unstable configurations to completion
//!
//! # Example
//!
//! ```rust
//! use tracer_rs::models::{AdvectionDiffusion, InitialInjection};
//! use tracer_rs::physics::ChannelGeometry;
//! use tracer_rs::solver::{ExplicitMarch, Scenario, Solver, SolverConfiguration};
//!
//! let geometry = ChannelGeometry::new(100.0, 5.0, 1.0, 1.0);
//! let model = AdvectionDiffusion::new(
//!     geometry, 0.1, 0.01, 1.0,
//!     InitialInjection::pulse(10, 1.0),
//! );
//! let scenario = Scenario::new(Box::new(model));
//! let config = SolverConfiguration::fixed_step(1.0, 1000);
//!
//! let solver = ExplicitMarch::new();
//! let result = solver.solve(&scenario, &config).unwrap();
//! assert_eq!(result.len(), 1000);
//! ```

use crate::solver;
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration};
use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Explicit March Solver
// =================================================================================================

/// Explicit time-marching solver for stencil-based transport models
///
/// # Algorithm
///
/// 1. Seed row 0 from the model's initial profile
/// 2. For each step t = 0, 1, ..., time_steps − 2:
///    - Allocate a zeroed next row
///    - Fill the interior from the model's stencil windows
///    - Record the row and its time point t·dt
///    - Optionally check the row for NaN/Inf (strict mode)
/// 3. Return the full trajectory
///
/// # Parallelism
///
/// With the `parallel` feature the interior fill switches to Rayon when the
/// grid holds more cells than [`parallel_threshold()`](crate::solver::parallel_threshold).
/// Cells of one step only read the previous row, so the spatial loop is
/// embarrassingly parallel; steps themselves stay sequential.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitMarch;

impl ExplicitMarch {
    /// Create a new explicit marcher
    ///
    /// # Example
    ///
    /// ```rust
    /// use tracer_rs::solver::{ExplicitMarch, Solver};
    ///
    /// let solver = ExplicitMarch::new();
    /// assert_eq!(solver.name(), "Explicit march");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for ExplicitMarch {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let model = scenario.model.as_ref();
        let points = model.points();
        let (left, right) = model.stencil_span();
        let interior_end = points - right;

        // ====== Step 2: Setup ======

        let initial = model.initial_profile();
        if initial.len() != points {
            return Err(format!(
                "Initial profile of length {} does not match grid of {} cells",
                initial.len(),
                points
            ));
        }

        let mut time_points = Vec::with_capacity(config.time_steps);
        let mut profiles = Vec::with_capacity(config.time_steps);

        time_points.push(0.0);
        profiles.push(initial);

        // ====== Step 3: Time March ======

        for step in 0..config.time_steps.saturating_sub(1) {
            // Fresh row: padding cells stay at zero, only the interior is written
            let mut next = DVector::zeros(points);

            {
                let current = profiles[step].as_slice();
                let interior = &mut next.as_mut_slice()[left..interior_end];

                if points > solver::parallel_threshold() {
                    #[cfg(feature = "parallel")]
                    interior.par_iter_mut().enumerate().for_each(|(i, cell)| {
                        let x = i + left;
                        *cell = model.update_cell(&current[x - left..=x + right]);
                    });
                    #[cfg(not(feature = "parallel"))]
                    interior.iter_mut().enumerate().for_each(|(i, cell)| {
                        let x = i + left;
                        *cell = model.update_cell(&current[x - left..=x + right]);
                    });
                } else {
                    interior.iter_mut().enumerate().for_each(|(i, cell)| {
                        let x = i + left;
                        *cell = model.update_cell(&current[x - left..=x + right]);
                    });
                }
            }

            // Strict mode: diagnose instability instead of marching through it
            if config.check_finite {
                solver::validate_profile(&next, step + 1)?;
            }

            // Time computed from the index, not accumulated, so the last
            // point lands on (time_steps - 1) · dt within machine epsilon
            time_points.push((step as f64 + 1.0) * config.dt);
            profiles.push(next);
        }

        // ====== Step 4: Build Result ======

        let mut result = SimulationResult::new(time_points, profiles);

        result.add_metadata("solver", self.name());
        result.add_metadata("model", model.name());
        result.add_metadata("time steps", &config.time_steps.to_string());
        result.add_metadata("dt", &config.dt.to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Explicit march"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::TransportModel;

    // ====== Mock Models for Testing ======

    /// Mock model: every interior cell copies its own current value.
    ///
    /// The interior persists unchanged while the padding cells drop to zero
    /// after row 0, which makes the frozen-edge behaviour directly visible.
    struct HoldValue {
        points: usize,
        seed: f64,
    }

    impl TransportModel for HoldValue {
        fn points(&self) -> usize {
            self.points
        }

        fn initial_profile(&self) -> DVector<f64> {
            DVector::from_element(self.points, self.seed)
        }

        fn update_cell(&self, window: &[f64]) -> f64 {
            window[2]
        }

        fn name(&self) -> &str {
            "Hold value"
        }
    }

    /// Mock model: each interior cell takes the value one cell upstream,
    /// shifting the field right by one cell per step.
    struct UnitShift {
        points: usize,
        pulse_cell: usize,
    }

    impl TransportModel for UnitShift {
        fn points(&self) -> usize {
            self.points
        }

        fn initial_profile(&self) -> DVector<f64> {
            let mut profile = DVector::zeros(self.points);
            profile[self.pulse_cell] = 1.0;
            profile
        }

        fn update_cell(&self, window: &[f64]) -> f64 {
            window[1]
        }

        fn name(&self) -> &str {
            "Unit shift"
        }
    }

    /// Mock model: produces a NaN everywhere from step 1 on.
    struct NaNModel {
        points: usize,
    }

    impl TransportModel for NaNModel {
        fn points(&self) -> usize {
            self.points
        }

        fn initial_profile(&self) -> DVector<f64> {
            DVector::zeros(self.points)
        }

        fn update_cell(&self, _window: &[f64]) -> f64 {
            f64::NAN
        }

        fn name(&self) -> &str {
            "NaN model"
        }
    }

    /// Mock model whose initial profile has the wrong length.
    struct BadProfile;

    impl TransportModel for BadProfile {
        fn points(&self) -> usize {
            10
        }

        fn initial_profile(&self) -> DVector<f64> {
            DVector::zeros(7)
        }

        fn update_cell(&self, window: &[f64]) -> f64 {
            window[2]
        }

        fn name(&self) -> &str {
            "Bad profile"
        }
    }

    // ====== Solver Creation Tests ======

    #[test]
    fn test_solver_creation() {
        assert_eq!(ExplicitMarch::new().name(), "Explicit march");
        assert_eq!(ExplicitMarch::default().name(), "Explicit march");
    }

    // ====== Trajectory Shape Tests ======

    #[test]
    fn test_trajectory_length_and_times() {
        let scenario = Scenario::new(Box::new(HoldValue { points: 10, seed: 1.0 }));
        let config = SolverConfiguration::fixed_step(0.5, 100);

        let result = ExplicitMarch::new().solve(&scenario, &config).unwrap();

        // Exactly time_steps rows, row 0 at t = 0
        assert_eq!(result.len(), 100);
        assert_eq!(result.time_points.len(), 100);
        assert!(result.time_points[0].abs() < 1e-15);

        // Last row at dt · (time_steps − 1)
        let final_time = *result.time_points.last().unwrap();
        assert!((final_time - 49.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_step_run() {
        let scenario = Scenario::new(Box::new(HoldValue { points: 10, seed: 2.0 }));
        let config = SolverConfiguration::fixed_step(1.0, 1);

        let result = ExplicitMarch::new().solve(&scenario, &config).unwrap();

        // Only the initial profile, untouched
        assert_eq!(result.len(), 1);
        assert_eq!(result.profile_at(0).unwrap()[0], 2.0);
    }

    // ====== Frozen Padding Tests ======

    #[test]
    fn test_padding_cells_drop_to_zero() {
        let scenario = Scenario::new(Box::new(HoldValue { points: 10, seed: 3.0 }));
        let config = SolverConfiguration::fixed_step(1.0, 5);

        let result = ExplicitMarch::new().solve(&scenario, &config).unwrap();

        // Row 0 keeps the seeded padding
        let row0 = result.profile_at(0).unwrap();
        assert_eq!(row0[0], 3.0);
        assert_eq!(row0[9], 3.0);

        // Every later row: padding zeroed, interior held
        for step in 1..5 {
            let row = result.profile_at(step).unwrap();
            assert_eq!(row[0], 0.0, "left padding cell at step {}", step);
            assert_eq!(row[1], 0.0, "left padding cell at step {}", step);
            assert_eq!(row[9], 0.0, "right padding cell at step {}", step);
            assert_eq!(row[2], 3.0, "first interior cell at step {}", step);
            // Second-to-last cell IS interior for a (2, 1) span
            assert_eq!(row[8], 3.0, "second-to-last cell at step {}", step);
        }
    }

    #[test]
    fn test_unit_shift_moves_pulse() {
        let scenario = Scenario::new(Box::new(UnitShift {
            points: 10,
            pulse_cell: 3,
        }));
        let config = SolverConfiguration::fixed_step(1.0, 4);

        let result = ExplicitMarch::new().solve(&scenario, &config).unwrap();

        // Pulse walks one cell to the right per step
        assert_eq!(result.profile_at(1).unwrap()[4], 1.0);
        assert_eq!(result.profile_at(2).unwrap()[5], 1.0);
        assert_eq!(result.profile_at(3).unwrap()[6], 1.0);
        assert_eq!(result.profile_at(3).unwrap()[3], 0.0);
    }

    // ====== Validation Tests ======

    #[test]
    fn test_rejects_invalid_configuration() {
        let scenario = Scenario::new(Box::new(HoldValue { points: 10, seed: 1.0 }));
        let config = SolverConfiguration::fixed_step(1.0, 0);

        assert!(ExplicitMarch::new().solve(&scenario, &config).is_err());
    }

    #[test]
    fn test_rejects_mismatched_initial_profile() {
        let scenario = Scenario::new(Box::new(BadProfile));
        let config = SolverConfiguration::fixed_step(1.0, 10);

        let error = ExplicitMarch::new().solve(&scenario, &config).unwrap_err();
        assert!(error.contains("does not match grid"));
    }

    #[test]
    fn test_strict_mode_detects_nan() {
        let scenario = Scenario::new(Box::new(NaNModel { points: 10 }));
        let config = SolverConfiguration::fixed_step(1.0, 10).strict();

        let error = ExplicitMarch::new().solve(&scenario, &config).unwrap_err();
        assert!(error.contains("NaN"));
        assert!(error.contains("step 1"));
    }

    #[test]
    fn test_default_mode_marches_through_nan() {
        // Without strict mode the NaN propagates silently
        let scenario = Scenario::new(Box::new(NaNModel { points: 10 }));
        let config = SolverConfiguration::fixed_step(1.0, 10);

        let result = ExplicitMarch::new().solve(&scenario, &config).unwrap();
        assert!(result.final_profile().unwrap()[5].is_nan());
    }

    // ====== Metadata Tests ======

    #[test]
    fn test_metadata() {
        let scenario = Scenario::new(Box::new(HoldValue { points: 10, seed: 1.0 }));
        let config = SolverConfiguration::fixed_step(0.25, 8);

        let result = ExplicitMarch::new().solve(&scenario, &config).unwrap();

        assert_eq!(result.metadata.get("solver"), Some(&"Explicit march".to_string()));
        assert_eq!(result.metadata.get("model"), Some(&"Hold value".to_string()));
        assert_eq!(result.metadata.get("time steps"), Some(&"8".to_string()));
        assert_eq!(result.metadata.get("dt"), Some(&"0.25".to_string()));
    }

    // ====== Parallel Dispatch Tests ======

    #[test]
    fn test_threshold_does_not_change_result() {
        // Force the dispatch decision both ways; values must be identical.
        let solve = |points| {
            let scenario = Scenario::new(Box::new(UnitShift {
                points,
                pulse_cell: 5,
            }));
            let config = SolverConfiguration::fixed_step(1.0, 20);
            ExplicitMarch::new().solve(&scenario, &config).unwrap()
        };

        let sequential = {
            let _guard = crate::solver::ThresholdGuard::save(usize::MAX);
            solve(64)
        };
        let dispatched = {
            let _guard = crate::solver::ThresholdGuard::save(1);
            solve(64)
        };

        for (a, b) in sequential.profiles.iter().zip(dispatched.profiles.iter()) {
            assert_eq!(a, b);
        }
    }
}
