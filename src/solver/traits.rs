//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - `Solver` trait: stable interface every marching method implements
//! - `SolverConfiguration`: HOW to march (step size, step count, checks)
//! - `SimulationResult`: the full space-time trajectory plus metadata
//!
//! The configuration validates itself in the same `Result<(), String>` style
//! the rest of the crate uses; the solver refuses to run on an invalid one.

use crate::solver::Scenario;
use nalgebra::DVector;
use std::collections::HashMap;

// =================================================================================================
// Solver Configuration
// =================================================================================================

/// Configuration for an explicit time-marching run
///
/// # Instability Is Not an Error
///
/// `check_finite` is off by default: an unstable parameter choice marches
/// through and the oscillation or divergence shows up in the output, which
/// is sometimes exactly what the caller wants to demonstrate. Turn the check
/// on with [`strict`](SolverConfiguration::strict) to fail fast instead.
///
/// # Examples
///
/// ```rust
/// use tracer_rs::solver::SolverConfiguration;
///
/// // 1000 steps of 1 s
/// let config = SolverConfiguration::fixed_step(1.0, 1000);
/// assert_eq!(config.total_time(), 1000.0);
///
/// // Same run, but abort on the first NaN/Inf
/// let config = SolverConfiguration::fixed_step(1.0, 1000).strict();
/// assert!(config.check_finite);
/// ```
#[derive(Clone, Debug)]
pub struct SolverConfiguration {
    /// Time step dt [s]
    pub dt: f64,

    /// Number of time steps (rows of the resulting trajectory)
    pub time_steps: usize,

    /// Abort with a diagnostic when a profile contains NaN or Inf
    pub check_finite: bool,
}

impl SolverConfiguration {
    /// Create a fixed-step configuration
    ///
    /// # Arguments
    ///
    /// * `dt` - Time step \[s\]
    /// * `time_steps` - Number of steps; the trajectory holds exactly this
    ///   many rows, row 0 being the initial profile
    pub fn fixed_step(dt: f64, time_steps: usize) -> Self {
        Self {
            dt,
            time_steps,
            check_finite: false,
        }
    }

    /// Enable NaN/Inf checking after every step
    pub fn strict(mut self) -> Self {
        self.check_finite = true;
        self
    }

    /// Total simulated time: dt · (time_steps − 1) \[s\]
    ///
    /// Row t of the trajectory sits at time t·dt; the last row therefore
    /// sits at dt·(time_steps − 1).
    pub fn total_time(&self) -> f64 {
        if self.time_steps == 0 {
            return 0.0;
        }
        self.dt * (self.time_steps - 1) as f64
    }

    /// Validate that the parameters are usable
    pub fn validate(&self) -> Result<(), String> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(format!("Time step must be positive and finite, got {}", self.dt));
        }
        if self.time_steps == 0 {
            return Err("Time steps must be greater than 0".to_string());
        }
        Ok(())
    }
}

// =================================================================================================
// Simulation Result
// =================================================================================================

/// Full space-time result of one simulation run
///
/// Holds one concentration profile per time step (row t at time t·dt) plus
/// string metadata for diagnostics and reproducibility. The result is handed
/// to the caller as an immutable record; nothing mutates it after the march.
///
/// # Accessors
///
/// - [`profile_at`](SimulationResult::profile_at): spatial profile at one step
/// - [`history_at`](SimulationResult::history_at): time series at one cell
/// - [`mass_history`](SimulationResult::mass_history): per-step total mass
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Time of each row \[s\]
    pub time_points: Vec<f64>,

    /// One concentration profile per time step
    pub profiles: Vec<DVector<f64>>,

    /// Diagnostic metadata (solver name, dt, model, ...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create a result from time points and profiles
    ///
    /// # Panics
    ///
    /// Panics when the two vectors have different lengths.
    pub fn new(time_points: Vec<f64>, profiles: Vec<DVector<f64>>) -> Self {
        assert_eq!(
            time_points.len(),
            profiles.len(),
            "One time point per profile required"
        );
        Self {
            time_points,
            profiles,
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Number of recorded time steps
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when no steps were recorded
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Spatial profile at time step `step`
    pub fn profile_at(&self, step: usize) -> Option<&DVector<f64>> {
        self.profiles.get(step)
    }

    /// Final spatial profile
    pub fn final_profile(&self) -> Option<&DVector<f64>> {
        self.profiles.last()
    }

    /// Time series of the concentration at one grid cell
    ///
    /// Returns `None` when the cell index lies outside the grid.
    pub fn history_at(&self, cell: usize) -> Option<Vec<f64>> {
        let points = self.profiles.first()?.len();
        if cell >= points {
            return None;
        }
        Some(self.profiles.iter().map(|profile| profile[cell]).collect())
    }

    /// Total mass per time step: sum of the concentration over the
    /// spatial axis of each row
    ///
    /// Under stable parameters this sequence stays approximately constant;
    /// its drift is the standard mass-conservation check of the scheme.
    pub fn mass_history(&self) -> Vec<f64> {
        self.profiles.iter().map(|profile| profile.sum()).collect()
    }
}

// =================================================================================================
// Solver Trait
// =================================================================================================

/// Trait for numerical solvers
///
/// # Responsibility
///
/// Applies a marching method to the model inside a scenario and returns the
/// full trajectory. Independent of the physics: the same solver runs any
/// [`TransportModel`](crate::physics::TransportModel).
///
/// # Stability
///
/// This trait is STABLE since v0.1.0. Extensions use separate optional
/// traits.
pub trait Solver {
    /// Solve a scenario with this method
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String>;

    /// Name of the method (used for display and result metadata)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
