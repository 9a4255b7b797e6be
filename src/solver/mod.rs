//! Numerical solvers
//!
//! This module provides traits and implementations for time-marching
//! solvers. A solver applies a numerical method to the model inside a
//! scenario and returns the full space-time trajectory.
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** ([`Scenario`]): WHAT to solve, the transport model
//! 2. **Configuration** ([`SolverConfiguration`]): HOW to solve it, step
//!    size, step count, strictness
//! 3. **Solver** ([`Solver`] trait): the marching method itself
//!
//! This separation allows the same scenario to be solved with different
//! methods and the same method to run different physics.
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver` trait, `SolverConfiguration`, `SimulationResult`
//! - **`scenario`**: problem definition and validation
//! - **`methods`**: concrete marchers ([`ExplicitMarch`])
//!
//! # Error Handling
//!
//! All solver seams return `Result<T, String>`. Numerical instability is NOT
//! an error by default: an unstable Courant pair marches through and shows
//! up as oscillation or divergence in the output. Strict configurations
//! ([`SolverConfiguration::strict`]) turn NaN/Inf into a diagnosed failure
//! instead.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand the interior fill off to Rayon is a numerical-
// execution concern, not a physics concern, so it lives here rather than in
// the models.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without a mutex on every step.
// Relaxed ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid cells above which [`ExplicitMarch`] switches the
/// interior fill to parallel iteration.
///
/// The crossover is set at 1 000 cells. Below that point the overhead of
/// Rayon's thread-pool dispatch outweighs the per-cell stencil arithmetic.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The marcher uses sequential iteration when the grid holds fewer cells
/// than this value, and switches to Rayon when it holds more (only when the
/// crate is compiled with the `parallel` feature).
///
/// # Example
///
/// ```rust
/// use tracer_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero-cell threshold would force parallel
/// dispatch on every single-cell fill, which is never the intended behaviour.
///
/// # Example
///
/// ```rust
/// use tracer_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use methods::ExplicitMarch;
pub use scenario::Scenario;
pub use traits::{SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// Helper Functions
// =================================================================================================

use nalgebra::DVector;

/// Validate a concentration profile for numerical issues
///
/// Checks that the profile contains no NaN or Inf values, which would
/// indicate numerical instability of the stencil for the chosen Courant
/// numbers.
///
/// Only called when the configuration is strict; the default behaviour is
/// to let instability pass through to the output.
pub(crate) fn validate_profile(profile: &DVector<f64>, step: usize) -> Result<(), String> {
    // NaN can arise from 0/0, Inf − Inf, or other undefined operations
    if profile.iter().any(|x| x.is_nan()) {
        return Err(format!(
            "NaN detected in concentration at step {}. This indicates numerical \
             instability. Try reducing the time step or the Courant numbers.",
            step
        ));
    }

    // Inf indicates overflow of a divergent march
    if profile.iter().any(|x| x.is_infinite()) {
        return Err(format!(
            "Infinity detected in concentration at step {}. This indicates \
             numerical overflow of a divergent march.",
            step
        ));
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
