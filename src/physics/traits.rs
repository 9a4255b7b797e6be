//! Transport model trait
//!
//! This module defines the core API for transport models:
//! - `TransportModel`: trait for all finite-difference transport models
//!
//! The model provides the "physics" (the stencil arithmetic and the initial
//! field), the solver provides the "numerics" (the time-marching loop).

use nalgebra::DVector;

// =================================================================================================
// Transport Model Trait
// =================================================================================================

/// Trait for 1D finite-difference transport models
///
/// # Responsibility
///
/// Defines the update rule for one grid cell given its stencil window and
/// the initial spatial distribution of the transported quantity.
/// Does NOT march the field in time (that's the Solver's job).
///
/// # Stencil Convention
///
/// `stencil_span()` returns `(left, right)`: the number of neighbouring cells
/// the update rule reads on each side. The solver hands `update_cell` a
/// window of `left + 1 + right` consecutive current-step values, with the
/// cell being updated at index `left`.
///
/// Cells closer than `left` to the start of the grid or closer than `right`
/// to its end are never updated: each new row starts zeroed and only the
/// interior is written. This frozen-edge behaviour is part of the contract,
/// not something a model can override.
///
/// # Mandatory Point
///
/// All new transport models MUST implement this trait.
pub trait TransportModel: Send + Sync {
    /// Number of spatial grid cells
    ///
    /// Used by the solver to allocate profiles
    fn points(&self) -> usize;

    /// Initial concentration profile at t = 0
    ///
    /// Length must equal `points()`; the solver rejects mismatches.
    fn initial_profile(&self) -> DVector<f64>;

    /// Cells of left and right padding the stencil requires
    ///
    /// Default is `(2, 1)`: a four-point window reaching two cells upstream
    /// and one cell downstream.
    fn stencil_span(&self) -> (usize, usize) {
        (2, 1)
    }

    /// Compute the next-step value of one cell
    ///
    /// # Arguments
    /// * `window` - `left + 1 + right` consecutive current-step values;
    ///   the cell being updated sits at index `left`
    ///
    /// # Returns
    /// The value the cell takes at the next time step
    fn update_cell(&self, window: &[f64]) -> f64;

    /// Name of the model (used for display and result metadata)
    fn name(&self) -> &str;

    /// Description of the model (optional)
    fn description(&self) -> Option<&str> {
        None
    }
}
