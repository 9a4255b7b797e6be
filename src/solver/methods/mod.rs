//! Marching methods
//!
//! Concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! The separation between the abstract solver interface (`solver::traits`)
//! and the concrete methods here follows the Open-Closed Principle: new
//! marching schemes are added without touching the stable trait.
//!
//! # Available Methods
//!
//! - **[`ExplicitMarch`]**: explicit row-by-row march for stencil models.
//!   One `update_cell` per interior cell per step; the full space-time
//!   trajectory is stored. Stability is a property of the model's stencil
//!   weights, not of the march; unstable configurations run to completion
//!   unless the configuration is strict.

pub mod explicit;

// Re-exports for convenience
pub use explicit::ExplicitMarch;
