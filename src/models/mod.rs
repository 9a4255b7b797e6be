//! Transport models
//!
//! All models implement the [`TransportModel`](crate::physics::TransportModel)
//! trait. The solver calls `update_cell` for every interior cell of every
//! time step; models are responsible for the physics (the stencil), the
//! solver for the marching.
//!
//! # Available Models
//!
//! ## [`AdvectionDiffusion`]: QUICKEST tracer transport
//!
//! A passive tracer advected at velocity U and diffused with coefficient D,
//! stepped with the explicit fourth-order QUICKEST stencil. Use this model
//! to study pulse spreading, travel times and the stability limits of the
//! explicit scheme.
//!
//! # Injection
//!
//! Models use [`InitialInjection`] to define how the tracer is distributed
//! over the grid at t = 0 (a pulse into one cell for the classic tracer
//! experiment).

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod advection_diffusion;
pub mod injection;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use advection_diffusion::{AdvectionDiffusion, StencilWeights};
pub use injection::InitialInjection;
