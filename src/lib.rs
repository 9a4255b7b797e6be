//! tracer-rs: Tracer Transport Simulation Framework
//!
//! A framework for simulating passive tracer transport in open channels
//! using explicit finite-difference methods. Built with Rust for
//! performance and safety.
//!
//! # Architecture
//!
//! tracer-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Transport models define the stencil arithmetic (what to solve)
//!    - Numerical solvers provide the time march (how to solve)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for easy extension
//!    - Stable API (v0.1.0+)
//!
//! # Quick Start
//!
//! ```rust
//! use tracer_rs::models::{AdvectionDiffusion, InitialInjection};
//! use tracer_rs::physics::ChannelGeometry;
//! use tracer_rs::solver::{ExplicitMarch, Scenario, Solver, SolverConfiguration};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Describe the channel and the tracer release
//! let geometry = ChannelGeometry::new(100.0, 5.0, 1.0, 1.0);
//! let model = AdvectionDiffusion::new(
//!     geometry,
//!     0.1,  // velocity U (m/s)
//!     0.01, // diffusivity D (m²/s)
//!     1.0,  // time step dt (s)
//!     InitialInjection::pulse(10, 1.0),
//! );
//! let scenario = Scenario::new(Box::new(model));
//!
//! // 2. Configure the march
//! let config = SolverConfiguration::fixed_step(1.0, 1000);
//!
//! // 3. Run simulation
//! let solver = ExplicitMarch::new();
//! let result = solver.solve(&scenario, &config)?;
//!
//! // 4. Access results
//! println!("Trajectory length: {}", result.len());
//! let breakthrough = result.history_at(90).ok_or("cell out of range")?;
//! println!("Peak at cell 90: {:?}", breakthrough.iter().cloned().fold(0.0_f64, f64::max));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Geometry, Courant numbers, the transport-model trait
//! - [`models`]: Concrete transport models (QUICKEST advection-diffusion)
//! - [`solver`]: Numerical solvers (methods)
//! - [`output`]: Result export (CSV)

// Core modules
pub mod physics;

pub mod models;
pub mod output;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use tracer_rs::prelude::*;
    //! ```
    pub use crate::models::{AdvectionDiffusion,
                            InitialInjection,
                            StencilWeights};
    pub use crate::physics::{ChannelGeometry,
                             CourantNumbers,
                             TransportModel};
    pub use crate::solver::{ExplicitMarch,
                            Scenario,
                            SimulationResult,
                            Solver,
                            SolverConfiguration};
}
