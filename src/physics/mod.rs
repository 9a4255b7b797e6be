//! Physical definitions for tracer transport
//!
//! This module holds everything a model needs to describe WHAT is being
//! simulated, independent of how the solver marches it:
//!
//! - [`TransportModel`]: trait all finite-difference transport models implement
//! - [`ChannelGeometry`]: the discretised rectangular channel
//! - [`CourantNumbers`]: the per-run dimensionless stability numbers

mod courant;
mod geometry;
pub mod traits;

pub use courant::CourantNumbers;
pub use geometry::ChannelGeometry;
pub use traits::TransportModel;
