//! QUICKEST advection-diffusion model
//!
//! Implements the explicit fourth-order-accurate QUICKEST scheme (Leonard's
//! quadratic upstream interpolation with estimated streaming terms) for 1D
//! advection-diffusion of a passive tracer:
//!
//! ```text
//! ∂c/∂t + U ∂c/∂x = D ∂²c/∂x²
//! ```
//!
//! The scheme combines four neighbouring current-step values with fixed
//! polynomial weights in the advection Courant number `Ca` and the diffusion
//! Courant number `Cd`:
//!
//! ```text
//! c[t+1,x] = c[t,x] + w_dw·c[t,x+1] − w_c·c[t,x] + w_uw·c[t,x-1] + w_fu·c[t,x-2]
//!
//! w_dw = Cd·(1 − Ca)  − Ca/6·(Ca² − 3Ca + 2)
//! w_c  = Cd·(2 − 3Ca) − Ca/2·(Ca² − 2Ca − 1)
//! w_uw = Cd·(1 − 3Ca) − Ca/2·(Ca² − Ca − 2)
//! w_fu = Cd·Ca        + Ca/6·(Ca² − 1)
//! ```
//!
//! The window reaches two cells upstream and one cell downstream, so the two
//! leftmost cells and the last cell are never updated after initialisation
//! and keep their seeded value for the whole run. The second-to-last cell IS
//! updated while the last one is not; this asymmetry is preserved as
//! observed behaviour of the scheme.
//!
//! # Stability
//!
//! The weights are evaluated for whatever `Ca`, `Cd` the caller supplies.
//! Out-of-range Courant numbers produce oscillatory or divergent output
//! rather than an error; see [`CourantNumbers`] for the advisory criteria.
//!
//! # Example
//!
//! ```rust
//! use tracer_rs::models::{AdvectionDiffusion, InitialInjection};
//! use tracer_rs::physics::{ChannelGeometry, TransportModel};
//!
//! let geometry = ChannelGeometry::new(100.0, 5.0, 1.0, 1.0);
//! let injection = InitialInjection::pulse(10, 1.0);
//! let model = AdvectionDiffusion::new(geometry, 0.1, 0.01, 1.0, injection);
//!
//! assert_eq!(model.points(), 100);
//! assert!(model.courant().is_stable());
//! ```

use crate::models::InitialInjection;
use crate::physics::{ChannelGeometry, CourantNumbers, TransportModel};
use nalgebra::DVector;

// =================================================================================================
// Stencil Weights
// =================================================================================================

/// The four QUICKEST stencil weights of one run
///
/// Computed once per simulation from the Courant numbers; constant for the
/// duration of the run (dx, dt, U and D are all fixed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StencilWeights {
    /// Weight of c\[x+1\] (downstream neighbour)
    pub downwind: f64,
    /// Weight of c\[x\] (subtracted from the centre)
    pub center: f64,
    /// Weight of c\[x-1\] (upstream neighbour)
    pub upwind: f64,
    /// Weight of c\[x-2\] (far upstream neighbour)
    pub far_upwind: f64,
}

impl StencilWeights {
    /// Evaluate the weight polynomials for a pair of Courant numbers
    pub fn from_courant(courant: &CourantNumbers) -> Self {
        let ca = courant.advection();
        let cd = courant.diffusion();
        let ca2 = ca * ca;

        Self {
            downwind: cd * (1.0 - ca) - ca / 6.0 * (ca2 - 3.0 * ca + 2.0),
            center: cd * (2.0 - 3.0 * ca) - ca / 2.0 * (ca2 - 2.0 * ca - 1.0),
            upwind: cd * (1.0 - 3.0 * ca) - ca / 2.0 * (ca2 - ca - 2.0),
            far_upwind: cd * ca + ca / 6.0 * (ca2 - 1.0),
        }
    }

    /// Apply the stencil to a four-point window
    ///
    /// Arguments are the current-step values at x-2, x-1, x, x+1.
    #[inline]
    pub fn apply(&self, far_upwind: f64, upwind: f64, center: f64, downwind: f64) -> f64 {
        center + self.downwind * downwind - self.center * center
            + self.upwind * upwind
            + self.far_upwind * far_upwind
    }
}

// =================================================================================================
// Advection-Diffusion Model
// =================================================================================================

/// QUICKEST advection-diffusion transport model
///
/// Owns the channel geometry, the transport parameters and the initial
/// injection; precomputes the Courant numbers and stencil weights.
#[derive(Debug, Clone)]
pub struct AdvectionDiffusion {
    // ==================== Physics Parameters ====================
    /// Channel geometry and grid
    geometry: ChannelGeometry,
    /// Advection velocity U [m/s]
    velocity: f64,
    /// Diffusion coefficient D [m²/s]
    diffusivity: f64,
    /// Time step dt [s]
    dt: f64,
    /// Precomputed Courant numbers
    courant: CourantNumbers,
    /// Precomputed stencil weights
    weights: StencilWeights,

    // ==================== Initial Condition ====================
    /// Spatial injection profile C(x, t=0)
    injection: InitialInjection,
}

impl AdvectionDiffusion {
    /// Create a new model
    ///
    /// # Arguments
    ///
    /// * `geometry` - Channel geometry and grid
    /// * `velocity` - Advection velocity U \[m/s\]
    /// * `diffusivity` - Diffusion coefficient D \[m²/s\]
    /// * `dt` - Time step \[s\]; must match the solver configuration
    /// * `injection` - Initial spatial injection
    ///
    /// # Panics
    ///
    /// Panics when `dt` is not strictly positive or when the grid has fewer
    /// than four cells (the stencil window would not fit).
    pub fn new(
        geometry: ChannelGeometry,
        velocity: f64,
        diffusivity: f64,
        dt: f64,
        injection: InitialInjection,
    ) -> Self {
        assert!(dt > 0.0, "Time step must be positive, got {}", dt);
        assert!(
            geometry.points() >= 4,
            "Need at least 4 grid cells for the QUICKEST stencil, got {}",
            geometry.points()
        );

        let courant = CourantNumbers::new(velocity, diffusivity, geometry.dx(), dt);
        let weights = StencilWeights::from_courant(&courant);

        Self {
            geometry,
            velocity,
            diffusivity,
            dt,
            courant,
            weights,
            injection,
        }
    }

    /// Channel geometry
    pub fn geometry(&self) -> &ChannelGeometry {
        &self.geometry
    }

    /// Advection velocity \[m/s\]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Diffusion coefficient \[m²/s\]
    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    /// Time step \[s\]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Courant numbers of this run
    pub fn courant(&self) -> &CourantNumbers {
        &self.courant
    }

    /// Stencil weights of this run
    pub fn weights(&self) -> &StencilWeights {
        &self.weights
    }

    /// Injection profile
    pub fn injection(&self) -> &InitialInjection {
        &self.injection
    }
}

impl TransportModel for AdvectionDiffusion {
    fn points(&self) -> usize {
        self.geometry.points()
    }

    fn initial_profile(&self) -> DVector<f64> {
        self.injection.seed(&self.geometry)
    }

    fn update_cell(&self, window: &[f64]) -> f64 {
        debug_assert_eq!(window.len(), 4, "QUICKEST expects a four-point window");
        self.weights.apply(window[0], window[1], window[2], window[3])
    }

    fn name(&self) -> &str {
        "QUICKEST advection-diffusion"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Explicit fourth-order advection-diffusion stencil with a \
             four-point upstream-biased window.",
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
