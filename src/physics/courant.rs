//! Courant numbers for explicit transport schemes
//!
//! Two dimensionless numbers govern the stability of an explicit
//! advection-diffusion scheme on a fixed grid:
//!
//! ```text
//! Ca = U · dt / dx        (advection Courant number)
//! Cd = D · dt / dx²       (diffusion Courant number)
//! ```
//!
//! Both are derived once per simulation run from the velocity, the
//! diffusivity and the fixed space/time steps, and stay constant for the
//! duration of that run.

use std::fmt;

/// Advection and diffusion Courant numbers of one simulation run
///
/// # Stability
///
/// The stability queries are advisory only: the solver never refuses
/// unstable parameters. Running an unstable configuration is a legitimate
/// use of the crate (it demonstrates the oscillatory breakdown of the
/// explicit scheme), so instability surfaces in the output, not as an error.
///
/// # Example
///
/// ```rust
/// use tracer_rs::physics::CourantNumbers;
///
/// let courant = CourantNumbers::new(0.1, 0.01, 1.0, 1.0);
/// assert!((courant.advection() - 0.1).abs() < 1e-12);
/// assert!((courant.diffusion() - 0.01).abs() < 1e-12);
/// assert!(courant.is_stable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourantNumbers {
    /// Ca = U·dt/dx
    advection: f64,
    /// Cd = D·dt/dx²
    diffusion: f64,
}

impl CourantNumbers {
    /// Compute Courant numbers from transport parameters and grid steps
    ///
    /// # Arguments
    ///
    /// * `velocity` - Advection velocity U \[m/s\]
    /// * `diffusivity` - Diffusion coefficient D \[m²/s\]
    /// * `dx` - Spatial step \[m\]
    /// * `dt` - Time step \[s\]
    ///
    /// # Panics
    ///
    /// Panics when `dx` or `dt` is not strictly positive.
    pub fn new(velocity: f64, diffusivity: f64, dx: f64, dt: f64) -> Self {
        assert!(dx > 0.0, "Spatial step must be positive, got {}", dx);
        assert!(dt > 0.0, "Time step must be positive, got {}", dt);

        Self {
            advection: velocity * dt / dx,
            diffusion: diffusivity * dt / (dx * dx),
        }
    }

    /// Advection Courant number Ca
    pub fn advection(&self) -> f64 {
        self.advection
    }

    /// Diffusion Courant number Cd
    pub fn diffusion(&self) -> f64 {
        self.diffusion
    }

    /// CFL criterion for the advective part: Ca ≤ 1
    pub fn is_advection_stable(&self) -> bool {
        self.advection.abs() <= 1.0
    }

    /// Explicit-diffusion criterion: Cd ≤ 1/2
    pub fn is_diffusion_stable(&self) -> bool {
        self.diffusion <= 0.5
    }

    /// Both criteria satisfied
    pub fn is_stable(&self) -> bool {
        self.is_advection_stable() && self.is_diffusion_stable()
    }
}

impl fmt::Display for CourantNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ca = {}, Cd = {}", self.advection, self.diffusion)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
