//! Initial injection profiles for tracer transport
//!
//! Defines how the tracer is distributed over the grid at t = 0.
//!
//! # Use Case
//!
//! A tracer study starts by releasing a known mass into the channel:
//! - A pulse release puts the whole mass into one grid cell
//! - A uniform background fills every cell with the same concentration
//! - Anything else can be expressed as a custom per-cell function
//!
//! # Example
//!
//! ```rust
//! use tracer_rs::models::InitialInjection;
//! use tracer_rs::physics::ChannelGeometry;
//!
//! let geometry = ChannelGeometry::new(100.0, 5.0, 1.0, 1.0);
//! // 1 kg released into cell 10
//! let injection = InitialInjection::pulse(10, 1.0);
//! let profile = injection.seed(&geometry);
//!
//! assert_eq!(profile.len(), 100);
//! assert!((profile[10] - 0.2).abs() < 1e-12); // 1 / (1·5·1)
//! assert_eq!(profile[0], 0.0);
//! ```

use crate::physics::ChannelGeometry;
use nalgebra::DVector;
use std::sync::Arc;

/// Initial spatial injection profile
///
/// Defines C(x, t=0) on the grid.
///
/// # Types
///
/// - **Pulse**: whole mass released into a single cell
/// - **Uniform**: constant concentration in every cell
/// - **Custom**: user-defined per-cell profile
/// - **None**: empty channel (all zeros)
pub enum InitialInjection {
    /// Pulse release of a mass into one cell
    ///
    /// # Parameters
    ///
    /// - `cell` : Index of the injection cell
    /// - `amount` : Injected mass \[kg\]
    ///
    /// # Physics
    ///
    /// The cell receives `amount / cell_volume`, i.e. the mass divided by
    /// the control volume dx·W·H. Every other cell stays at zero.
    Pulse { cell: usize, amount: f64 },

    /// Uniform background concentration
    ///
    /// # Parameters
    ///
    /// - `concentration` : Concentration in every cell \[kg/m³\]
    Uniform { concentration: f64 },

    /// Custom profile from a per-cell function
    ///
    /// # Example
    ///
    /// ```rust
    /// use tracer_rs::models::InitialInjection;
    /// let injection = InitialInjection::custom(|cell| {
    ///     if cell < 10 { 0.5 } else { 0.0 }
    /// });
    /// ```
    Custom(Arc<dyn Fn(usize) -> f64 + Send + Sync>),

    /// No injection (empty channel)
    None,
}

// ==================== Manual Clone Implementation ====================

impl Clone for InitialInjection {
    fn clone(&self) -> Self {
        match self {
            Self::Pulse { cell, amount } => Self::Pulse {
                cell: *cell,
                amount: *amount,
            },
            Self::Uniform { concentration } => Self::Uniform {
                concentration: *concentration,
            },
            Self::Custom(f) => Self::Custom(Arc::clone(f)),
            Self::None => Self::None,
        }
    }
}

// ==================== Manual Debug Implementation ====================

impl std::fmt::Debug for InitialInjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pulse { cell, amount } => f
                .debug_struct("Pulse")
                .field("cell", cell)
                .field("amount", amount)
                .finish(),
            Self::Uniform { concentration } => f
                .debug_struct("Uniform")
                .field("concentration", concentration)
                .finish(),
            Self::Custom(_) => f
                .debug_struct("Custom")
                .field("function", &"<user-defined>")
                .finish(),
            Self::None => f.debug_struct("None").finish(),
        }
    }
}

// ==================== Implementation ====================

impl InitialInjection {
    /// Create a pulse release
    ///
    /// # Arguments
    ///
    /// * `cell` - Index of the injection cell
    /// * `amount` - Injected mass \[kg\]
    pub fn pulse(cell: usize, amount: f64) -> Self {
        assert!(amount >= 0.0, "Injected mass must be non-negative, got {}", amount);
        Self::Pulse { cell, amount }
    }

    /// Create a uniform background
    ///
    /// # Arguments
    ///
    /// * `concentration` - Concentration in every cell \[kg/m³\]
    pub fn uniform(concentration: f64) -> Self {
        Self::Uniform { concentration }
    }

    /// Create a custom injection from a per-cell function
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(usize) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Create a "no injection" profile (empty channel)
    pub fn none() -> Self {
        Self::None
    }

    /// Build the initial concentration profile for a geometry
    ///
    /// # Panics
    ///
    /// Panics when a pulse cell lies outside the grid.
    pub fn seed(&self, geometry: &ChannelGeometry) -> DVector<f64> {
        let n = geometry.points();

        match self {
            Self::Pulse { cell, amount } => {
                assert!(
                    *cell < n,
                    "Injection cell {} outside grid of {} cells",
                    cell,
                    n
                );
                let mut profile = DVector::zeros(n);
                profile[*cell] = amount / geometry.cell_volume();
                profile
            }

            Self::Uniform { concentration } => DVector::from_element(n, *concentration),

            Self::Custom(f) => DVector::from_fn(n, |cell, _| f(cell)),

            Self::None => DVector::zeros(n),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
