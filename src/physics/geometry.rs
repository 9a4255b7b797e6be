//! Channel geometry
//!
//! A rectangular channel discretised along its length into cells of width
//! `dx`. The cross-section (width × depth) is constant; together with `dx`
//! it gives the control volume used to turn an injected mass into an initial
//! concentration.

/// Rectangular channel geometry with a uniform 1D grid
///
/// # Units
///
/// All lengths in metres; concentrations derived from it are kg/m³.
///
/// # Example
///
/// ```rust
/// use tracer_rs::physics::ChannelGeometry;
///
/// let geometry = ChannelGeometry::new(100.0, 5.0, 1.0, 1.0);
/// assert_eq!(geometry.points(), 100);
/// assert_eq!(geometry.cell_volume(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelGeometry {
    /// Channel length L [m]
    length: f64,
    /// Channel width W [m]
    width: f64,
    /// Channel depth H [m]
    depth: f64,
    /// Spatial step dx [m]
    dx: f64,
}

impl ChannelGeometry {
    /// Create a channel geometry
    ///
    /// # Arguments
    ///
    /// * `length` - Channel length L \[m\]
    /// * `width` - Channel width W \[m\]
    /// * `depth` - Channel depth H \[m\]
    /// * `dx` - Spatial step \[m\]
    ///
    /// # Panics
    ///
    /// Panics when any dimension is not strictly positive or when `dx`
    /// exceeds the channel length.
    pub fn new(length: f64, width: f64, depth: f64, dx: f64) -> Self {
        assert!(length > 0.0, "Channel length must be positive, got {}", length);
        assert!(width > 0.0, "Channel width must be positive, got {}", width);
        assert!(depth > 0.0, "Channel depth must be positive, got {}", depth);
        assert!(dx > 0.0, "Spatial step must be positive, got {}", dx);
        assert!(
            dx <= length,
            "Spatial step {} larger than channel length {}",
            dx,
            length
        );

        Self {
            length,
            width,
            depth,
            dx,
        }
    }

    /// Channel length \[m\]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Channel width \[m\]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Channel depth \[m\]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Spatial step \[m\]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Number of grid cells: floor(L / dx)
    pub fn points(&self) -> usize {
        (self.length / self.dx) as usize
    }

    /// Control volume of one cell: dx · W · H \[m³\]
    ///
    /// An injected mass m becomes the initial concentration
    /// m / cell_volume in the injection cell.
    pub fn cell_volume(&self) -> f64 {
        self.dx * self.width * self.depth
    }
}

// =================================================================================================
// Tests
// =================================================================================================
