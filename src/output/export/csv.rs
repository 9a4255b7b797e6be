//! CSV export functionality for simulation results
//!
//! Exports trajectories to CSV (Comma-Separated Values) format, compatible
//! with Excel, Python pandas, MATLAB and most data analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: export with `&[f64]` slices
//! - **Metadata support**: optional header comments with run parameters
//! - **Customizable**: delimiter, precision, format options
//! - **Validation**: checks for NaN, empty data, mismatched lengths
//!
//! # Quick Examples
//!
//! ## Breakthrough curve (time series at one cell)
//!
//! ```rust,ignore
//! use tracer_rs::output::export::export_history_csv;
//!
//! let time = vec![0.0, 1.0, 2.0, 3.0];
//! let conc = vec![0.0, 0.5, 1.0, 0.5];
//!
//! export_history_csv(&time, &conc, "breakthrough.csv", None)?;
//! ```
//!
//! **Output** (`breakthrough.csv`):
//! ```csv
//! Time (s),Concentration (kg/m3)
//! 0.000000,0.000000
//! 1.000000,0.500000
//! 2.000000,1.000000
//! 3.000000,0.500000
//! ```
//!
//! ## Spatial profile with metadata
//!
//! ```rust,ignore
//! use tracer_rs::output::export::{export_profile_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_simulation(
//!     "QUICKEST advection-diffusion",
//!     "Explicit march",
//!     1.0,
//!     1000,
//! );
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_profile_csv(&profile, "profile_500.csv", Some(&config))?;
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use tracer_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::default()
///     .delimiter(';')
///     .precision(10);
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header for the time column (default: "Time (s)")
    pub time_header: String,

    /// Header for the cell-index column (default: "Cell")
    pub cell_header: String,

    /// Header for the concentration column (default: "Concentration (kg/m3)")
    pub concentration_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            time_header: "Time (s)".to_string(),
            cell_header: "Cell".to_string(),
            concentration_header: "Concentration (kg/m3)".to_string(),
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are written to the header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Model name (e.g., "QUICKEST advection-diffusion")
    pub model_name: Option<String>,

    /// Solver name (e.g., "Explicit march")
    pub solver_name: Option<String>,

    /// Time step dt (seconds)
    pub dt: Option<f64>,

    /// Number of time steps
    pub time_steps: Option<usize>,

    /// Advection velocity U (m/s)
    pub velocity: Option<f64>,

    /// Diffusion coefficient D (m²/s)
    pub diffusivity: Option<f64>,

    /// Advection Courant number Ca
    pub courant_advection: Option<f64>,

    /// Diffusion Courant number Cd
    pub courant_diffusion: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from the run parameters
    pub fn from_simulation(model: &str, solver: &str, dt: f64, time_steps: usize) -> Self {
        Self {
            model_name: Some(model.to_string()),
            solver_name: Some(solver.to_string()),
            dt: Some(dt),
            time_steps: Some(time_steps),
            ..Default::default()
        }
    }

    /// Attach the transport parameters
    pub fn with_transport(mut self, velocity: f64, diffusivity: f64) -> Self {
        self.velocity = Some(velocity);
        self.diffusivity = Some(diffusivity);
        self
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Tracer Transport Simulation Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    // Model and solver
    if let Some(model) = &metadata.model_name {
        writeln!(file, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(file, "# Solver: {}", solver)?;
    }

    // Run parameters
    if let Some(dt) = metadata.dt {
        writeln!(file, "# Time Step: {} s", dt)?;
    }
    if let Some(time_steps) = metadata.time_steps {
        writeln!(file, "# Time Steps: {}", time_steps)?;
    }

    // Transport parameters
    if let Some(u) = metadata.velocity {
        writeln!(file, "# Velocity: {} m/s", u)?;
    }
    if let Some(d) = metadata.diffusivity {
        writeln!(file, "# Diffusivity: {} m2/s", d)?;
    }
    if let Some(ca) = metadata.courant_advection {
        writeln!(file, "# Courant (advection): {}", ca)?;
    }
    if let Some(cd) = metadata.courant_diffusion {
        writeln!(file, "# Courant (diffusion): {}", cd)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Shared validation for a pair of equally long, finite series
fn validate_series(
    first: &[f64],
    first_name: &str,
    second: &[f64],
    second_name: &str,
) -> Result<(), Box<dyn Error>> {
    if first.is_empty() || second.is_empty() {
        return Err(format!(
            "Empty data: {} and {} series must not be empty",
            first_name, second_name
        )
        .into());
    }

    if first.len() != second.len() {
        return Err(format!(
            "Data length mismatch: {} {} values versus {} {} values",
            first.len(),
            first_name,
            second.len(),
            second_name
        )
        .into());
    }

    if first.iter().any(|v| !v.is_finite()) {
        return Err(format!("Invalid data: NaN or Inf detected in {} series", first_name).into());
    }

    if second.iter().any(|v| !v.is_finite()) {
        return Err(format!("Invalid data: NaN or Inf detected in {} series", second_name).into());
    }

    Ok(())
}

/// Open the output file and write the optional metadata block
fn open_with_header(output_path: &str, config: &CsvConfig) -> Result<File, Box<dyn Error>> {
    let mut file = File::create(output_path)?;

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    Ok(file)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a time series at one grid cell (breakthrough curve) to CSV
///
/// # Arguments
///
/// * `time_points` - Time values (seconds)
/// * `concentrations` - Concentration values (kg/m³)
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Empty data
/// - Mismatched lengths
/// - NaN or Inf values
/// - File creation errors
pub fn export_history_csv(
    time_points: &[f64],
    concentrations: &[f64],
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    validate_series(time_points, "time", concentrations, "concentration")?;

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    let mut file = open_with_header(output_path, config)?;

    writeln!(
        file,
        "{}{}{}",
        config.time_header, config.delimiter, config.concentration_header
    )?;

    for (time, concentration) in time_points.iter().zip(concentrations.iter()) {
        writeln!(
            file,
            "{}{}{}",
            format_number(*time, config),
            config.delimiter,
            format_number(*concentration, config)
        )?;
    }

    Ok(())
}

/// Export a spatial concentration profile (one time step) to CSV
///
/// The first column is the cell index, the second the concentration.
///
/// # Arguments
///
/// * `profile` - Concentration per grid cell (kg/m³)
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration
pub fn export_profile_csv(
    profile: &[f64],
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    if profile.is_empty() {
        return Err("Empty data: profile must not be empty".into());
    }

    if profile.iter().any(|v| !v.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in profile".into());
    }

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    let mut file = open_with_header(output_path, config)?;

    writeln!(
        file,
        "{}{}{}",
        config.cell_header, config.delimiter, config.concentration_header
    )?;

    for (cell, concentration) in profile.iter().enumerate() {
        writeln!(
            file,
            "{}{}{}",
            cell,
            config.delimiter,
            format_number(*concentration, config)
        )?;
    }

    Ok(())
}

/// Export a mass-conservation trace to CSV
///
/// Writes the per-step total mass alongside the time axis; the flatness of
/// the second column is the mass-conservation check of a stable run.
///
/// # Arguments
///
/// * `time_points` - Time values (seconds)
/// * `total_mass` - Per-step summed concentration
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration
pub fn export_mass_history_csv(
    time_points: &[f64],
    total_mass: &[f64],
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    validate_series(time_points, "time", total_mass, "total mass")?;

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    let mut file = open_with_header(output_path, config)?;

    writeln!(
        file,
        "{}{}Total mass (summed concentration)",
        config.time_header, config.delimiter
    )?;

    for (time, mass) in time_points.iter().zip(total_mass.iter()) {
        writeln!(
            file,
            "{}{}{}",
            format_number(*time, config),
            config.delimiter,
            format_number(*mass, config)
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
