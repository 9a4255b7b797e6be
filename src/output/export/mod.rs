//! Data export functionality
//!
//! Writes simulation trajectories to plain-text formats for analysis in
//! external tools.
//!
//! # Formats
//!
//! - **CSV**: comma-separated values with optional metadata header comments

pub mod csv;

// Re-exports for convenience
pub use csv::{
    export_history_csv, export_mass_history_csv, export_profile_csv, CsvConfig, CsvMetadata,
};
