//! Output and export
//!
//! Everything that leaves the crate as a file lives here. The solvers hand
//! over a [`SimulationResult`](crate::solver::SimulationResult); this module
//! turns it into something a spreadsheet or a plotting script can read.
//!
//! # Module Organization
//!
//! - **`export`**: CSV writers for profiles, breakthrough curves and
//!   mass-conservation traces

pub mod export;

pub use export::{
    export_history_csv, export_mass_history_csv, export_profile_csv, CsvConfig, CsvMetadata,
};
