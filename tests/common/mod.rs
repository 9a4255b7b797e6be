//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{ConstantField, ShiftRight};
pub use test_helpers::{
    assert_profiles_close,
    reference_model,
    reference_scenario,
    relative_error,
    total_mass,
};
