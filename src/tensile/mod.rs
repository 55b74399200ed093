//! Implements a uniaxial tensile test driver for models written in the logarithmic space

mod log_strain_model;
mod tensile_test_results;
pub use crate::tensile::log_strain_model::*;
pub use crate::tensile::tensile_test_results::*;
pub use crate::tensile::uniaxial_tensile_test::*;
