//! Implements the base structures: space dimension, setting, configuration, and deformation gradient

pub mod abaqus;
pub mod buffer;
mod config;
mod constants;
mod deformation_gradient;
mod dim;
mod setting;
mod testing;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::deformation_gradient::*;
pub use crate::base::dim::*;
pub use crate::base::setting::*;

#[allow(unused_imports)]
pub(crate) use crate::base::testing::*;
