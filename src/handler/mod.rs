//! Implements the logarithmic strain handler and its auxiliary structures

mod buffers;
mod divided;
mod eigen;
mod log_strain_handler;
mod projectors;
mod tangent;
pub(crate) use crate::handler::divided::*;
pub use crate::handler::eigen::*;
pub use crate::handler::log_strain_handler::*;
pub(crate) use crate::handler::projectors::*;
