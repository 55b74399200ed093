//! Makes available common structures needed to use the logarithmic strain framework
//!
//! You may write `use logstrain::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, DeformationGradient, Dim, Setting, DEFAULT_TEST_DIR};
pub use crate::handler::{EigenCase, LogStrainHandler};
pub use crate::tensile::{LogStrainModel, TensileTestResults, UniaxialTensileTest};
