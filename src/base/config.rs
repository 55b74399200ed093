use super::{Setting, DEFAULT_TOL_EQUAL_EIGENVALUES};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the options used to build a logarithmic strain handler
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Configuration in which stresses and tangent moduli are converted
    pub setting: Setting,

    /// Computes the axial (out-of-plane) component of the Hencky strain in 2D
    ///
    /// This component is unknown in plane-stress analyses; if false, the axial
    /// eigenvalue of C is taken as 1.0 and the axial Hencky strain is zero.
    pub compute_axial: bool,

    /// Relative tolerance used to decide that two eigenvalues of C are equal
    pub tol_equal_eigenvalues: f64,
}

impl Config {
    /// Allocates a new instance
    ///
    /// # Default values
    ///
    /// * `compute_axial = true`
    /// * `tol_equal_eigenvalues = 1e-14`
    pub fn new(setting: Setting) -> Self {
        Config {
            setting,
            compute_axial: true,
            tol_equal_eigenvalues: DEFAULT_TOL_EQUAL_EIGENVALUES,
        }
    }

    /// Sets the configuration (Lagrangian or Eulerian)
    pub fn set_setting(&mut self, setting: Setting) -> Result<&mut Self, StrError> {
        self.setting = setting;
        Ok(self)
    }

    /// Sets the option to compute the axial component of the Hencky strain (2D only)
    pub fn set_compute_axial(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.compute_axial = flag;
        Ok(self)
    }

    /// Sets the relative tolerance used to decide that two eigenvalues are equal
    pub fn set_tol_equal_eigenvalues(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 || value >= 1.0 {
            return Err("tol_equal_eigenvalues must be in (0.0, 1.0)");
        }
        self.tol_equal_eigenvalues = value;
        Ok(self)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "setting = {:?}\n", self.setting).unwrap();
        write!(f, "compute_axial = {:?}\n", self.compute_axial).unwrap();
        write!(f, "tol_equal_eigenvalues = {:?}\n", self.tol_equal_eigenvalues).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
