use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects the configuration in which the stress and tangent conversions are expressed
///
/// * `Lagrangian` -- reference configuration: the Hencky strain is ½ ln C and the
///   physical stress is the second Piola-Kirchhoff stress
/// * `Eulerian` -- current configuration: the Hencky strain is ½ ln b and the
///   physical stress is the Cauchy stress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Setting {
    Lagrangian,
    Eulerian,
}

impl Setting {
    /// Returns an error unless the setting is Lagrangian
    pub fn check_lagrangian(&self) -> Result<(), StrError> {
        match self {
            Setting::Lagrangian => Ok(()),
            Setting::Eulerian => Err("the Lagrangian setting is required"),
        }
    }

    /// Returns an error unless the setting is Eulerian
    pub fn check_eulerian(&self) -> Result<(), StrError> {
        match self {
            Setting::Eulerian => Ok(()),
            Setting::Lagrangian => Err("the Eulerian setting is required"),
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Lagrangian => write!(f, "Lagrangian"),
            Setting::Eulerian => write!(f, "Eulerian"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
