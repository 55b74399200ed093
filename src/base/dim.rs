use crate::StrError;
use russell_tensor::Mandel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index pairs of the components of a symmetric tensor (external buffer order)
const PAIRS: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (0, 1), (0, 2), (1, 2)];

/// Defines the space dimension of the kinematics
///
/// * `One` -- every tensor is diagonal (e.g., 1D axisymmetric rods or bars)
/// * `Two` -- in-plane 2×2 block plus a decoupled axial (out-of-plane) direction
/// * `Three` -- full 3×3 kinematics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dim {
    One,
    Two,
    Three,
}

impl Dim {
    /// Returns the dimension corresponding to `ndim` ∈ {1, 2, 3}
    pub fn new(ndim: usize) -> Result<Self, StrError> {
        match ndim {
            1 => Ok(Dim::One),
            2 => Ok(Dim::Two),
            3 => Ok(Dim::Three),
            _ => Err("ndim must be 1, 2, or 3"),
        }
    }

    /// Returns the space dimension as a number
    pub fn ndim(&self) -> usize {
        match self {
            Dim::One => 1,
            Dim::Two => 2,
            Dim::Three => 3,
        }
    }

    /// Returns the symmetric Mandel representation used for stresses and strains
    ///
    /// # Results
    ///
    /// * `1D`: [Mandel::Symmetric2D] (only the diagonal is used)
    /// * `2D`: [Mandel::Symmetric2D]
    /// * `3D`: [Mandel::Symmetric]
    pub fn mandel(&self) -> Mandel {
        match self {
            Dim::Three => Mandel::Symmetric,
            _ => Mandel::Symmetric2D,
        }
    }

    /// Returns the number of components of a symmetric tensor in the external buffer convention
    pub fn n_components(&self) -> usize {
        match self {
            Dim::One => 3,
            Dim::Two => 4,
            Dim::Three => 6,
        }
    }

    /// Returns the number of components of the deformation gradient
    pub fn n_gradient_components(&self) -> usize {
        match self {
            Dim::One => 3,
            Dim::Two => 5,
            Dim::Three => 9,
        }
    }

    /// Returns the index pairs (i,j) with i ≤ j of the independent components of a symmetric tensor
    ///
    /// The order is 11, 22, 33, 12, 13, 23 truncated to [Dim::n_components()].
    pub fn pairs(&self) -> &'static [(usize, usize)] {
        &PAIRS[..self.n_components()]
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.ndim())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
