use crate::StrError;
use russell_tensor::{Tensor2, Tensor4};

/// Specifies a small-strain constitutive model written in the logarithmic space
///
/// The model receives the (total) Hencky strain and returns the dual stress T and
/// the tangent moduli ∂T/∂E. The finite-strain quantities are then obtained with
/// [crate::handler::LogStrainHandler].
pub trait LogStrainModel {
    /// Computes the dual stress and the tangent moduli given the Hencky strain
    ///
    /// # Output
    ///
    /// * `stress` -- dual stress T
    /// * `modulus` -- tangent moduli ∂T/∂E
    ///
    /// # Input
    ///
    /// * `strain` -- Hencky strain E
    fn calc_stress(&mut self, stress: &mut Tensor2, modulus: &mut Tensor4, strain: &Tensor2) -> Result<(), StrError>;
}
