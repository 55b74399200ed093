//! Implements the flat-buffer overloads of the conversions
//!
//! The buffers follow the scaled convention of [crate::base::buffer]. Each
//! overload imports the components, calls the tensor-typed conversion, and
//! exports the result.

use super::LogStrainHandler;
use crate::base::buffer::{tensor2_from_buffer, tensor2_to_buffer, tensor4_from_buffer, tensor4_to_buffer};
use crate::StrError;
use russell_tensor::{Tensor2, Tensor4};

impl LogStrainHandler {
    /// Writes the Hencky strain into a buffer
    pub fn get_hencky_logarithmic_strain_buffer(&self, strain: &mut [f64]) -> Result<(), StrError> {
        tensor2_to_buffer(strain, self.dim(), &self.get_hencky_logarithmic_strain())
    }

    /// Writes the second Piola-Kirchhoff stress into `ss` given the dual stress in `tt`
    pub fn convert_to_second_piola_kirchhoff_stress_buffer(&self, ss: &mut [f64], tt: &[f64]) -> Result<(), StrError> {
        self.stress_buffer(ss, tt, |h, t| h.convert_to_second_piola_kirchhoff_stress(t))
    }

    /// Writes the dual stress into `tt` given the second Piola-Kirchhoff stress in `ss`
    pub fn convert_from_second_piola_kirchhoff_stress_buffer(
        &self,
        tt: &mut [f64],
        ss: &[f64],
    ) -> Result<(), StrError> {
        self.stress_buffer(tt, ss, |h, s| h.convert_from_second_piola_kirchhoff_stress(s))
    }

    /// Writes the Cauchy stress into `sig` given the dual stress in `tt`
    pub fn convert_to_cauchy_stress_buffer(&self, sig: &mut [f64], tt: &[f64]) -> Result<(), StrError> {
        self.stress_buffer(sig, tt, |h, t| h.convert_to_cauchy_stress(t))
    }

    /// Writes the dual stress into `tt` given the Cauchy stress in `sig`
    pub fn convert_from_cauchy_stress_buffer(&self, tt: &mut [f64], sig: &[f64]) -> Result<(), StrError> {
        self.stress_buffer(tt, sig, |h, s| h.convert_from_cauchy_stress(s))
    }

    /// Overwrites `kk` (holding ∂T/∂E on input) with the material tangent moduli
    pub fn convert_to_material_tangent_moduli_buffer(&self, kk: &mut [f64], tt: &[f64]) -> Result<(), StrError> {
        self.tangent_buffer(kk, tt, |h, ks, t| h.convert_to_material_tangent_moduli(ks, t))
    }

    /// Overwrites `kk` (holding ∂T/∂ε on input) with the spatial tangent moduli
    pub fn convert_to_spatial_tangent_moduli_buffer(&self, kk: &mut [f64], tt: &[f64]) -> Result<(), StrError> {
        self.tangent_buffer(kk, tt, |h, ks, t| h.convert_to_spatial_tangent_moduli(ks, t))
    }

    /// Overwrites `kk` (holding ∂T/∂ε on input) with the Truesdell-rate moduli of the Cauchy stress
    pub fn convert_to_cauchy_stress_truesdell_rate_tangent_moduli_buffer(
        &self,
        kk: &mut [f64],
        tt: &[f64],
    ) -> Result<(), StrError> {
        self.tangent_buffer(kk, tt, |h, ks, t| {
            h.convert_to_cauchy_stress_truesdell_rate_tangent_moduli(ks, t)
        })
    }

    /// Overwrites `kk` (holding ∂T/∂ε on input) with the Jaumann-rate moduli
    pub fn convert_to_jaumann_rate_tangent_moduli_buffer(&self, kk: &mut [f64], tt: &[f64]) -> Result<(), StrError> {
        self.tangent_buffer(kk, tt, |h, ks, t| h.convert_to_jaumann_rate_tangent_moduli(ks, t))
    }

    fn stress_buffer<F>(&self, output: &mut [f64], input: &[f64], convert: F) -> Result<(), StrError>
    where
        F: Fn(&Self, &Tensor2) -> Result<Tensor2, StrError>,
    {
        let dim = self.dim();
        let res = convert(self, &tensor2_from_buffer(dim, input)?)?;
        tensor2_to_buffer(output, dim, &res)
    }

    fn tangent_buffer<F>(&self, kk: &mut [f64], tt: &[f64], convert: F) -> Result<(), StrError>
    where
        F: Fn(&Self, &Tensor4, &Tensor2) -> Result<Tensor4, StrError>,
    {
        let dim = self.dim();
        let ks = tensor4_from_buffer(dim, kk)?;
        let res = convert(self, &ks, &tensor2_from_buffer(dim, tt)?)?;
        tensor4_to_buffer(kk, dim, &res)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
