//! Converts tensors from/to flat buffers in the Abaqus/Standard conventions
//!
//! The components are ordered as 11, 22, 33, 12, 13, 23 (truncated to the
//! number of components of the space dimension). Strains use the engineering
//! shear components (γij = 2 εij), whereas stresses use the tensorial shear
//! components (σij). Tangent operators are stored column-major (Fortran) with
//! `D[k + l n] = ∂σₖ/∂γₗ`, which coincides with the tensor component `A_ijkl`.

use super::buffer::{check_len2, check_len4, check_tensor2, check_tensor4};
use super::Dim;
use crate::StrError;
use russell_tensor::{Tensor2, Tensor4};

/// Allocates a stress tensor from a buffer with tensorial shear components
pub fn stress_from_abaqus(dim: Dim, buffer: &[f64]) -> Result<Tensor2, StrError> {
    check_len2(dim, buffer)?;
    let mut tt = Tensor2::new(dim.mandel());
    for (k, (i, j)) in dim.pairs().iter().enumerate() {
        tt.sym_set(*i, *j, buffer[k]);
    }
    Ok(tt)
}

/// Writes a stress tensor into a buffer with tensorial shear components
pub fn stress_to_abaqus(buffer: &mut [f64], dim: Dim, tt: &Tensor2) -> Result<(), StrError> {
    check_len2(dim, buffer)?;
    check_tensor2(dim, tt)?;
    for (k, (i, j)) in dim.pairs().iter().enumerate() {
        buffer[k] = tt.get(*i, *j);
    }
    Ok(())
}

/// Allocates a strain tensor from a buffer with engineering shear components
pub fn strain_from_abaqus(dim: Dim, buffer: &[f64]) -> Result<Tensor2, StrError> {
    check_len2(dim, buffer)?;
    let mut tt = Tensor2::new(dim.mandel());
    for (k, (i, j)) in dim.pairs().iter().enumerate() {
        let value = if i == j { buffer[k] } else { buffer[k] / 2.0 };
        tt.sym_set(*i, *j, value);
    }
    Ok(tt)
}

/// Writes a strain tensor into a buffer with engineering shear components
pub fn strain_to_abaqus(buffer: &mut [f64], dim: Dim, tt: &Tensor2) -> Result<(), StrError> {
    check_len2(dim, buffer)?;
    check_tensor2(dim, tt)?;
    for (k, (i, j)) in dim.pairs().iter().enumerate() {
        let value = tt.get(*i, *j);
        buffer[k] = if i == j { value } else { 2.0 * value };
    }
    Ok(())
}

/// Allocates a tangent operator from a column-major n×n buffer
pub fn tangent_from_abaqus(dim: Dim, buffer: &[f64]) -> Result<Tensor4, StrError> {
    check_len4(dim, buffer)?;
    let n = dim.n_components();
    let pairs = dim.pairs();
    let mut dd = Tensor4::new(dim.mandel());
    for (r, (i, j)) in pairs.iter().enumerate() {
        for (c, (k, l)) in pairs.iter().enumerate() {
            dd.sym_set(*i, *j, *k, *l, buffer[r + c * n]);
        }
    }
    Ok(dd)
}

/// Writes a tangent operator into a column-major n×n buffer
pub fn tangent_to_abaqus(buffer: &mut [f64], dim: Dim, dd: &Tensor4) -> Result<(), StrError> {
    check_len4(dim, buffer)?;
    let n = dim.n_components();
    check_tensor4(dim, dd)?;
    let pairs = dim.pairs();
    for (r, (i, j)) in pairs.iter().enumerate() {
        for (c, (k, l)) in pairs.iter().enumerate() {
            buffer[r + c * n] = dd.get(*i, *j, *k, *l);
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
