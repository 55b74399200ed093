//! Converts tensors from/to flat buffers in the scaled ("Voigt-like") convention
//!
//! The components are ordered as 11, 22, 33, 12, 13, 23 (truncated to the number
//! of components of the space dimension) and the off-diagonal components are
//! multiplied by √2. Fourth-order tensors are stored row-major as n×n matrices
//! with the same scaling applied to rows and columns. With this convention, the
//! double-dot products of tensors become plain matrix-vector products.

use super::Dim;
use crate::StrError;
use russell_tensor::{Tensor2, Tensor4, SQRT_2};

/// Returns an error if the Mandel representation of `tt` does not match `dim`
pub(crate) fn check_tensor2(dim: Dim, tt: &Tensor2) -> Result<(), StrError> {
    if tt.mandel() != dim.mandel() {
        return Err("the second-order tensor has an incompatible Mandel representation");
    }
    Ok(())
}

/// Returns an error if the Mandel representation of `dd` does not match `dim`
pub(crate) fn check_tensor4(dim: Dim, dd: &Tensor4) -> Result<(), StrError> {
    let (nrow, ncol) = dd.matrix().dims();
    let n = dim.mandel().dim();
    if nrow != n || ncol != n {
        return Err("the fourth-order tensor has an incompatible Mandel representation");
    }
    Ok(())
}

/// Returns an error if the length of a second-order tensor buffer does not match `dim`
pub(crate) fn check_len2(dim: Dim, buffer: &[f64]) -> Result<(), StrError> {
    if buffer.len() != dim.n_components() {
        return Err("the buffer length is incompatible with the space dimension");
    }
    Ok(())
}

/// Returns an error if the length of a fourth-order tensor buffer does not match `dim`
pub(crate) fn check_len4(dim: Dim, buffer: &[f64]) -> Result<(), StrError> {
    let n = dim.n_components();
    if buffer.len() != n * n {
        return Err("the buffer length is incompatible with the space dimension");
    }
    Ok(())
}

#[inline]
fn scale(i: usize, j: usize) -> f64 {
    if i == j {
        1.0
    } else {
        SQRT_2
    }
}

/// Allocates a second-order tensor from a scaled buffer
pub fn tensor2_from_buffer(dim: Dim, buffer: &[f64]) -> Result<Tensor2, StrError> {
    check_len2(dim, buffer)?;
    let mut tt = Tensor2::new(dim.mandel());
    for (k, (i, j)) in dim.pairs().iter().enumerate() {
        tt.sym_set(*i, *j, buffer[k] / scale(*i, *j));
    }
    Ok(tt)
}

/// Writes a second-order tensor into a scaled buffer
pub fn tensor2_to_buffer(buffer: &mut [f64], dim: Dim, tt: &Tensor2) -> Result<(), StrError> {
    check_len2(dim, buffer)?;
    check_tensor2(dim, tt)?;
    for (k, (i, j)) in dim.pairs().iter().enumerate() {
        buffer[k] = scale(*i, *j) * tt.get(*i, *j);
    }
    Ok(())
}

/// Allocates a fourth-order tensor from a scaled row-major n×n buffer
pub fn tensor4_from_buffer(dim: Dim, buffer: &[f64]) -> Result<Tensor4, StrError> {
    check_len4(dim, buffer)?;
    let n = dim.n_components();
    let pairs = dim.pairs();
    let mut dd = Tensor4::new(dim.mandel());
    for (r, (i, j)) in pairs.iter().enumerate() {
        for (c, (k, l)) in pairs.iter().enumerate() {
            let value = buffer[c + r * n] / (scale(*i, *j) * scale(*k, *l));
            dd.sym_set(*i, *j, *k, *l, value);
        }
    }
    Ok(dd)
}

/// Writes a fourth-order tensor into a scaled row-major n×n buffer
pub fn tensor4_to_buffer(buffer: &mut [f64], dim: Dim, dd: &Tensor4) -> Result<(), StrError> {
    check_len4(dim, buffer)?;
    check_tensor4(dim, dd)?;
    let n = dim.n_components();
    let pairs = dim.pairs();
    for (r, (i, j)) in pairs.iter().enumerate() {
        for (c, (k, l)) in pairs.iter().enumerate() {
            buffer[c + r * n] = scale(*i, *j) * scale(*k, *l) * dd.get(*i, *j, *k, *l);
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
