//! Divided differences of the half-logarithm f(λ) = ½ ln(λ)
//!
//! The derivatives of a spectral function of C are written in the eigenframe of C
//! with the divided differences of f (Daleckii–Krein formulas). Coincident
//! arguments yield the confluent limits f′ and f″/2.

use crate::base::TOL_CONFLUENT_SECOND_DIFFERENCE;

/// Returns f(λ) = ½ ln(λ)
#[inline]
pub(crate) fn half_log(lambda: f64) -> f64 {
    0.5 * f64::ln(lambda)
}

/// Returns the first divided difference f[x,y] = (f(x) - f(y)) / (x - y)
///
/// The ratio ln(x/y)/(x - y) is evaluated with `ln_1p` to avoid cancellation
/// when x and y are close; f[x,x] = f′(x) = 1/(2x).
pub(crate) fn first_difference(x: f64, y: f64) -> f64 {
    if x == y {
        return 0.5 / x;
    }
    let r = (x - y) / y;
    0.5 * f64::ln_1p(r) / (x - y)
}

/// Returns the second divided difference f[x,y,z]
///
/// The value is symmetric in its arguments. The largest gap is used as
/// denominator; if the three values are clustered, the confluent limit
/// f″(m)/2 = -1/(4m²) at the mean m is returned.
pub(crate) fn second_difference(x: f64, y: f64, z: f64) -> f64 {
    let mut v = [x, y, z];
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let (lo, mid, hi) = (v[0], v[1], v[2]);
    if hi - lo <= TOL_CONFLUENT_SECOND_DIFFERENCE * f64::abs(hi) {
        let m = (lo + mid + hi) / 3.0;
        return -0.25 / (m * m);
    }
    (first_difference(hi, mid) - first_difference(mid, lo)) / (hi - lo)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
