use crate::base::{DeformationGradient, Dim};
use crate::StrError;
use russell_lab::{mat_eigen_sym_jacobi, Matrix, Vector};
use std::fmt;

/// Classifies the eigenvalues of the right Cauchy-Green tensor
///
/// The derivative of the logarithm has removable 0/0 singularities at coincident
/// eigenvalues; each case selects the corresponding confluent branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EigenCase {
    /// All eigenvalues coincide (pure dilatation)
    AllEqual,

    /// Two eigenvalues coincide; holds the index of the single (different) one
    TwoEqual(usize),

    /// All eigenvalues are distinct
    AllDistinct,
}

impl fmt::Display for EigenCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EigenCase::AllEqual => write!(f, "all equal"),
            EigenCase::TwoEqual(k) => write!(f, "two equal (single = {})", k),
            EigenCase::AllDistinct => write!(f, "all distinct"),
        }
    }
}

/// Returns true if |a - b| < tol · scale
#[inline]
fn close(a: f64, b: f64, tol: f64, scale: f64) -> bool {
    f64::abs(a - b) < tol * scale
}

fn max_abs(vp: &[f64; 3]) -> f64 {
    vp.iter().fold(0.0, |acc, v| f64::max(acc, f64::abs(*v)))
}

/// Returns true if all eigenvalues are equal
pub fn are_eigenvalues_equal(vp: &[f64; 3], tol: f64) -> bool {
    let s = max_abs(vp);
    close(vp[0], vp[1], tol, s) && close(vp[0], vp[2], tol, s) && close(vp[1], vp[2], tol, s)
}

/// Returns the index of the single eigenvalue if exactly two eigenvalues are equal, 3 otherwise
pub fn find_single_eigenvalue(vp: &[f64; 3], tol: f64) -> usize {
    let s = max_abs(vp);
    let e01 = close(vp[0], vp[1], tol, s);
    let e02 = close(vp[0], vp[2], tol, s);
    let e12 = close(vp[1], vp[2], tol, s);
    match (e01, e02, e12) {
        (true, false, false) => 2,
        (false, true, false) => 1,
        (false, false, true) => 0,
        _ => 3,
    }
}

/// Returns the eigen case corresponding to the eigenvalues
pub fn classify_eigenvalues(vp: &[f64; 3], tol: f64) -> EigenCase {
    if are_eigenvalues_equal(vp, tol) {
        return EigenCase::AllEqual;
    }
    match find_single_eigenvalue(vp, tol) {
        3 => EigenCase::AllDistinct,
        k => EigenCase::TwoEqual(k),
    }
}

/// Holds the eigenvalues and eigenvectors of the right Cauchy-Green tensor C = Fᵀ F
pub(crate) struct EigenDecomposition {
    /// Eigenvalues (equal eigenvalues are replaced by their mean)
    pub vp: [f64; 3],

    /// Eigenvectors (as columns, orthonormal)
    pub m: Matrix,

    /// Classification of the eigenvalues
    pub case: EigenCase,
}

impl EigenDecomposition {
    /// Computes the eigen decomposition of C = Fᵀ F
    ///
    /// # Input
    ///
    /// * `ff` -- deformation gradient
    /// * `compute_axial` -- (2D only) computes the axial eigenvalue; otherwise it is set to 1.0
    /// * `tol` -- relative tolerance to decide that two eigenvalues are equal
    pub fn new(ff: &DeformationGradient, compute_axial: bool, tol: f64) -> Result<Self, StrError> {
        let mut res = match ff.dim() {
            Dim::One => Self::diagonal(ff),
            Dim::Two => Self::in_plane(ff, compute_axial, tol),
            Dim::Three => Self::general(ff)?,
        };
        if res.vp.iter().any(|v| !(*v > 0.0) || !v.is_finite()) {
            return Err("the right Cauchy-Green tensor must be positive definite");
        }
        res.case = classify_eigenvalues(&res.vp, tol);
        res.merge_equal_eigenvalues();
        Ok(res)
    }

    /// Handles the 1D case: every tensor is diagonal
    fn diagonal(ff: &DeformationGradient) -> Self {
        let mut vp = [0.0; 3];
        for i in 0..3 {
            vp[i] = ff.get(i, i) * ff.get(i, i);
        }
        EigenDecomposition {
            vp,
            m: identity(),
            case: EigenCase::AllDistinct,
        }
    }

    /// Handles the 2D case: closed-form 2×2 eigenproblem plus the decoupled axial direction
    fn in_plane(ff: &DeformationGradient, compute_axial: bool, tol: f64) -> Self {
        let (f00, f01, f10, f11) = (ff.get(0, 0), ff.get(0, 1), ff.get(1, 0), ff.get(1, 1));
        let c00 = f00 * f00 + f10 * f10;
        let c11 = f01 * f01 + f11 * f11;
        let c01 = f00 * f01 + f10 * f11;
        let mean = (c00 + c11) / 2.0;
        let half_diff = (c00 - c11) / 2.0;
        let radius = f64::sqrt(half_diff * half_diff + c01 * c01);
        let vp2 = if compute_axial { ff.axial() * ff.axial() } else { 1.0 };
        let mut m = identity();
        let vp = if radius < tol * (mean + radius) {
            [mean, mean, vp2]
        } else {
            // the minor eigenvalue is det(C) / λ₀ with det(C) = (F₀₀ F₁₁ - F₀₁ F₁₀)²
            let big = mean + radius;
            let det = f00 * f11 - f01 * f10;
            let theta = 0.5 * f64::atan2(2.0 * c01, c00 - c11);
            let (s, c) = f64::sin_cos(theta);
            m.set(0, 0, c);
            m.set(1, 0, s);
            m.set(0, 1, -s);
            m.set(1, 1, c);
            [big, det * det / big, vp2]
        };
        EigenDecomposition {
            vp,
            m,
            case: EigenCase::AllDistinct,
        }
    }

    /// Handles the 3D case with the Jacobi rotation method
    fn general(ff: &DeformationGradient) -> Result<Self, StrError> {
        let mut cc = ff.right_cauchy_green();
        let mut l = Vector::new(3);
        let mut v = Matrix::new(3, 3);
        mat_eigen_sym_jacobi(&mut l, &mut v, &mut cc)?;
        Ok(EigenDecomposition {
            vp: [l[0], l[1], l[2]],
            m: v,
            case: EigenCase::AllDistinct,
        })
    }

    /// Replaces equal eigenvalues by their mean
    ///
    /// In the all-equal case, any orthonormal basis is an eigenbasis and the identity is used.
    fn merge_equal_eigenvalues(&mut self) {
        match self.case {
            EigenCase::AllEqual => {
                let mean = (self.vp[0] + self.vp[1] + self.vp[2]) / 3.0;
                self.vp = [mean, mean, mean];
                self.m = identity();
            }
            EigenCase::TwoEqual(k) => {
                let (i, j) = ((k + 1) % 3, (k + 2) % 3);
                let mean = (self.vp[i] + self.vp[j]) / 2.0;
                self.vp[i] = mean;
                self.vp[j] = mean;
            }
            EigenCase::AllDistinct => (),
        }
    }

    /// Returns the a-th eigenvector
    pub fn vector(&self, a: usize) -> [f64; 3] {
        [self.m.get(0, a), self.m.get(1, a), self.m.get(2, a)]
    }
}

/// Returns the 3×3 identity matrix
fn identity() -> Matrix {
    let mut m = Matrix::new(3, 3);
    for i in 0..3 {
        m.set(i, i, 1.0);
    }
    m
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{dilatation, sample_deformation_gradient, DEFAULT_TOL_EQUAL_EIGENVALUES};
    use russell_lab::approx_eq;

    const TOL: f64 = DEFAULT_TOL_EQUAL_EIGENVALUES;

    #[test]
    fn classification_works() {
        assert_eq!(are_eigenvalues_equal(&[2.0, 2.0, 2.0], TOL), true);
        assert_eq!(are_eigenvalues_equal(&[2.0, 2.0, 2.1], TOL), false);
        assert_eq!(find_single_eigenvalue(&[2.0, 2.0, 2.1], TOL), 2);
        assert_eq!(find_single_eigenvalue(&[2.0, 2.1, 2.0], TOL), 1);
        assert_eq!(find_single_eigenvalue(&[2.1, 2.0, 2.0], TOL), 0);
        assert_eq!(find_single_eigenvalue(&[1.0, 2.0, 3.0], TOL), 3);
        assert_eq!(find_single_eigenvalue(&[2.0, 2.0, 2.0], TOL), 3);
        assert_eq!(classify_eigenvalues(&[2.0, 2.0, 2.0], TOL), EigenCase::AllEqual);
        assert_eq!(classify_eigenvalues(&[1.0, 3.0, 1.0], TOL), EigenCase::TwoEqual(1));
        assert_eq!(classify_eigenvalues(&[1.0, 2.0, 3.0], TOL), EigenCase::AllDistinct);
        assert_eq!(
            classify_eigenvalues(&[1.0, 1.0 + 1e-15, 3.0], TOL),
            EigenCase::TwoEqual(2)
        );
    }

    #[test]
    fn display_works() {
        assert_eq!(format!("{}", EigenCase::AllEqual), "all equal");
        assert_eq!(format!("{}", EigenCase::TwoEqual(1)), "two equal (single = 1)");
        assert_eq!(format!("{}", EigenCase::AllDistinct), "all distinct");
    }

    #[test]
    fn new_captures_errors() {
        let ff = DeformationGradient::from_components(Dim::One, &[0.0, 1.0, 1.0]).unwrap();
        assert_eq!(
            EigenDecomposition::new(&ff, true, TOL).err(),
            Some("the right Cauchy-Green tensor must be positive definite")
        );
    }

    #[test]
    fn new_works_1d() {
        let ff = DeformationGradient::from_components(Dim::One, &[2.0, 1.0, 1.0]).unwrap();
        let eig = EigenDecomposition::new(&ff, true, TOL).unwrap();
        assert_eq!(eig.vp, [4.0, 1.0, 1.0]);
        assert_eq!(eig.case, EigenCase::TwoEqual(0));
    }

    /// Checks C mₐ = λₐ mₐ and the orthonormality of the eigenvectors
    fn check_eigen(ff: &DeformationGradient, eig: &EigenDecomposition, tol: f64) {
        let cc = ff.right_cauchy_green();
        for a in 0..3 {
            let ma = eig.vector(a);
            for i in 0..3 {
                let mut cm = 0.0;
                for j in 0..3 {
                    cm += cc.get(i, j) * ma[j];
                }
                approx_eq(cm, eig.vp[a] * ma[i], tol);
            }
            for b in 0..3 {
                let mb = eig.vector(b);
                let dot = ma[0] * mb[0] + ma[1] * mb[1] + ma[2] * mb[2];
                approx_eq(dot, if a == b { 1.0 } else { 0.0 }, 1e-14);
            }
        }
    }

    #[test]
    fn new_works_2d() {
        let ff = sample_deformation_gradient(Dim::Two);
        let eig = EigenDecomposition::new(&ff, true, TOL).unwrap();
        assert_eq!(eig.case, EigenCase::AllDistinct);
        approx_eq(eig.vp[2], 1.05 * 1.05, 1e-15);
        approx_eq(eig.m.get(2, 2), 1.0, 1e-15);
        check_eigen(&ff, &eig, 1e-14);

        // without the axial component
        let eig = EigenDecomposition::new(&ff, false, TOL).unwrap();
        assert_eq!(eig.vp[2], 1.0);
    }

    #[test]
    fn new_works_2d_equal_in_plane() {
        // rotation times 1.5: equal in-plane eigenvalues
        let (s, c) = f64::sin_cos(0.3);
        let ff = DeformationGradient::from_components(Dim::Two, &[1.5 * c, 1.5 * c, 1.2, -1.5 * s, 1.5 * s]).unwrap();
        let eig = EigenDecomposition::new(&ff, true, 1e-12).unwrap();
        assert_eq!(eig.case, EigenCase::TwoEqual(2));
        assert_eq!(eig.vp[0], eig.vp[1]);
        approx_eq(eig.vp[0], 2.25, 1e-14);
        check_eigen(&ff, &eig, 1e-13);
    }

    #[test]
    fn new_works_3d() {
        let ff = sample_deformation_gradient(Dim::Three);
        let eig = EigenDecomposition::new(&ff, true, TOL).unwrap();
        assert_eq!(eig.case, EigenCase::AllDistinct);
        check_eigen(&ff, &eig, 1e-13);
    }

    #[test]
    fn new_works_3d_dilatation() {
        let ff = dilatation(Dim::Three, 1.5);
        let eig = EigenDecomposition::new(&ff, true, TOL).unwrap();
        assert_eq!(eig.case, EigenCase::AllEqual);
        assert_eq!(eig.vp, [2.25, 2.25, 2.25]);
        check_eigen(&ff, &eig, 1e-14);
    }

    #[test]
    fn new_works_3d_two_equal() {
        let ff = DeformationGradient::from_components(Dim::Three, &[1.5, 2.0, 1.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
            .unwrap();
        let eig = EigenDecomposition::new(&ff, true, TOL).unwrap();
        match eig.case {
            EigenCase::TwoEqual(k) => approx_eq(eig.vp[k], 4.0, 1e-14),
            _ => panic!("two eigenvalues must be equal"),
        }
        check_eigen(&ff, &eig, 1e-14);
    }
}
