use super::Dim;
use crate::StrError;
use russell_lab::Matrix;

/// Indices (i,j) of the components of F in the order used by `from_components`
const GRADIENT_INDICES: [(usize, usize); 9] = [
    (0, 0),
    (1, 1),
    (2, 2),
    (0, 1),
    (1, 0),
    (0, 2),
    (2, 0),
    (1, 2),
    (2, 1),
];

/// Holds the deformation gradient F
///
/// The 3×3 matrix is always stored; the entries that cannot be represented in
/// the space dimension are zero:
///
/// * `1D`: only the diagonal
/// * `2D`: the in-plane block plus the axial (zz) component
/// * `3D`: all components
#[derive(Clone, Debug)]
pub struct DeformationGradient {
    dim: Dim,
    ff: Matrix,
}

impl DeformationGradient {
    /// Allocates an identity deformation gradient (no deformation)
    pub fn identity(dim: Dim) -> Self {
        let mut ff = Matrix::new(3, 3);
        for i in 0..3 {
            ff.set(i, i, 1.0);
        }
        DeformationGradient { dim, ff }
    }

    /// Allocates a new instance from the list of components
    ///
    /// # Input
    ///
    /// * `dim` -- space dimension
    /// * `components` -- the components ordered as follows
    ///     * `1D`: `[F11, F22, F33]`
    ///     * `2D`: `[F11, F22, F33, F12, F21]`
    ///     * `3D`: `[F11, F22, F33, F12, F21, F13, F31, F23, F32]`
    pub fn from_components(dim: Dim, components: &[f64]) -> Result<Self, StrError> {
        if components.len() != dim.n_gradient_components() {
            return Err("the number of components of the deformation gradient is incorrect");
        }
        let mut ff = Matrix::new(3, 3);
        for (k, value) in components.iter().enumerate() {
            let (i, j) = GRADIENT_INDICES[k];
            ff.set(i, j, *value);
        }
        Ok(DeformationGradient { dim, ff })
    }

    /// Allocates a new instance from a 3×3 matrix
    ///
    /// Returns an error if an entry not representable in `dim` is non-zero.
    pub fn from_matrix(dim: Dim, matrix: &[[f64; 3]; 3]) -> Result<Self, StrError> {
        let n = dim.n_gradient_components();
        for (k, (i, j)) in GRADIENT_INDICES.iter().enumerate() {
            if k >= n && matrix[*i][*j] != 0.0 {
                return Err("the deformation gradient has components incompatible with the space dimension");
            }
        }
        let mut ff = Matrix::new(3, 3);
        for i in 0..3 {
            for j in 0..3 {
                ff.set(i, j, matrix[i][j]);
            }
        }
        Ok(DeformationGradient { dim, ff })
    }

    /// Returns the space dimension
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Returns the (i,j) component
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.ff.get(i, j)
    }

    /// Returns the 3×3 matrix
    pub fn matrix(&self) -> &Matrix {
        &self.ff
    }

    /// Returns the axial (zz) component
    pub fn axial(&self) -> f64 {
        self.ff.get(2, 2)
    }

    /// Sets the axial (zz) component
    pub(crate) fn set_axial(&mut self, value: f64) {
        self.ff.set(2, 2, value);
    }

    /// Returns the determinant J = det(F)
    pub fn determinant(&self) -> f64 {
        let a = &self.ff;
        a.get(0, 0) * (a.get(1, 1) * a.get(2, 2) - a.get(1, 2) * a.get(2, 1))
            - a.get(0, 1) * (a.get(1, 0) * a.get(2, 2) - a.get(1, 2) * a.get(2, 0))
            + a.get(0, 2) * (a.get(1, 0) * a.get(2, 1) - a.get(1, 1) * a.get(2, 0))
    }

    /// Returns the product F · v
    pub fn apply(&self, v: &[f64; 3]) -> [f64; 3] {
        let mut u = [0.0; 3];
        for i in 0..3 {
            for j in 0..3 {
                u[i] += self.ff.get(i, j) * v[j];
            }
        }
        u
    }

    /// Returns the right Cauchy-Green tensor C = Fᵀ · F as a 3×3 matrix
    pub fn right_cauchy_green(&self) -> Matrix {
        let mut cc = Matrix::new(3, 3);
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.ff.get(k, i) * self.ff.get(k, j);
                }
                cc.set(i, j, sum);
            }
        }
        cc
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::DeformationGradient;
    use crate::base::Dim;
    use russell_lab::approx_eq;

    #[test]
    fn from_components_captures_errors() {
        assert_eq!(
            DeformationGradient::from_components(Dim::Two, &[1.0, 1.0, 1.0]).err(),
            Some("the number of components of the deformation gradient is incorrect")
        );
    }

    #[test]
    fn from_matrix_captures_errors() {
        let mat = [[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(
            DeformationGradient::from_matrix(Dim::One, &mat).err(),
            Some("the deformation gradient has components incompatible with the space dimension")
        );
        let mat = [[1.0, 0.0, 0.2], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(
            DeformationGradient::from_matrix(Dim::Two, &mat).err(),
            Some("the deformation gradient has components incompatible with the space dimension")
        );
        assert_eq!(DeformationGradient::from_matrix(Dim::Three, &mat).err(), None);
    }

    #[test]
    fn identity_works() {
        let ff = DeformationGradient::identity(Dim::Three);
        assert_eq!(ff.dim(), Dim::Three);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(ff.get(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
        assert_eq!(ff.determinant(), 1.0);
    }

    #[test]
    fn from_components_works() {
        let ff = DeformationGradient::from_components(Dim::Two, &[1.1, 1.2, 1.3, 0.4, 0.5]).unwrap();
        assert_eq!(ff.get(0, 0), 1.1);
        assert_eq!(ff.get(1, 1), 1.2);
        assert_eq!(ff.get(2, 2), 1.3);
        assert_eq!(ff.get(0, 1), 0.4);
        assert_eq!(ff.get(1, 0), 0.5);
        assert_eq!(ff.get(0, 2), 0.0);
        assert_eq!(ff.axial(), 1.3);
        approx_eq(ff.determinant(), 1.3 * (1.1 * 1.2 - 0.4 * 0.5), 1e-15);

        let comps = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let ff = DeformationGradient::from_components(Dim::Three, &comps).unwrap();
        assert_eq!(ff.get(0, 2), 6.0);
        assert_eq!(ff.get(2, 0), 7.0);
        assert_eq!(ff.get(1, 2), 8.0);
        assert_eq!(ff.get(2, 1), 9.0);
    }

    #[test]
    fn set_axial_works() {
        let mut ff = DeformationGradient::from_components(Dim::Two, &[1.1, 1.2, 1.3, 0.0, 0.0]).unwrap();
        ff.set_axial(0.9);
        assert_eq!(ff.axial(), 0.9);
        approx_eq(ff.determinant(), 1.1 * 1.2 * 0.9, 1e-15);
    }

    #[test]
    fn apply_and_right_cauchy_green_work() {
        let mat = [[1.0, 2.0, 0.0], [0.5, 1.0, 0.0], [0.0, 0.0, 2.0]];
        let ff = DeformationGradient::from_matrix(Dim::Three, &mat).unwrap();
        assert_eq!(ff.apply(&[1.0, 1.0, 1.0]), [3.0, 1.5, 2.0]);
        let cc = ff.right_cauchy_green();
        approx_eq(cc.get(0, 0), 1.25, 1e-15);
        approx_eq(cc.get(0, 1), 2.5, 1e-15);
        approx_eq(cc.get(1, 0), 2.5, 1e-15);
        approx_eq(cc.get(1, 1), 5.0, 1e-15);
        approx_eq(cc.get(2, 2), 4.0, 1e-15);
        approx_eq(cc.get(0, 2), 0.0, 1e-15);
    }
}
