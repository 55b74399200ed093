use super::EigenDecomposition;
use crate::base::{DeformationGradient, Dim};
use russell_tensor::Tensor2;

/// Holds the basis tensors sym(uₐ ⊗ u_b) built from a triad of vectors
///
/// There is one tensor per index pair of [Dim::pairs()]:
///
/// * `1D`: (0,0), (1,1), (2,2)
/// * `2D`: (0,0), (1,1), (2,2), (0,1)
/// * `3D`: (0,0), (1,1), (2,2), (0,1), (0,2), (1,2)
///
/// If the vectors are orthonormal, a symmetric tensor X is recovered from its frame
/// components X̃ₐ_b = Nₐ_b : X as X = Σ wₐ_b X̃ₐ_b Nₐ_b with wₐₐ = 1 and wₐ_b = 2 (a ≠ b).
pub(crate) struct Projectors {
    dim: Dim,
    tensors: Vec<Tensor2>,
}

impl Projectors {
    /// Allocates the basis tensors sym(uₐ ⊗ u_b)
    pub fn new(dim: Dim, u: &[[f64; 3]; 3]) -> Self {
        let tensors = dim
            .pairs()
            .iter()
            .map(|(a, b)| sym_dyad(dim, &u[*a], &u[*b]))
            .collect();
        Projectors { dim, tensors }
    }

    /// Returns the number of tensors (number of index pairs)
    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    /// Returns the tensor associated with the k-th index pair
    pub fn tensor(&self, k: usize) -> &Tensor2 {
        &self.tensors[k]
    }

    /// Returns the k-th index pair
    pub fn pair(&self, k: usize) -> (usize, usize) {
        self.dim.pairs()[k]
    }

    /// Returns the multiplicity of the k-th index pair (1 on the diagonal, 2 otherwise)
    pub fn weight(&self, k: usize) -> f64 {
        let (a, b) = self.pair(k);
        if a == b {
            1.0
        } else {
            2.0
        }
    }

    /// Performs out += coef · Nₖ
    pub fn accumulate(&self, out: &mut Tensor2, coef: f64, k: usize) {
        let nn = &self.tensors[k];
        for (i, j) in self.dim.pairs() {
            let value = out.get(*i, *j) + coef * nn.get(*i, *j);
            out.sym_set(*i, *j, value);
        }
    }
}

/// Returns sym(u ⊗ v) in the Mandel representation of `dim`
fn sym_dyad(dim: Dim, u: &[f64; 3], v: &[f64; 3]) -> Tensor2 {
    let mut tt = Tensor2::new(dim.mandel());
    for (i, j) in dim.pairs() {
        tt.sym_set(*i, *j, 0.5 * (u[*i] * v[*j] + u[*j] * v[*i]));
    }
    tt
}

/// Returns the eigenvectors of C as a triad
fn eigen_triad(eig: &EigenDecomposition) -> [[f64; 3]; 3] {
    [eig.vector(0), eig.vector(1), eig.vector(2)]
}

/// Returns the pushed-forward eigenvectors F mₐ
fn pushed_triad(eig: &EigenDecomposition, ff: &DeformationGradient) -> [[f64; 3]; 3] {
    [
        ff.apply(&eig.vector(0)),
        ff.apply(&eig.vector(1)),
        ff.apply(&eig.vector(2)),
    ]
}

/// Returns the N tensors sym(mₐ ⊗ m_b) built from the eigenvectors of C
pub(crate) fn n_tensors(dim: Dim, eig: &EigenDecomposition) -> Projectors {
    Projectors::new(dim, &eigen_triad(eig))
}

/// Returns the Eulerian N tensors sym(nₐ ⊗ n_b) with nₐ = F mₐ / ‖F mₐ‖
///
/// The vectors nₐ are the eigenvectors of the left Cauchy-Green tensor b = F Fᵀ.
pub(crate) fn eulerian_n_tensors(dim: Dim, eig: &EigenDecomposition, ff: &DeformationGradient) -> Projectors {
    let mut n = pushed_triad(eig, ff);
    for a in 0..3 {
        let norm = f64::sqrt(n[a][0] * n[a][0] + n[a][1] * n[a][1] + n[a][2] * n[a][2]);
        for i in 0..3 {
            n[a][i] /= norm;
        }
    }
    Projectors::new(dim, &n)
}

/// Returns the Eulerian M tensors sym(F mₐ ⊗ F m_b)
///
/// Expanding a Lagrangian quantity written in the eigenframe of C with these
/// tensors performs the push-forward by F.
pub(crate) fn eulerian_m_tensors(dim: Dim, eig: &EigenDecomposition, ff: &DeformationGradient) -> Projectors {
    Projectors::new(dim, &pushed_triad(eig, ff))
}

/// Returns the stretches ‖F mₐ‖
pub(crate) fn principal_stretches(eig: &EigenDecomposition, ff: &DeformationGradient) -> [f64; 3] {
    let n = pushed_triad(eig, ff);
    let mut s = [0.0; 3];
    for a in 0..3 {
        s[a] = f64::sqrt(n[a][0] * n[a][0] + n[a][1] * n[a][1] + n[a][2] * n[a][2]);
    }
    s
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
