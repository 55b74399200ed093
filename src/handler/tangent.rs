use super::{second_difference, LogStrainHandler, Projectors};
use russell_tensor::{t2_ddot_t2, t2_ddot_t4_ddot_t2, t2_dyad_t2_update, Tensor2, Tensor4};

impl LogStrainHandler {
    /// Converts the tangent moduli of the logarithmic space into the moduli of the target setting
    ///
    /// The eigenframe components are
    ///
    /// ```text
    /// D̃ₚ_q_r_s = 4 (f[λp,λq] K̃ₚ_q_r_s f[λr,λs] + L̃ₚ_q_r_s)
    /// ```
    ///
    /// where L̃ collects the second divided differences weighted by the frame
    /// components of T. The result is assembled as α Σ w w D̃ M ⊗ M.
    ///
    /// # Input
    ///
    /// * `alpha` -- scaling factor (e.g., 1/J)
    /// * `ks` -- tangent moduli in the logarithmic space
    /// * `tt` -- dual stress of the Hencky strain
    /// * `nn` -- basis tensors used to extract the frame components of `ks` and `tt`
    /// * `mm` -- basis tensors used to assemble the result
    pub(super) fn convert_tangent_moduli(
        &self,
        alpha: f64,
        ks: &Tensor4,
        tt: &Tensor2,
        nn: &Projectors,
        mm: &Projectors,
    ) -> Tensor4 {
        // frame components of T (full 3×3)
        let mut t = [[0.0; 3]; 3];
        for k in 0..nn.len() {
            let (a, b) = nn.pair(k);
            let value = t2_ddot_t2(nn.tensor(k), tt);
            t[a][b] = value;
            t[b][a] = value;
        }

        let vp = self.vp();
        let mut dd = Tensor4::new(self.dim().mandel());
        for r in 0..nn.len() {
            let (p, q) = nn.pair(r);
            let f_pq = self.f1(p, q);
            for c in 0..nn.len() {
                let (u, v) = nn.pair(c);
                let k_frame = t2_ddot_t4_ddot_t2(nn.tensor(r), ks, nn.tensor(c));
                let d_frame = 4.0 * (f_pq * k_frame * self.f1(u, v) + correction(&t, vp, p, q, u, v));
                let coef = alpha * nn.weight(r) * nn.weight(c) * d_frame;
                t2_dyad_t2_update(&mut dd, coef, mm.tensor(r), mm.tensor(c));
            }
        }
        dd
    }
}

/// Returns the frame component L̃ₚ_q_r_s of the second-derivative term T : ∂²E/∂C²
///
/// ```text
/// L̃ₚ_q_r_s = ½ (δqr T̃ps f[p,q,s] + δpr T̃qs f[q,p,s] + δqs T̃pr f[p,q,r] + δps T̃qr f[q,p,r])
/// ```
fn correction(t: &[[f64; 3]; 3], vp: &[f64; 3], p: usize, q: usize, r: usize, s: usize) -> f64 {
    let f2 = |a: usize, b: usize, c: usize| second_difference(vp[a], vp[b], vp[c]);
    let mut res = 0.0;
    if q == r {
        res += t[p][s] * f2(p, q, s);
    }
    if p == r {
        res += t[q][s] * f2(q, p, s);
    }
    if q == s {
        res += t[p][r] * f2(p, q, r);
    }
    if p == s {
        res += t[q][r] * f2(q, p, r);
    }
    0.5 * res
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
