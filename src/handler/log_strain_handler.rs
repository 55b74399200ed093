use super::{eulerian_m_tensors, eulerian_n_tensors, first_difference, half_log, n_tensors, principal_stretches};
use super::{EigenCase, EigenDecomposition, Projectors};
use crate::base::buffer::{check_tensor2, check_tensor4};
use crate::base::{Config, DeformationGradient, Dim, Setting};
use crate::StrError;
use russell_lab::Matrix;
use russell_tensor::{t2_ddot_t2, t2_dyad_t2_update, t4_ddot_t2, Tensor2, Tensor4};
use std::fmt;

/// Computes the Hencky (logarithmic) strain and converts stresses and tangent moduli
///
/// The handler couples a small-strain constitutive model, written in terms of the
/// Hencky strain E = ½ ln C and its dual stress T, to a finite-strain solver
/// working with the second Piola-Kirchhoff stress S (Lagrangian setting) or the
/// Cauchy stress σ (Eulerian setting).
///
/// All derived quantities (eigenvalues, eigenvectors, half-logarithms, and the
/// derivative p = ∂E/∂C) are computed once by the constructor and never change
/// afterwards. In 2D, only the axial component of F may be updated afterwards
/// (see [LogStrainHandler::update_axial_deformation_gradient()]).
///
/// # Example
///
/// ```
/// use logstrain::prelude::*;
/// use russell_lab::approx_eq;
///
/// let ff = DeformationGradient::from_components(Dim::One, &[2.0, 1.0, 1.0]).unwrap();
/// let handler = LogStrainHandler::new(Setting::Lagrangian, &ff).unwrap();
/// let strain = handler.get_hencky_logarithmic_strain();
/// approx_eq(strain.get(0, 0), f64::ln(2.0), 1e-15);
/// approx_eq(strain.get(1, 1), 0.0, 1e-15);
/// ```
pub struct LogStrainHandler {
    /// Configuration of the conversions
    setting: Setting,

    /// Space dimension
    dim: Dim,

    /// Deformation gradient
    ff: DeformationGradient,

    /// Eigenvalues and eigenvectors of the right Cauchy-Green tensor
    eig: EigenDecomposition,

    /// Half the logarithm of the eigenvalues of the right Cauchy-Green tensor
    e: [f64; 3],

    /// Derivative of the Hencky strain with respect to the right Cauchy-Green tensor
    pp: Tensor4,
}

impl LogStrainHandler {
    /// Allocates a new instance with the default configuration
    pub fn new(setting: Setting, ff: &DeformationGradient) -> Result<Self, StrError> {
        LogStrainHandler::with_config(&Config::new(setting), ff)
    }

    /// Allocates a new instance
    pub fn with_config(config: &Config, ff: &DeformationGradient) -> Result<Self, StrError> {
        let dim = ff.dim();
        let eig = EigenDecomposition::new(ff, config.compute_axial, config.tol_equal_eigenvalues)?;
        let e = [half_log(eig.vp[0]), half_log(eig.vp[1]), half_log(eig.vp[2])];

        // p = Σ wₐ_b f[λₐ,λ_b] Nₐ_b ⊗ Nₐ_b
        let nn = n_tensors(dim, &eig);
        let mut pp = Tensor4::new(dim.mandel());
        for k in 0..nn.len() {
            let (a, b) = nn.pair(k);
            let coef = nn.weight(k) * first_difference(eig.vp[a], eig.vp[b]);
            t2_dyad_t2_update(&mut pp, coef, nn.tensor(k), nn.tensor(k));
        }

        Ok(LogStrainHandler {
            setting: config.setting,
            dim,
            ff: ff.clone(),
            eig,
            e,
            pp,
        })
    }

    /// Updates the axial (out-of-plane) component of the deformation gradient (2D only)
    ///
    /// **Note:** Only F is updated; the Hencky strain, the eigenvalues, the
    /// eigenvectors, and p are kept. The full deformation gradient is only
    /// needed by the stress and tangent conversions in the Eulerian setting.
    /// This is used by plane-stress iterations on the axial stretch.
    pub fn update_axial_deformation_gradient(&mut self, fzz: f64) -> Result<(), StrError> {
        if self.dim != Dim::Two {
            return Err("the axial deformation gradient can only be updated in 2D");
        }
        self.ff.set_axial(fzz);
        Ok(())
    }

    /// Returns the setting
    pub fn setting(&self) -> Setting {
        self.setting
    }

    /// Returns the space dimension
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Returns the deformation gradient
    pub fn deformation_gradient(&self) -> &DeformationGradient {
        &self.ff
    }

    /// Returns the eigenvalues of the right Cauchy-Green tensor
    pub fn eigenvalues(&self) -> &[f64; 3] {
        &self.eig.vp
    }

    /// Returns the eigenvectors (as columns) of the right Cauchy-Green tensor
    pub fn eigenvectors(&self) -> &Matrix {
        &self.eig.m
    }

    /// Returns the classification of the eigenvalues
    pub fn eigen_case(&self) -> EigenCase {
        self.eig.case
    }

    /// Returns half the logarithm of the eigenvalues (principal Hencky strains)
    pub fn half_log_eigenvalues(&self) -> &[f64; 3] {
        &self.e
    }

    /// Returns the derivative p = ∂E/∂C of the Hencky strain with respect to C
    pub fn derivative(&self) -> &Tensor4 {
        &self.pp
    }

    /// Returns the Hencky strain
    ///
    /// * Lagrangian setting: E = ½ ln C = Σ eₐ mₐ ⊗ mₐ
    /// * Eulerian setting: ε = ½ ln b = Σ eₐ nₐ ⊗ nₐ
    pub fn get_hencky_logarithmic_strain(&self) -> Tensor2 {
        let nn = match self.setting {
            Setting::Lagrangian => n_tensors(self.dim, &self.eig),
            Setting::Eulerian => eulerian_n_tensors(self.dim, &self.eig, &self.ff),
        };
        let mut strain = Tensor2::new(self.dim.mandel());
        for a in 0..3 {
            nn.accumulate(&mut strain, self.e[a], a);
        }
        strain
    }

    /// Returns the second Piola-Kirchhoff stress S = 2 T : p
    ///
    /// # Input
    ///
    /// * `tt` -- dual stress T of the Hencky strain
    pub fn convert_to_second_piola_kirchhoff_stress(&self, tt: &Tensor2) -> Result<Tensor2, StrError> {
        self.setting.check_lagrangian()?;
        check_tensor2(self.dim, tt)?;
        let mut ss = Tensor2::new(self.dim.mandel());
        t4_ddot_t2(&mut ss, 2.0, &self.pp, tt);
        Ok(ss)
    }

    /// Returns the dual stress T of the Hencky strain from the second Piola-Kirchhoff stress S
    pub fn convert_from_second_piola_kirchhoff_stress(&self, ss: &Tensor2) -> Result<Tensor2, StrError> {
        self.setting.check_lagrangian()?;
        check_tensor2(self.dim, ss)?;
        let nn = n_tensors(self.dim, &self.eig);
        let mut tt = Tensor2::new(self.dim.mandel());
        for k in 0..nn.len() {
            let (a, b) = nn.pair(k);
            let s_ab = t2_ddot_t2(nn.tensor(k), ss);
            let t_ab = s_ab / (2.0 * self.f1(a, b));
            nn.accumulate(&mut tt, nn.weight(k) * t_ab, k);
        }
        Ok(tt)
    }

    /// Returns the Cauchy stress σ = (1/J) F · S · Fᵀ
    ///
    /// # Input
    ///
    /// * `tt` -- dual stress T of the (Eulerian) Hencky strain
    pub fn convert_to_cauchy_stress(&self, tt: &Tensor2) -> Result<Tensor2, StrError> {
        self.setting.check_eulerian()?;
        check_tensor2(self.dim, tt)?;
        let nn = eulerian_n_tensors(self.dim, &self.eig, &self.ff);
        let mm = eulerian_m_tensors(self.dim, &self.eig, &self.ff);
        let jj = self.ff.determinant();
        let mut sig = Tensor2::new(self.dim.mandel());
        for k in 0..nn.len() {
            let (a, b) = nn.pair(k);
            let s_ab = 2.0 * self.f1(a, b) * t2_ddot_t2(nn.tensor(k), tt);
            mm.accumulate(&mut sig, nn.weight(k) * s_ab / jj, k);
        }
        Ok(sig)
    }

    /// Returns the dual stress T of the (Eulerian) Hencky strain from the Cauchy stress σ
    pub fn convert_from_cauchy_stress(&self, sig: &Tensor2) -> Result<Tensor2, StrError> {
        self.setting.check_eulerian()?;
        check_tensor2(self.dim, sig)?;
        let nn = eulerian_n_tensors(self.dim, &self.eig, &self.ff);
        let s = principal_stretches(&self.eig, &self.ff);
        let jj = self.ff.determinant();
        let mut tt = Tensor2::new(self.dim.mandel());
        for k in 0..nn.len() {
            let (a, b) = nn.pair(k);
            let s_ab = jj * t2_ddot_t2(nn.tensor(k), sig) / (s[a] * s[b]);
            let t_ab = s_ab / (2.0 * self.f1(a, b));
            nn.accumulate(&mut tt, nn.weight(k) * t_ab, k);
        }
        Ok(tt)
    }

    /// Returns the material tangent moduli ∂S/∂E_GL (E_GL: Green-Lagrange strain)
    ///
    /// # Input
    ///
    /// * `ks` -- tangent moduli in the logarithmic space ∂T/∂E
    /// * `tt` -- dual stress T of the Hencky strain
    pub fn convert_to_material_tangent_moduli(&self, ks: &Tensor4, tt: &Tensor2) -> Result<Tensor4, StrError> {
        self.setting.check_lagrangian()?;
        check_tensor4(self.dim, ks)?;
        check_tensor2(self.dim, tt)?;
        let nn = n_tensors(self.dim, &self.eig);
        Ok(self.convert_tangent_moduli(1.0, ks, tt, &nn, &nn))
    }

    /// Returns the spatial tangent moduli (push-forward of the material moduli by F)
    ///
    /// These moduli relate the Lie derivative (Truesdell rate) of the Kirchhoff
    /// stress to the rate of deformation.
    ///
    /// # Input
    ///
    /// * `ks` -- tangent moduli in the logarithmic space ∂T/∂ε
    /// * `tt` -- dual stress T of the (Eulerian) Hencky strain
    pub fn convert_to_spatial_tangent_moduli(&self, ks: &Tensor4, tt: &Tensor2) -> Result<Tensor4, StrError> {
        self.setting.check_eulerian()?;
        check_tensor4(self.dim, ks)?;
        check_tensor2(self.dim, tt)?;
        let (nn, mm) = self.eulerian_sets();
        Ok(self.convert_tangent_moduli(1.0, ks, tt, &nn, &mm))
    }

    /// Returns the moduli associated with the Truesdell rate of the Cauchy stress
    ///
    /// Since J σ̊ = Lᵥ τ, these moduli are the spatial moduli divided by J.
    /// They are used by explicit dynamics codes.
    pub fn convert_to_cauchy_stress_truesdell_rate_tangent_moduli(
        &self,
        ks: &Tensor4,
        tt: &Tensor2,
    ) -> Result<Tensor4, StrError> {
        self.setting.check_eulerian()?;
        check_tensor4(self.dim, ks)?;
        check_tensor2(self.dim, tt)?;
        let (nn, mm) = self.eulerian_sets();
        let jj = self.ff.determinant();
        Ok(self.convert_tangent_moduli(1.0 / jj, ks, tt, &nn, &mm))
    }

    /// Returns the moduli associated with the Jaumann rate of the Kirchhoff stress divided by J
    ///
    /// This is the operator expected by Abaqus/Standard:
    ///
    /// ```text
    /// C = Cₛ/J + ½ (δik σjl + δil σjk + δjk σil + δjl σik)
    /// ```
    pub fn convert_to_jaumann_rate_tangent_moduli(&self, ks: &Tensor4, tt: &Tensor2) -> Result<Tensor4, StrError> {
        let mut cc = self.convert_to_cauchy_stress_truesdell_rate_tangent_moduli(ks, tt)?;
        let sig = self.convert_to_cauchy_stress(tt)?;
        let delta = |i: usize, j: usize| if i == j { 1.0 } else { 0.0 };
        let pairs = self.dim.pairs();
        for (i, j) in pairs {
            for (k, l) in pairs {
                let (i, j, k, l) = (*i, *j, *k, *l);
                let extra = 0.5
                    * (delta(i, k) * sig.get(j, l)
                        + delta(i, l) * sig.get(j, k)
                        + delta(j, k) * sig.get(i, l)
                        + delta(j, l) * sig.get(i, k));
                let value = cc.get(i, j, k, l) + extra;
                cc.sym_set(i, j, k, l, value);
            }
        }
        Ok(cc)
    }

    /// Returns the first divided difference of ½ ln at the eigenvalues a and b
    #[inline]
    pub(super) fn f1(&self, a: usize, b: usize) -> f64 {
        first_difference(self.eig.vp[a], self.eig.vp[b])
    }

    /// Returns the eigenvalues of C
    #[inline]
    pub(super) fn vp(&self) -> &[f64; 3] {
        &self.eig.vp
    }

    /// Returns the N and M tensors of the Eulerian setting
    fn eulerian_sets(&self) -> (Projectors, Projectors) {
        (
            eulerian_n_tensors(self.dim, &self.eig, &self.ff),
            eulerian_m_tensors(self.dim, &self.eig, &self.ff),
        )
    }
}

impl fmt::Display for LogStrainHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logarithmic strain handler\n").unwrap();
        write!(f, "==========================\n").unwrap();
        write!(f, "setting = {}\n", self.setting).unwrap();
        write!(f, "dim = {}\n", self.dim).unwrap();
        write!(f, "eigenvalues = {:?}\n", self.eig.vp).unwrap();
        write!(f, "eigen_case = {}\n", self.eig.case).unwrap();
        write!(f, "half_log_eigenvalues = {:?}\n", self.e).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
