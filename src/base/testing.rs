use super::{DeformationGradient, Dim};
use russell_tensor::{t4_ddot_t2, LinElasticity, Tensor2, Tensor4};

/// Returns a deformation gradient with distinct principal stretches and a rigid rotation
#[allow(dead_code)]
pub(crate) fn sample_deformation_gradient(dim: Dim) -> DeformationGradient {
    match dim {
        Dim::One => DeformationGradient::from_components(dim, &[1.3, 0.9, 1.1]).unwrap(),
        Dim::Two => DeformationGradient::from_components(dim, &[1.2, 0.85, 1.05, 0.3, -0.1]).unwrap(),
        Dim::Three => DeformationGradient::from_components(
            dim,
            &[1.2, 0.9, 1.1, 0.15, -0.05, 0.1, 0.2, -0.12, 0.04],
        )
        .unwrap(),
    }
}

/// Returns a deformation gradient F = c I (pure dilatation)
#[allow(dead_code)]
pub(crate) fn dilatation(dim: Dim, c: f64) -> DeformationGradient {
    let comps: Vec<_> = (0..dim.n_gradient_components())
        .map(|k| if k < 3 { c } else { 0.0 })
        .collect();
    DeformationGradient::from_components(dim, &comps).unwrap()
}

/// Returns the isotropic elastic modulus in the Mandel representation of `dim`
#[allow(dead_code)]
pub(crate) fn elastic_modulus(dim: Dim, young: f64, poisson: f64) -> Tensor4 {
    let ela = LinElasticity::new(young, poisson, dim != Dim::Three, false);
    ela.get_modulus().clone()
}

/// Returns the Hencky-elastic dual stress T = D : E
#[allow(dead_code)]
pub(crate) fn hencky_elastic_stress(dd: &Tensor4, strain: &Tensor2) -> Tensor2 {
    let mut tt = Tensor2::new(strain.mandel());
    t4_ddot_t2(&mut tt, 1.0, dd, strain);
    tt
}

/// Returns a generic symmetric tensor
#[allow(dead_code)]
pub(crate) fn sample_stress(dim: Dim) -> Tensor2 {
    let mut tt = Tensor2::new(dim.mandel());
    let values = [120.0, -35.0, 60.0, 25.0, -15.0, 40.0];
    for (k, (i, j)) in dim.pairs().iter().enumerate() {
        tt.sym_set(*i, *j, values[k]);
    }
    tt
}

/// Returns a generic fourth-order tensor with minor symmetries only
#[allow(dead_code)]
pub(crate) fn sample_modulus(dim: Dim) -> Tensor4 {
    let mut dd = elastic_modulus(dim, 1000.0, 0.3);
    let pairs = dim.pairs();
    for (r, (i, j)) in pairs.iter().enumerate() {
        for (c, (k, l)) in pairs.iter().enumerate() {
            let extra = 10.0 * ((r + 2 * c) as f64) - 5.0 * (r as f64);
            let value = dd.get(*i, *j, *k, *l) + extra;
            dd.sym_set(*i, *j, *k, *l, value);
        }
    }
    dd
}
