use logstrain::prelude::*;
use logstrain::StrError;
use russell_lab::approx_eq;
use russell_tensor::{t4_ddot_t2, LinElasticity, Tensor2, Tensor4};

type Mat3 = [[f64; 3]; 3];

/// Returns F = R diag(s) with R a rotation of 0.4 rad about (1,1,1)
fn rotated_stretch(s: &[f64; 3]) -> Mat3 {
    let (sin, cos) = f64::sin_cos(0.4);
    let k = 1.0 / f64::sqrt(3.0);
    let u = [k, k, k];
    let mut rr = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            let delta = if i == j { 1.0 } else { 0.0 };
            rr[i][j] = cos * delta + (1.0 - cos) * u[i] * u[j];
        }
    }
    // cross-product matrix
    rr[0][1] -= sin * u[2];
    rr[0][2] += sin * u[1];
    rr[1][0] += sin * u[2];
    rr[1][2] -= sin * u[0];
    rr[2][0] -= sin * u[1];
    rr[2][1] += sin * u[0];
    let mut ff = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            ff[i][j] = rr[i][j] * s[j];
        }
    }
    ff
}

/// Holds all quantities computed by the handlers for a deformation gradient
struct Outputs {
    strain: Tensor2,
    pk2: Tensor2,
    dm: Tensor4,
    cauchy: Tensor2,
    cs: Tensor4,
}

fn compute(ff: &DeformationGradient) -> Result<Outputs, StrError> {
    let ela = LinElasticity::new(1000.0, 0.3, ff.dim() != Dim::Three, false);
    let ks = ela.get_modulus();

    let lag = LogStrainHandler::new(Setting::Lagrangian, ff)?;
    let strain = lag.get_hencky_logarithmic_strain();
    let mut tt = Tensor2::new(strain.mandel());
    t4_ddot_t2(&mut tt, 1.0, ks, &strain);
    let pk2 = lag.convert_to_second_piola_kirchhoff_stress(&tt)?;
    let dm = lag.convert_to_material_tangent_moduli(ks, &tt)?;

    let eul = LogStrainHandler::new(Setting::Eulerian, ff)?;
    let eps = eul.get_hencky_logarithmic_strain();
    t4_ddot_t2(&mut tt, 1.0, ks, &eps);
    let cauchy = eul.convert_to_cauchy_stress(&tt)?;
    let cs = eul.convert_to_spatial_tangent_moduli(ks, &tt)?;
    Ok(Outputs {
        strain,
        pk2,
        dm,
        cauchy,
        cs,
    })
}

fn check_close(dim: Dim, a: &Outputs, b: &Outputs, tol: f64) {
    let pairs = dim.pairs();
    for (i, j) in pairs {
        approx_eq(a.strain.get(*i, *j), b.strain.get(*i, *j), tol);
        approx_eq(a.pk2.get(*i, *j), b.pk2.get(*i, *j), 1000.0 * tol);
        approx_eq(a.cauchy.get(*i, *j), b.cauchy.get(*i, *j), 1000.0 * tol);
        for (k, l) in pairs {
            approx_eq(a.dm.get(*i, *j, *k, *l), b.dm.get(*i, *j, *k, *l), 1000.0 * tol);
            approx_eq(a.cs.get(*i, *j, *k, *l), b.cs.get(*i, *j, *k, *l), 1000.0 * tol);
        }
    }
}

#[test]
fn test_near_double_eigenvalue_continuity() -> Result<(), StrError> {
    let limit = DeformationGradient::from_matrix(Dim::Three, &rotated_stretch(&[1.2, 1.2, 0.9]))?;
    let res_limit = compute(&limit)?;
    let case = LogStrainHandler::new(Setting::Lagrangian, &limit)?.eigen_case();
    assert!(matches!(case, EigenCase::TwoEqual(_)));
    for k in 3..13 {
        let delta = f64::powi(10.0, -k);
        let ff = DeformationGradient::from_matrix(Dim::Three, &rotated_stretch(&[1.2, 1.2 + delta, 0.9]))?;
        let res = compute(&ff)?;
        check_close(Dim::Three, &res, &res_limit, 10.0 * delta + 1e-12);
    }
    Ok(())
}

#[test]
fn test_near_triple_eigenvalue_continuity() -> Result<(), StrError> {
    let limit = DeformationGradient::from_matrix(Dim::Three, &rotated_stretch(&[1.1, 1.1, 1.1]))?;
    let res_limit = compute(&limit)?;
    assert_eq!(LogStrainHandler::new(Setting::Eulerian, &limit)?.eigen_case(), EigenCase::AllEqual);
    for k in 3..13 {
        let delta = f64::powi(10.0, -k);
        let s = [1.1 + delta, 1.1 - 0.5 * delta, 1.1];
        let ff = DeformationGradient::from_matrix(Dim::Three, &rotated_stretch(&s))?;
        let res = compute(&ff)?;
        check_close(Dim::Three, &res, &res_limit, 10.0 * delta + 1e-12);
    }
    Ok(())
}

#[test]
fn test_near_double_eigenvalue_continuity_2d() -> Result<(), StrError> {
    let (sin, cos) = f64::sin_cos(0.7);
    let make = |s0: f64, s1: f64| {
        let m = [[cos * s0, -sin * s1, 0.0], [sin * s0, cos * s1, 0.0], [0.0, 0.0, 0.95]];
        DeformationGradient::from_matrix(Dim::Two, &m)
    };
    let res_limit = compute(&make(1.3, 1.3)?)?;
    for k in 3..13 {
        let delta = f64::powi(10.0, -k);
        let res = compute(&make(1.3 + delta, 1.3)?)?;
        check_close(Dim::Two, &res, &res_limit, 10.0 * delta + 1e-12);
    }
    Ok(())
}

#[test]
fn test_eigenvalue_ordering_does_not_matter() -> Result<(), StrError> {
    // permuting the principal stretches (F' = P F Pᵀ) permutes all results
    let stretches = [[1.3, 0.8, 1.1], [1.2, 1.2, 0.7], [0.9, 1.4, 1.4]];
    let perms: [[usize; 3]; 6] = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    for s in &stretches {
        let original = compute(&DeformationGradient::from_components(
            Dim::Three,
            &[s[0], s[1], s[2], 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        )?)?;
        for p in &perms {
            // axis i of the original problem becomes axis p[i]
            let mut sp = [0.0; 3];
            for i in 0..3 {
                sp[p[i]] = s[i];
            }
            let permuted = compute(&DeformationGradient::from_components(
                Dim::Three,
                &[sp[0], sp[1], sp[2], 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            )?)?;
            for (i, j) in Dim::Three.pairs() {
                let (pi, pj) = (p[*i], p[*j]);
                approx_eq(permuted.strain.get(pi, pj), original.strain.get(*i, *j), 1e-14);
                approx_eq(permuted.pk2.get(pi, pj), original.pk2.get(*i, *j), 1e-11);
                approx_eq(permuted.cauchy.get(pi, pj), original.cauchy.get(*i, *j), 1e-11);
                for (k, l) in Dim::Three.pairs() {
                    let (pk, pl) = (p[*k], p[*l]);
                    approx_eq(permuted.dm.get(pi, pj, pk, pl), original.dm.get(*i, *j, *k, *l), 1e-10);
                    approx_eq(permuted.cs.get(pi, pj, pk, pl), original.cs.get(*i, *j, *k, *l), 1e-10);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_rotation_does_not_change_lagrangian_results() -> Result<(), StrError> {
    // F = R U and U give the same C
    let s = [1.25, 0.95, 1.05];
    let uu = DeformationGradient::from_components(Dim::Three, &[s[0], s[1], s[2], 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])?;
    let ff = DeformationGradient::from_matrix(Dim::Three, &rotated_stretch(&s))?;
    let a = compute(&uu)?;
    let b = compute(&ff)?;
    for (i, j) in Dim::Three.pairs() {
        approx_eq(a.strain.get(*i, *j), b.strain.get(*i, *j), 1e-14);
        approx_eq(a.pk2.get(*i, *j), b.pk2.get(*i, *j), 1e-11);
        for (k, l) in Dim::Three.pairs() {
            approx_eq(a.dm.get(*i, *j, *k, *l), b.dm.get(*i, *j, *k, *l), 1e-10);
        }
    }
    Ok(())
}
